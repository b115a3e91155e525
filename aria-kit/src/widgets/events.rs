//! Event handling result types shared by all widgets.

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, the host should apply its default behavior.
    Ignored,
    /// Event was consumed, stop propagation and prevent the default.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// What a widget did with an event.
///
/// Effects are listed in the order the host should apply them. They are
/// produced after the widget's state transition has completed, so applying
/// one (and feeding any resulting events back in) never observes a
/// half-updated widget.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOutcome<E> {
    pub result: EventResult,
    pub effects: Vec<E>,
}

impl<E> EventOutcome<E> {
    pub fn ignored() -> Self {
        Self {
            result: EventResult::Ignored,
            effects: Vec::new(),
        }
    }

    pub fn consumed() -> Self {
        Self {
            result: EventResult::Consumed,
            effects: Vec::new(),
        }
    }

    pub fn consumed_with(effects: Vec<E>) -> Self {
        Self {
            result: EventResult::Consumed,
            effects,
        }
    }

    pub fn is_handled(&self) -> bool {
        self.result.is_handled()
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

impl<E> Default for EventOutcome<E> {
    fn default() -> Self {
        Self::ignored()
    }
}

//! Tooltip widget state.

use std::sync::{Arc, RwLock};

use aria_dom::{AriaAttributes, IdCounter, Rect, make_id, position_tooltip_default};

use crate::error::ConfigError;

use super::{TooltipConfig, TooltipCoordinator};

/// Unique identifier for a Tooltip widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooltipId(usize);

impl TooltipId {
    fn new() -> Self {
        static COUNTER: IdCounter = IdCounter::new();
        Self(COUNTER.next())
    }
}

impl std::fmt::Display for TooltipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tooltip--{}", self.0)
    }
}

/// Placement function: `(trigger, tooltip, viewport) -> placed tooltip`.
pub type PositionFn = Arc<dyn Fn(Rect, Rect, Rect) -> Rect + Send + Sync>;

/// Snapshot of a trigger's tooltip state.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerState {
    pub trigger_id: String,
    /// Id of the tooltip element, referenced by `aria-describedby`.
    pub description_id: String,
    pub is_visible: bool,
    pub trigger_rect: Option<Rect>,
}

/// Attributes for the trigger element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerAttributes {
    pub id: String,
    pub aria_describedby: Option<String>,
    pub data_state: &'static str,
}

impl TriggerAttributes {
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set("id", self.id.clone())
            .set_opt("aria-describedby", self.aria_describedby.clone())
            .set("data-state", self.data_state)
    }
}

/// Attributes for the tooltip popup.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipAttributes {
    pub id: String,
    pub trigger_rect: Option<Rect>,
    pub is_visible: bool,
    pub label: String,
    /// What assistive technology reads; the aria-label when one is set.
    pub accessible_text: String,
}

impl TooltipAttributes {
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .role("tooltip")
            .set("id", self.id.clone())
            .set_opt(
                "aria-label",
                (self.accessible_text != self.label).then(|| self.accessible_text.clone()),
            )
    }
}

struct TooltipInner {
    config: TooltipConfig,
    trigger_rect: Option<Rect>,
    position: PositionFn,
}

impl std::fmt::Debug for TooltipInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TooltipInner")
            .field("config", &self.config)
            .field("trigger_rect", &self.trigger_rect)
            .finish_non_exhaustive()
    }
}

/// A tooltip bound to one trigger element.
///
/// # Example
///
/// ```ignore
/// let coordinator = TooltipCoordinator::new();
/// let save = Tooltip::new(&coordinator, TooltipConfig::new("Save"))?;
///
/// // host event loop
/// save.on_mouse_enter(Instant::now());
/// if let Some(deadline) = coordinator.next_deadline() {
///     // wake up at `deadline` and call coordinator.advance(now)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Tooltip {
    id: TooltipId,
    coordinator: TooltipCoordinator,
    inner: Arc<RwLock<TooltipInner>>,
}

impl Tooltip {
    /// Create a tooltip that shares visibility with all others on `coordinator`.
    pub fn new(coordinator: &TooltipCoordinator, config: TooltipConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            id: TooltipId::new(),
            coordinator: coordinator.clone(),
            inner: Arc::new(RwLock::new(TooltipInner {
                config,
                trigger_rect: None,
                position: Arc::new(position_tooltip_default),
            })),
        })
    }

    /// Replace the placement function.
    pub fn with_position(
        self,
        position: impl Fn(Rect, Rect, Rect) -> Rect + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.position = Arc::new(position);
        }
        self
    }

    /// Get the unique ID for this tooltip.
    pub fn id(&self) -> TooltipId {
        self.id
    }

    /// Id of the tooltip element.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Id of the trigger element.
    pub fn trigger_id(&self) -> String {
        make_id(["tooltip-trigger", self.id.0.to_string().as_str()])
    }

    pub fn coordinator(&self) -> &TooltipCoordinator {
        &self.coordinator
    }

    pub fn config(&self) -> TooltipConfig {
        self.inner
            .read()
            .map(|guard| guard.config.clone())
            .unwrap_or_default()
    }

    /// Whether this tooltip is the visible one.
    pub fn is_visible(&self) -> bool {
        self.coordinator.visible() == Some(self.id)
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Record the trigger's measured rect (called after layout).
    pub fn set_trigger_rect(&self, rect: Rect) {
        if let Ok(mut guard) = self.inner.write() {
            guard.trigger_rect = Some(rect);
        }
    }

    pub fn trigger_rect(&self) -> Option<Rect> {
        self.inner
            .read()
            .map(|guard| guard.trigger_rect)
            .unwrap_or(None)
    }

    /// Where to draw the tooltip, given its measured size.
    ///
    /// `None` while hidden, or while the trigger is unmeasured or collapsed.
    pub fn position(&self, tooltip_rect: Rect, viewport: Rect) -> Option<Rect> {
        if !self.is_visible() {
            return None;
        }
        let guard = self.inner.read().ok()?;
        let trigger = guard.trigger_rect.filter(|rect| !rect.is_empty())?;
        Some((guard.position)(trigger, tooltip_rect, viewport))
    }

    // -------------------------------------------------------------------------
    // State and attribute bundles
    // -------------------------------------------------------------------------

    pub fn trigger_state(&self) -> TriggerState {
        TriggerState {
            trigger_id: self.trigger_id(),
            description_id: self.id_string(),
            is_visible: self.is_visible(),
            trigger_rect: self.trigger_rect(),
        }
    }

    /// Props for the trigger element.
    pub fn trigger_attributes(&self) -> TriggerAttributes {
        let visible = self.is_visible();
        TriggerAttributes {
            id: self.trigger_id(),
            aria_describedby: visible.then(|| self.id_string()),
            data_state: if visible {
                "tooltip-visible"
            } else {
                "tooltip-hidden"
            },
        }
    }

    /// Props for the tooltip popup.
    pub fn tooltip_attributes(&self) -> TooltipAttributes {
        let config = self.config();
        TooltipAttributes {
            id: self.id_string(),
            trigger_rect: self.trigger_rect(),
            is_visible: self.is_visible(),
            accessible_text: config.accessible_text().to_string(),
            label: config.label,
        }
    }
}

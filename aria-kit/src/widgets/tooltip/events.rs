//! Event handling for the Tooltip widget.

use std::time::Instant;

use aria_dom::{Key, Modifiers};

use super::{Tooltip, VisibilityChange};

impl Tooltip {
    /// Pointer entered the trigger.
    pub fn on_mouse_enter(&self, now: Instant) -> Option<VisibilityChange> {
        let delay = self.config().show_delay;
        self.coordinator().activate(self.id(), now, delay)
    }

    /// Pointer left the trigger. Hides immediately.
    pub fn on_mouse_leave(&self, now: Instant) -> Option<VisibilityChange> {
        let grace = self.config().leave_grace;
        self.coordinator().deactivate(self.id(), now, grace)
    }

    /// Trigger gained focus.
    pub fn on_focus(&self, now: Instant) -> Option<VisibilityChange> {
        self.on_mouse_enter(now)
    }

    /// Trigger lost focus. Hides immediately.
    pub fn on_blur(&self, now: Instant) -> Option<VisibilityChange> {
        self.on_mouse_leave(now)
    }

    /// Pointer pressed on the trigger; the user is acting, not reading.
    pub fn on_mouse_down(&self) -> Option<VisibilityChange> {
        self.coordinator().dismiss(self.id())
    }

    /// Key pressed while the trigger is focused.
    ///
    /// Escape dismisses, as does activating the trigger with Enter or Space.
    pub fn on_key(&self, key: Key, modifiers: Modifiers) -> Option<VisibilityChange> {
        if modifiers.is_chord() {
            return None;
        }
        match key {
            Key::Escape => self.coordinator().dismiss(self.id()),
            key if key.is_activation() => self.coordinator().dismiss(self.id()),
            _ => None,
        }
    }

    /// The trigger is being removed. Releases the shared slot if owned.
    pub fn unmount(&self) -> Option<VisibilityChange> {
        self.coordinator().release(self.id())
    }
}

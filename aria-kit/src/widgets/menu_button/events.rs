//! Event handling for the MenuButton widget.

use aria_dom::{Key, Modifiers, MouseButton};

use crate::widgets::events::{EventOutcome, EventResult};

use super::MenuButton;
use super::state::{MenuEffect, MenuInner};

impl MenuButton {
    /// Pointer pressed on the button. Toggles the menu.
    ///
    /// Opening this way leaves nothing selected. Closing this way is a
    /// pointer close: focus stays where the pointer put it.
    pub fn on_button_pointer_down(&self, button: MouseButton) -> EventOutcome<MenuEffect> {
        if button != MouseButton::Left {
            return EventOutcome::ignored();
        }
        self.update(|inner| {
            if inner.is_open {
                EventOutcome::consumed_with(inner.close(false, true))
            } else {
                EventOutcome::consumed_with(inner.open(None))
            }
        })
    }

    /// Key pressed while the button is focused.
    pub fn on_button_key(&self, key: Key, modifiers: Modifiers) -> EventOutcome<MenuEffect> {
        if modifiers.is_chord() {
            return EventOutcome::ignored();
        }
        self.update(|inner| {
            if !inner.is_open {
                // Closed state - Enter/Space open without a selection,
                // arrows open at the first or last item
                let selection = match key {
                    key if key.is_activation() => None,
                    Key::Down => inner.first_enabled(),
                    Key::Up => inner.last_enabled(),
                    _ => return EventOutcome::ignored(),
                };
                return EventOutcome::consumed_with(inner.open(selection));
            }
            match key {
                key if key.is_activation() => EventOutcome::consumed_with(inner.close(true, false)),
                _ => list_key(inner, key),
            }
        })
    }

    /// Key pressed while the list is focused.
    pub fn on_list_key(&self, key: Key, modifiers: Modifiers) -> EventOutcome<MenuEffect> {
        if modifiers.is_chord() {
            return EventOutcome::ignored();
        }
        self.update(|inner| {
            if !inner.is_open {
                return EventOutcome::ignored();
            }
            match key {
                key if key.is_activation() => match inner.selection {
                    Some(index) => EventOutcome::consumed_with(inner.select(index, false)),
                    None => EventOutcome::consumed(),
                },
                _ => list_key(inner, key),
            }
        })
    }

    /// Pointer moved over an item.
    pub fn on_item_pointer_move(&self, index: usize) -> EventOutcome<MenuEffect> {
        self.update(|inner| {
            let enabled = inner.items.get(index).is_some_and(|item| !item.disabled);
            if !inner.is_open || !enabled {
                return EventOutcome::ignored();
            }
            inner.selection = Some(index);
            EventOutcome::consumed()
        })
    }

    /// Pointer left an item.
    pub fn on_item_pointer_leave(&self, index: usize) -> EventOutcome<MenuEffect> {
        self.update(|inner| {
            if inner.selection != Some(index) {
                return EventOutcome::ignored();
            }
            inner.selection = None;
            EventOutcome::consumed()
        })
    }

    /// Pointer released on an item. Disabled items ignore it.
    pub fn on_item_click(&self, index: usize) -> EventOutcome<MenuEffect> {
        self.update(|inner| {
            if !inner.is_open {
                return EventOutcome::ignored();
            }
            let effects = inner.select(index, true);
            if effects.is_empty() {
                EventOutcome::ignored()
            } else {
                EventOutcome::consumed_with(effects)
            }
        })
    }

    /// Pointer pressed anywhere outside the button and the list.
    pub fn on_outside_pointer_down(&self) -> EventOutcome<MenuEffect> {
        self.update(|inner| {
            if !inner.is_open {
                return EventOutcome::ignored();
            }
            EventOutcome {
                result: EventResult::Ignored,
                effects: inner.close(false, true),
            }
        })
    }

    /// The list lost focus. `focus_within` is true when focus moved to
    /// another element inside the menu.
    pub fn on_list_blur(&self, focus_within: bool) -> EventOutcome<MenuEffect> {
        self.update(|inner| {
            if !inner.is_open || focus_within {
                return EventOutcome::ignored();
            }
            EventOutcome {
                result: EventResult::Ignored,
                effects: inner.close(false, false),
            }
        })
    }
}

/// Navigation shared by the button (while open) and the list.
fn list_key(inner: &mut MenuInner, key: Key) -> EventOutcome<MenuEffect> {
    match key {
        Key::Escape => EventOutcome::consumed_with(inner.close(true, false)),
        Key::Down => {
            let next = inner.next_enabled();
            inner.move_to(next);
            EventOutcome::consumed()
        }
        Key::Up => {
            let prev = inner.prev_enabled();
            inner.move_to(prev);
            EventOutcome::consumed()
        }
        Key::Home => {
            let first = inner.first_enabled();
            inner.move_to(first);
            EventOutcome::consumed()
        }
        Key::End => {
            let last = inner.last_enabled();
            inner.move_to(last);
            EventOutcome::consumed()
        }
        // Tab closes and lets focus move on as usual.
        Key::Tab | Key::BackTab => EventOutcome {
            result: EventResult::Ignored,
            effects: inner.close(false, false),
        },
        key => match key.printable() {
            Some(c) => {
                let found = inner.typeahead(c);
                inner.move_to(found);
                EventOutcome::consumed()
            }
            None => EventOutcome::ignored(),
        },
    }
}

//! Event handling for the Combobox widget.

use aria_dom::{Key, Modifiers};

use crate::widgets::events::{EventOutcome, EventResult};

use super::Combobox;
use super::state::{ComboboxEffect, ComboboxInner};

impl Combobox {
    /// The input's text changed.
    pub fn on_input_change(&self, text: &str) -> EventOutcome<ComboboxEffect> {
        self.update(|inner| EventOutcome::consumed_with(inner.change(text)))
    }

    /// Key pressed in the input.
    ///
    /// Only keys the list reacts to are consumed; text editing keys are left
    /// to the input and come back through [`on_input_change`](Self::on_input_change).
    pub fn on_input_key(&self, key: Key, modifiers: Modifiers) -> EventOutcome<ComboboxEffect> {
        if modifiers.is_chord() {
            return EventOutcome::ignored();
        }
        self.update(|inner| match key {
            Key::Down | Key::Up if !inner.is_list_open => {
                let effects = inner.open();
                if effects.is_empty() {
                    EventOutcome::ignored()
                } else {
                    EventOutcome::consumed_with(effects)
                }
            }
            Key::Down | Key::Up | Key::Home | Key::End if inner.is_list_open => {
                navigate(inner, key);
                EventOutcome::consumed()
            }
            Key::Enter if inner.is_list_open => match inner.highlighted.clone() {
                Some(value) => EventOutcome::consumed_with(inner.commit(value)),
                None => EventOutcome::ignored(),
            },
            Key::Escape if inner.is_list_open => EventOutcome::consumed_with(inner.close(true)),
            _ => EventOutcome::ignored(),
        })
    }

    /// The input gained focus.
    pub fn on_focus(&self) -> EventOutcome<ComboboxEffect> {
        self.update(|inner| {
            inner.select_on_next_click = true;
            if inner.config.open_on_focus {
                EventOutcome::consumed_with(inner.open())
            } else {
                EventOutcome::ignored()
            }
        })
    }

    /// The input was clicked.
    pub fn on_click(&self) -> EventOutcome<ComboboxEffect> {
        self.update(|inner| {
            let armed = std::mem::take(&mut inner.select_on_next_click);
            if inner.config.select_on_click && armed {
                EventOutcome::consumed_with(vec![ComboboxEffect::SelectInputText])
            } else {
                EventOutcome::ignored()
            }
        })
    }

    /// The input lost focus. `focus_within` is true when focus moved into
    /// the suggestion list.
    pub fn on_blur(&self, focus_within: bool) -> EventOutcome<ComboboxEffect> {
        self.update(|inner| {
            if focus_within {
                return EventOutcome::ignored();
            }
            inner.select_on_next_click = false;
            EventOutcome {
                result: EventResult::Ignored,
                effects: inner.close(true),
            }
        })
    }

    /// An option was clicked.
    pub fn on_option_click(&self, value: &str) -> EventOutcome<ComboboxEffect> {
        self.update(|inner| {
            if !inner.filtered_values().any(|v| v == value) {
                return EventOutcome::ignored();
            }
            let mut effects = inner.commit(value.to_string());
            effects.push(inner.focus_input());
            EventOutcome::consumed_with(effects)
        })
    }

    /// The toggle button next to the input was clicked.
    pub fn on_button_click(&self) -> EventOutcome<ComboboxEffect> {
        self.update(|inner| {
            let mut effects = if inner.is_list_open {
                inner.close(true)
            } else {
                inner.open()
            };
            effects.push(inner.focus_input());
            EventOutcome::consumed_with(effects)
        })
    }
}

/// Move the highlight through the filtered list, wrapping at both ends.
fn navigate(inner: &mut ComboboxInner, key: Key) {
    let len = inner.filtered.len();
    if len == 0 {
        return;
    }
    let current = inner.highlighted_position();
    let target = match key {
        Key::Down => current.map(|i| (i + 1) % len).unwrap_or(0),
        Key::Up => current.map(|i| (i + len - 1) % len).unwrap_or(len - 1),
        Key::Home => 0,
        Key::End => len - 1,
        _ => return,
    };
    inner.highlight_at(target);
}

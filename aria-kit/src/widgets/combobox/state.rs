//! Combobox widget state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use aria_dom::{AriaAttributes, FocusTarget, IdCounter, make_id, string_hash};

use crate::HandlerId;
use crate::error::ConfigError;
use crate::widgets::events::{EventOutcome, EventResult};

use super::filter::filter_options;
use super::highlight::{Segment, highlight_segments};
use super::ComboboxConfig;

/// Unique identifier for a Combobox widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboboxId(usize);

impl ComboboxId {
    fn new() -> Self {
        static COUNTER: IdCounter = IdCounter::new();
        Self(COUNTER.next())
    }
}

impl std::fmt::Display for ComboboxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listbox--{}", self.0)
    }
}

/// Something the host should do after a combobox event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxEffect {
    Opened,
    Closed,
    /// An option was committed. The input already shows `value`.
    Select {
        value: String,
        handler: Option<HandlerId>,
    },
    /// Select all text in the input element.
    SelectInputText,
    Focus(FocusTarget),
}

/// Snapshot of a combobox's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxState {
    /// Text shown in the input, including values mirrored by navigation.
    pub input_value: String,
    /// Text the user typed or last committed; restored on Escape.
    pub typed_value: String,
    pub is_list_open: bool,
    pub highlighted_option_value: Option<String>,
    pub persist_selection: bool,
    pub autocomplete: bool,
}

/// Attributes for the element wrapping input and list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxAttributes {
    pub owns: String,
    pub expanded: bool,
}

impl ComboboxAttributes {
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .role("combobox")
            .set("aria-haspopup", "listbox")
            .set("aria-owns", self.owns.clone())
            .flag("aria-expanded", self.expanded)
    }
}

/// Attributes for the text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAttributes {
    pub id: String,
    pub value: String,
    pub controls: String,
    pub autocomplete: bool,
    pub active_descendant: Option<String>,
    pub aria_label: Option<String>,
    pub aria_labelledby: Option<String>,
}

impl InputAttributes {
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set("id", self.id.clone())
            .set("value", self.value.clone())
            .set(
                "aria-autocomplete",
                if self.autocomplete { "both" } else { "list" },
            )
            .set("aria-controls", self.controls.clone())
            .set_opt("aria-activedescendant", self.active_descendant.clone())
            .set_opt("aria-label", self.aria_label.clone())
            .set_opt("aria-labelledby", self.aria_labelledby.clone())
    }
}

/// Attributes for the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxAttributes {
    pub id: String,
    pub hidden: bool,
}

impl ListboxAttributes {
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .role("listbox")
            .set("id", self.id.clone())
            .flag_if("hidden", self.hidden)
    }
}

/// Attributes for one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAttributes {
    pub id: String,
    pub selected: bool,
}

impl OptionAttributes {
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .role("option")
            .set("id", self.id.clone())
            .flag("aria-selected", self.selected)
    }
}

/// Internal state for a Combobox widget.
#[derive(Debug)]
pub(super) struct ComboboxInner {
    pub(super) config: ComboboxConfig,
    pub(super) list_id: String,
    pub(super) input_id: String,
    pub(super) input_value: String,
    pub(super) typed_value: String,
    pub(super) is_list_open: bool,
    pub(super) highlighted: Option<String>,
    /// All option values, as last rendered.
    pub(super) options: Vec<String>,
    /// Indices into `options` that match `typed_value`, in display order.
    pub(super) filtered: Vec<usize>,
    /// Armed on focus, consumed by the first click.
    pub(super) select_on_next_click: bool,
}

impl ComboboxInner {
    pub(super) fn option_id(&self, value: &str) -> String {
        make_id([
            self.list_id.as_str(),
            "option",
            string_hash(value).to_string().as_str(),
        ])
    }

    pub(super) fn filtered_values(&self) -> impl Iterator<Item = &str> {
        self.filtered.iter().map(|&i| self.options[i].as_str())
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.filtered_values().position(|v| v == value)
    }

    /// Recompute the filtered list and drop references to vanished options.
    ///
    /// An emptied list closes and gives the input back its typed text, since
    /// nothing is left for a mirrored value to point at.
    pub(super) fn refilter(&mut self) -> Vec<ComboboxEffect> {
        self.filtered = filter_options(self.config.filter, &self.typed_value, &self.options);
        if let Some(value) = &self.highlighted
            && self.position_of(value).is_none()
        {
            self.highlighted = None;
        }
        if self.filtered.is_empty() {
            return self.close(true);
        }
        Vec::new()
    }

    /// First filtered option starting with the typed text.
    fn prefix_match(&self) -> Option<String> {
        let needle = self.typed_value.to_lowercase();
        self.filtered_values()
            .find(|v| v.to_lowercase().starts_with(&needle))
            .map(str::to_string)
    }

    fn exact_match(&self) -> Option<String> {
        self.filtered_values()
            .find(|v| *v == self.input_value)
            .map(str::to_string)
    }

    pub(super) fn open(&mut self) -> Vec<ComboboxEffect> {
        if self.is_list_open || self.filtered.is_empty() {
            return Vec::new();
        }
        self.is_list_open = true;
        if self.config.persist_selection && self.highlighted.is_none() {
            self.highlighted = self.exact_match();
        }
        log::debug!(
            "[combobox] {} open, highlighted={:?}",
            self.list_id,
            self.highlighted
        );
        vec![ComboboxEffect::Opened]
    }

    /// Close the list. `revert` restores the typed text over any value
    /// mirrored by navigation.
    pub(super) fn close(&mut self, revert: bool) -> Vec<ComboboxEffect> {
        self.highlighted = None;
        if revert {
            self.input_value = self.typed_value.clone();
        }
        if !self.is_list_open {
            return Vec::new();
        }
        self.is_list_open = false;
        log::debug!("[combobox] {} close revert={}", self.list_id, revert);
        vec![ComboboxEffect::Closed]
    }

    pub(super) fn change(&mut self, text: &str) -> Vec<ComboboxEffect> {
        self.input_value = text.to_string();
        self.typed_value = text.to_string();
        let mut effects = self.refilter();
        if text.is_empty() {
            effects.extend(self.close(false));
            return effects;
        }
        self.highlighted = if self.config.autocomplete {
            self.prefix_match()
        } else {
            None
        };
        effects.extend(self.open());
        effects
    }

    /// Highlight the option at `index` of the filtered list.
    pub(super) fn highlight_at(&mut self, index: usize) {
        let Some(value) = self.filtered_values().nth(index).map(str::to_string) else {
            return;
        };
        if self.config.autocomplete {
            self.input_value = value.clone();
        }
        self.highlighted = Some(value);
    }

    pub(super) fn highlighted_position(&self) -> Option<usize> {
        self.highlighted
            .as_deref()
            .and_then(|value| self.position_of(value))
    }

    pub(super) fn commit(&mut self, value: String) -> Vec<ComboboxEffect> {
        log::debug!("[combobox] {} commit {:?}", self.list_id, value);
        let mut effects = vec![ComboboxEffect::Select {
            value: value.clone(),
            handler: self.config.on_select.clone(),
        }];
        self.input_value = value.clone();
        self.typed_value = value;
        effects.extend(self.close(false));
        effects.extend(self.refilter());
        effects
    }

    pub(super) fn focus_input(&self) -> ComboboxEffect {
        ComboboxEffect::Focus(FocusTarget::new(self.input_id.clone()))
    }
}

/// A text input with a suggestion list.
///
/// # Example
///
/// ```ignore
/// let fruit = Combobox::new(ComboboxConfig::new("Fruit").on_select("pick_fruit"))?;
/// fruit.set_options(["Apple", "Apricot", "Banana"]);
///
/// fruit.on_input_change("Ap");
/// assert_eq!(fruit.highlighted().as_deref(), Some("Apple"));
///
/// let outcome = fruit.on_input_key(Key::Enter, Modifiers::NONE);
/// // outcome.effects contains Select { value: "Apple", .. }
/// ```
#[derive(Debug, Clone)]
pub struct Combobox {
    /// Unique identifier for this combobox instance
    id: ComboboxId,
    /// Internal state
    inner: Arc<RwLock<ComboboxInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Combobox {
    /// Create an empty combobox.
    pub fn new(config: ComboboxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let id = ComboboxId::new();
        Ok(Self {
            id,
            inner: Arc::new(RwLock::new(ComboboxInner {
                config,
                list_id: id.to_string(),
                input_id: make_id(["combobox-input", id.0.to_string().as_str()]),
                input_value: String::new(),
                typed_value: String::new(),
                is_list_open: false,
                highlighted: None,
                options: Vec::new(),
                filtered: Vec::new(),
                select_on_next_click: false,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Get the unique ID for this combobox.
    pub fn id(&self) -> ComboboxId {
        self.id
    }

    pub fn input_id(&self) -> String {
        self.read(|inner| inner.input_id.clone())
            .unwrap_or_default()
    }

    pub fn list_id(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Options management
    // -------------------------------------------------------------------------

    /// Replace the rendered option values (called during render).
    ///
    /// A highlight on a value that is no longer listed is cleared, and the
    /// list closes when nothing is left to show.
    pub fn set_options<I, S>(&self, options: I) -> Vec<ComboboxEffect>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        match self.inner.write() {
            Ok(mut guard) => {
                guard.options = options;
                self.dirty.store(true, Ordering::SeqCst);
                guard.refilter()
            }
            Err(_) => Vec::new(),
        }
    }

    /// Option values currently listed, in display order.
    pub fn filtered_options(&self) -> Vec<String> {
        self.read(|inner| inner.filtered_values().map(str::to_string).collect())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn input_value(&self) -> String {
        self.read(|inner| inner.input_value.clone())
            .unwrap_or_default()
    }

    pub fn typed_value(&self) -> String {
        self.read(|inner| inner.typed_value.clone())
            .unwrap_or_default()
    }

    pub fn is_list_open(&self) -> bool {
        self.read(|inner| inner.is_list_open).unwrap_or(false)
    }

    pub fn highlighted(&self) -> Option<String> {
        self.read(|inner| inner.highlighted.clone()).unwrap_or(None)
    }

    pub fn state(&self) -> ComboboxState {
        self.read(|inner| ComboboxState {
            input_value: inner.input_value.clone(),
            typed_value: inner.typed_value.clone(),
            is_list_open: inner.is_list_open,
            highlighted_option_value: inner.highlighted.clone(),
            persist_selection: inner.config.persist_selection,
            autocomplete: inner.config.autocomplete,
        })
        .unwrap_or_else(|| ComboboxState {
            input_value: String::new(),
            typed_value: String::new(),
            is_list_open: false,
            highlighted_option_value: None,
            persist_selection: false,
            autocomplete: false,
        })
    }

    /// Display segments for `value` against the typed text.
    pub fn option_segments<'a>(&self, value: &'a str) -> Vec<Segment<'a>> {
        let query = self.typed_value();
        highlight_segments(value, &query)
    }

    // -------------------------------------------------------------------------
    // Attribute bundles
    // -------------------------------------------------------------------------

    pub fn combobox_attributes(&self) -> ComboboxAttributes {
        ComboboxAttributes {
            owns: self.list_id(),
            expanded: self.is_list_open(),
        }
    }

    pub fn input_attributes(&self) -> InputAttributes {
        let list_id = self.list_id();
        self.read(|inner| InputAttributes {
            id: inner.input_id.clone(),
            value: inner.input_value.clone(),
            controls: inner.list_id.clone(),
            autocomplete: inner.config.autocomplete,
            active_descendant: inner
                .highlighted
                .as_deref()
                .filter(|_| inner.is_list_open)
                .map(|value| inner.option_id(value)),
            aria_label: inner.config.aria_label.clone(),
            aria_labelledby: inner.config.aria_labelledby.clone(),
        })
        .unwrap_or_else(|| InputAttributes {
            id: String::new(),
            value: String::new(),
            controls: list_id,
            autocomplete: false,
            active_descendant: None,
            aria_label: None,
            aria_labelledby: None,
        })
    }

    pub fn listbox_attributes(&self) -> ListboxAttributes {
        ListboxAttributes {
            id: self.list_id(),
            hidden: !self.is_list_open(),
        }
    }

    pub fn option_attributes(&self, value: &str) -> OptionAttributes {
        self.read(|inner| OptionAttributes {
            id: inner.option_id(value),
            selected: inner.highlighted.as_deref() == Some(value),
        })
        .unwrap_or_else(|| OptionAttributes {
            id: String::new(),
            selected: false,
        })
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the combobox state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn read<T>(&self, f: impl FnOnce(&ComboboxInner) -> T) -> Option<T> {
        self.inner.read().ok().map(|guard| f(&guard))
    }

    /// Run one transition under the lock.
    pub(super) fn update(
        &self,
        f: impl FnOnce(&mut ComboboxInner) -> EventOutcome<ComboboxEffect>,
    ) -> EventOutcome<ComboboxEffect> {
        let outcome = match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(_) => EventOutcome::ignored(),
        };
        if outcome.result == EventResult::Consumed || outcome.has_effects() {
            self.dirty.store(true, Ordering::SeqCst);
        }
        outcome
    }
}

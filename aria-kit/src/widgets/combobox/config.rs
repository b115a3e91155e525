//! Combobox configuration.

use serde::{Deserialize, Serialize};

use crate::HandlerId;
use crate::config::non_blank;
use crate::error::ConfigError;

/// How the option list is narrowed by the typed text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Every option stays listed; the host filters before `set_options`.
    None,
    /// Options starting with the text.
    Prefix,
    /// Options containing the text.
    #[default]
    Substring,
    /// Fuzzy match, best score first.
    Fuzzy,
}

/// Per-combobox configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
    pub aria_label: Option<String>,
    /// Id of a visible label element.
    pub aria_labelledby: Option<String>,
    /// Open the list as soon as the input is focused.
    pub open_on_focus: bool,
    /// Select the input text on the first click after focus.
    pub select_on_click: bool,
    /// Highlight suggestions while typing and mirror them into the input
    /// while navigating.
    pub autocomplete: bool,
    /// Opening the list highlights the option equal to the current text.
    pub persist_selection: bool,
    pub filter: FilterMode,
    /// Handler carried by selection effects.
    #[serde(skip)]
    pub on_select: Option<HandlerId>,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            aria_label: None,
            aria_labelledby: None,
            open_on_focus: false,
            select_on_click: false,
            autocomplete: true,
            persist_selection: false,
            filter: FilterMode::default(),
            on_select: None,
        }
    }
}

impl ComboboxConfig {
    /// Create a new config named by an aria-label.
    pub fn new(aria_label: impl Into<String>) -> Self {
        Self {
            aria_label: Some(aria_label.into()),
            ..Default::default()
        }
    }

    /// Create a new config named by a visible label element.
    pub fn labelled_by(label_id: impl Into<String>) -> Self {
        Self {
            aria_labelledby: Some(label_id.into()),
            ..Default::default()
        }
    }

    pub fn open_on_focus(mut self, enabled: bool) -> Self {
        self.open_on_focus = enabled;
        self
    }

    pub fn select_on_click(mut self, enabled: bool) -> Self {
        self.select_on_click = enabled;
        self
    }

    pub fn autocomplete(mut self, enabled: bool) -> Self {
        self.autocomplete = enabled;
        self
    }

    pub fn persist_selection(mut self, enabled: bool) -> Self {
        self.persist_selection = enabled;
        self
    }

    pub fn filter(mut self, mode: FilterMode) -> Self {
        self.filter = mode;
        self
    }

    pub fn on_select(mut self, handler: impl Into<HandlerId>) -> Self {
        self.on_select = Some(handler.into());
        self
    }

    /// A combobox must be named for assistive technology.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [&self.aria_label, &self.aria_labelledby]
            .iter()
            .any(|name| name.as_deref().is_some_and(non_blank));
        if named {
            Ok(())
        } else {
            Err(ConfigError::MissingAccessibleName { widget: "Combobox" })
        }
    }
}

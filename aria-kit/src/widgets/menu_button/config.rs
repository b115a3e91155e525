//! Menu button configuration.

use serde::{Deserialize, Serialize};

use crate::config::non_blank;
use crate::error::ConfigError;

/// Per-menu configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Explicit button element id. Generated when absent.
    pub id: Option<String>,
    /// Button text; also the list's accessible name.
    pub label: String,
}

impl MenuConfig {
    /// Create a new config with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if non_blank(&self.label) {
            Ok(())
        } else {
            Err(ConfigError::MissingLabel {
                widget: "MenuButton",
            })
        }
    }
}

//! Tooltip configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{duration_ms, non_blank};
use crate::error::ConfigError;

/// Time the pointer or focus must stay on a trigger before its tooltip shows.
pub const DEFAULT_SHOW_DELAY: Duration = Duration::from_millis(100);

/// Window after a tooltip hides during which the next one shows immediately.
pub const DEFAULT_LEAVE_GRACE: Duration = Duration::from_millis(500);

/// Per-tooltip configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Visible tooltip text.
    pub label: String,

    /// Text announced instead of `label` when the visible text is not a
    /// good description (icons, shortcuts).
    pub aria_label: Option<String>,

    /// Delay before showing on hover or focus.
    #[serde(with = "duration_ms")]
    pub show_delay: Duration,

    /// Grace window after hiding where the next tooltip skips its delay.
    #[serde(with = "duration_ms")]
    pub leave_grace: Duration,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            aria_label: None,
            show_delay: DEFAULT_SHOW_DELAY,
            leave_grace: DEFAULT_LEAVE_GRACE,
        }
    }
}

impl TooltipConfig {
    /// Create a new config with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn show_delay(mut self, delay: Duration) -> Self {
        self.show_delay = delay;
        self
    }

    pub fn leave_grace(mut self, grace: Duration) -> Self {
        self.leave_grace = grace;
        self
    }

    /// A tooltip must describe something.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_aria = self.aria_label.as_deref().is_some_and(non_blank);
        if non_blank(&self.label) || has_aria {
            Ok(())
        } else {
            Err(ConfigError::MissingLabel { widget: "Tooltip" })
        }
    }

    /// The text assistive technology should read.
    pub fn accessible_text(&self) -> &str {
        match self.aria_label.as_deref() {
            Some(aria) if non_blank(aria) => aria,
            _ => &self.label,
        }
    }
}

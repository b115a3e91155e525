//! Error and warning types.

use thiserror::Error;

/// A widget configuration that cannot produce an accessible widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Tooltip or menu button without any visible or aria label.
    #[error("{widget} requires a non-empty label or aria-label")]
    MissingLabel { widget: &'static str },

    /// Combobox without `aria-label` or `aria-labelledby`.
    #[error("{widget} requires an aria-label or aria-labelledby")]
    MissingAccessibleName { widget: &'static str },

    /// Menu item whose label is empty.
    #[error("menu item {index} has an empty label")]
    EmptyItemLabel { index: usize },
}

/// Development-time misuse that is reported but never aborts.
///
/// These are logged through `log::warn!` at the point of detection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageWarning {
    #[error("MenuLink to '{href}' is rendered outside of a MenuList")]
    LinkOutsideList { href: String },

    #[error("link component '{component}' does not forward refs; menu focus management will break")]
    LinkWithoutRef { component: String },

    #[error("link component '{component}' does not accept an href; '{href}' is dropped")]
    LinkWithoutHref { component: String, href: String },
}

impl UsageWarning {
    /// Log this warning and hand it back.
    pub fn emit(self) -> Self {
        log::warn!("[aria-kit] {}", self);
        self
    }
}

/// Failure while installing the file logger.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("a logger is already installed: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

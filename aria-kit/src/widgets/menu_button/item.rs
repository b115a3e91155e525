//! Menu items and links.

use std::sync::Arc;

use crate::HandlerId;
use crate::error::UsageWarning;

/// What a component rendered for a [`MenuLink`] is able to do.
///
/// Menu focus management needs the rendered element (a forwarded ref), and
/// navigation needs the component to take an href-like prop.
pub trait LinkComponent: Send + Sync {
    /// Name used in warnings.
    fn name(&self) -> &str;

    /// The component forwards a ref to its focusable element.
    fn accepts_ref(&self) -> bool;

    /// The component accepts an href / `to` prop.
    fn accepts_href(&self) -> bool;
}

/// The intrinsic `<a>` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anchor;

impl LinkComponent for Anchor {
    fn name(&self) -> &str {
        "a"
    }

    fn accepts_ref(&self) -> bool {
        true
    }

    fn accepts_href(&self) -> bool {
        true
    }
}

/// A menu entry that navigates.
#[derive(Clone)]
pub struct MenuLink {
    pub href: String,
    component: Arc<dyn LinkComponent>,
}

impl std::fmt::Debug for MenuLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuLink")
            .field("href", &self.href)
            .field("component", &self.component.name())
            .finish()
    }
}

impl MenuLink {
    /// A link rendered as a plain anchor.
    pub fn new(href: impl Into<String>) -> Self {
        Self::with_component(href, Anchor)
    }

    /// A link rendered through a custom component.
    pub fn with_component(href: impl Into<String>, component: impl LinkComponent + 'static) -> Self {
        Self {
            href: href.into(),
            component: Arc::new(component),
        }
    }

    pub fn component_name(&self) -> &str {
        self.component.name()
    }

    /// The href to navigate to, if the component can carry one.
    pub fn navigable_href(&self) -> Option<&str> {
        self.component.accepts_href().then_some(self.href.as_str())
    }

    /// Check how this link is being used, logging every problem found.
    pub fn validate(&self, in_list: bool) -> Vec<UsageWarning> {
        let mut warnings = Vec::new();
        if !in_list {
            warnings.push(UsageWarning::LinkOutsideList {
                href: self.href.clone(),
            });
        }
        if !self.component.accepts_ref() {
            warnings.push(UsageWarning::LinkWithoutRef {
                component: self.component.name().to_string(),
            });
        }
        if !self.component.accepts_href() {
            warnings.push(UsageWarning::LinkWithoutHref {
                component: self.component.name().to_string(),
                href: self.href.clone(),
            });
        }
        warnings.into_iter().map(UsageWarning::emit).collect()
    }
}

/// One entry of a menu list.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
    /// Text matched by typeahead instead of `label`.
    pub value_text: Option<String>,
    pub disabled: bool,
    pub on_select: Option<HandlerId>,
    pub link: Option<MenuLink>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value_text: None,
            disabled: false,
            on_select: None,
            link: None,
        }
    }

    /// An entry that navigates to `link` when selected.
    pub fn link(label: impl Into<String>, link: MenuLink) -> Self {
        Self {
            link: Some(link),
            ..Self::new(label)
        }
    }

    pub fn value_text(mut self, text: impl Into<String>) -> Self {
        self.value_text = Some(text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_select(mut self, handler: impl Into<HandlerId>) -> Self {
        self.on_select = Some(handler.into());
        self
    }

    /// Text used for typeahead matching.
    pub fn typeahead_text(&self) -> &str {
        self.value_text.as_deref().unwrap_or(&self.label)
    }

    /// Case-insensitive check that the typeahead text starts with `c`.
    pub fn starts_with_char(&self, c: char) -> bool {
        let text = self.typeahead_text().to_lowercase();
        let prefix: String = c.to_lowercase().collect();
        text.starts_with(&prefix)
    }
}

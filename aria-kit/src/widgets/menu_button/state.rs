//! Menu button widget state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use aria_dom::{AriaAttributes, FocusTarget, IdCounter, Rect, make_id, position_popover_default};

use crate::HandlerId;
use crate::error::ConfigError;
use crate::widgets::events::{EventOutcome, EventResult};

use super::{MenuConfig, MenuItem};

/// Unique identifier for a MenuButton widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuId(usize);

impl MenuId {
    fn new() -> Self {
        static COUNTER: IdCounter = IdCounter::new();
        Self(COUNTER.next())
    }
}

impl std::fmt::Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu--{}", self.0)
    }
}

/// Something the host should do after a menu event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEffect {
    Opened,
    Closed,
    /// An item was chosen. Always followed by `Closed`.
    Select {
        index: usize,
        item_id: String,
        handler: Option<HandlerId>,
    },
    /// A link item was chosen.
    Navigate { href: String },
    Focus(FocusTarget),
}

/// Snapshot of a menu's state.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    pub button_id: String,
    /// Measured button rect, present only while open.
    pub button_rect: Option<Rect>,
    pub is_open: bool,
    /// Index of the active item; `None` when nothing is selected.
    pub selection_index: Option<usize>,
    /// The last close was pointer driven, so focus was left where it landed.
    pub closing_with_click: bool,
}

/// Attributes for the menu button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAttributes {
    pub id: String,
    pub controls: String,
    pub expanded: bool,
}

impl ButtonAttributes {
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set("id", self.id.clone())
            .set("type", "button")
            .set("aria-haspopup", "menu")
            .set("aria-controls", self.controls.clone())
            .flag("aria-expanded", self.expanded)
    }
}

/// Attributes for the menu list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAttributes {
    pub id: String,
    pub labelled_by: String,
    pub active_descendant: Option<String>,
    pub hidden: bool,
}

impl ListAttributes {
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .role("menu")
            .set("id", self.id.clone())
            .set("aria-labelledby", self.labelled_by.clone())
            .set("tabindex", "-1")
            .set_opt("aria-activedescendant", self.active_descendant.clone())
            .flag_if("hidden", self.hidden)
    }
}

/// Attributes for one menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAttributes {
    pub id: String,
    pub disabled: bool,
    pub selected: bool,
    pub href: Option<String>,
}

impl ItemAttributes {
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .role("menuitem")
            .set("id", self.id.clone())
            .set("tabindex", "-1")
            .flag_if("aria-disabled", self.disabled)
            .flag_if("data-selected", self.selected)
            .set_opt("href", self.href.clone())
    }
}

/// Internal state for a MenuButton widget.
#[derive(Debug)]
pub(super) struct MenuInner {
    pub(super) config: MenuConfig,
    pub(super) button_id: String,
    pub(super) list_id: String,
    pub(super) is_open: bool,
    pub(super) selection: Option<usize>,
    pub(super) closing_with_click: bool,
    /// Last measured button rect, copied into the state while open.
    pub(super) anchor_rect: Option<Rect>,
    pub(super) items: Vec<MenuItem>,
}

impl MenuInner {
    pub(super) fn item_id(&self, index: usize) -> String {
        make_id([self.list_id.as_str(), "item", index.to_string().as_str()])
    }

    fn is_enabled(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| !item.disabled)
    }

    pub(super) fn first_enabled(&self) -> Option<usize> {
        self.items.iter().position(|item| !item.disabled)
    }

    pub(super) fn last_enabled(&self) -> Option<usize> {
        self.items.iter().rposition(|item| !item.disabled)
    }

    /// Next enabled item after the selection, wrapping around.
    pub(super) fn next_enabled(&self) -> Option<usize> {
        let Some(current) = self.selection else {
            return self.first_enabled();
        };
        let len = self.items.len();
        (1..=len)
            .map(|step| (current + step) % len)
            .find(|&i| self.is_enabled(i))
    }

    /// Previous enabled item before the selection, wrapping around.
    pub(super) fn prev_enabled(&self) -> Option<usize> {
        let Some(current) = self.selection else {
            return self.last_enabled();
        };
        let len = self.items.len();
        (1..=len)
            .map(|step| (current + len - step % len) % len)
            .find(|&i| self.is_enabled(i))
    }

    /// Next enabled item whose text starts with `c`, searching after the
    /// selection and wrapping around.
    pub(super) fn typeahead(&self, c: char) -> Option<usize> {
        let len = self.items.len();
        let start = self.selection.map(|i| i + 1).unwrap_or(0);
        (0..len)
            .map(|step| (start + step) % len)
            .find(|&i| self.is_enabled(i) && self.items[i].starts_with_char(c))
    }

    pub(super) fn open(&mut self, selection: Option<usize>) -> Vec<MenuEffect> {
        log::debug!("[menu] {} open at {:?}", self.button_id, selection);
        self.is_open = true;
        self.selection = selection;
        self.closing_with_click = false;
        vec![
            MenuEffect::Opened,
            MenuEffect::Focus(FocusTarget::new(self.list_id.clone())),
        ]
    }

    /// `with_click` marks a pointer-driven close, which never refocuses.
    pub(super) fn close(&mut self, refocus: bool, with_click: bool) -> Vec<MenuEffect> {
        log::debug!(
            "[menu] {} close refocus={} with_click={}",
            self.button_id,
            refocus,
            with_click
        );
        self.is_open = false;
        self.selection = None;
        self.closing_with_click = with_click;
        let mut effects = vec![MenuEffect::Closed];
        if refocus {
            effects.push(MenuEffect::Focus(FocusTarget::new(self.button_id.clone())));
        }
        effects
    }

    /// Fire the item's selection, then close and return focus to the button.
    pub(super) fn select(&mut self, index: usize, with_click: bool) -> Vec<MenuEffect> {
        let Some(item) = self.items.get(index).filter(|item| !item.disabled) else {
            return Vec::new();
        };
        let mut effects = vec![MenuEffect::Select {
            index,
            item_id: self.item_id(index),
            handler: item.on_select.clone(),
        }];
        if let Some(href) = item.link.as_ref().and_then(|link| link.navigable_href()) {
            effects.push(MenuEffect::Navigate {
                href: href.to_string(),
            });
        }
        let mut closed = self.close(false, with_click);
        closed.push(MenuEffect::Focus(FocusTarget::new(self.button_id.clone())));
        effects.extend(closed);
        effects
    }

    /// Move the selection, if there is anywhere to move it.
    pub(super) fn move_to(&mut self, target: Option<usize>) {
        if let Some(index) = target {
            self.selection = Some(index);
        }
    }

    /// Drop a selection that no longer points at an enabled item.
    fn reconcile(&mut self) {
        if let Some(index) = self.selection
            && !self.is_enabled(index)
        {
            self.selection = None;
        }
    }
}

/// A button that opens a dropdown menu.
///
/// # Example
///
/// ```ignore
/// let menu = MenuButton::new(MenuConfig::new("Actions"))?;
/// menu.set_items(vec![
///     MenuItem::new("Download").on_select("download"),
///     MenuItem::new("Delete").disabled(true),
///     MenuItem::link("View", MenuLink::new("/view")),
/// ])?;
///
/// let outcome = menu.on_button_key(Key::Down, Modifiers::NONE);
/// assert_eq!(menu.selection_index(), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct MenuButton {
    /// Unique identifier for this menu instance
    id: MenuId,
    /// Internal state
    pub(super) inner: Arc<RwLock<MenuInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl MenuButton {
    /// Create a closed menu with no items.
    pub fn new(config: MenuConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let id = MenuId::new();
        let button_id = config
            .id
            .clone()
            .unwrap_or_else(|| make_id(["menu-button", id.0.to_string().as_str()]));
        Ok(Self {
            id,
            inner: Arc::new(RwLock::new(MenuInner {
                config,
                button_id,
                list_id: id.to_string(),
                is_open: false,
                selection: None,
                closing_with_click: false,
                anchor_rect: None,
                items: Vec::new(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Get the unique ID for this menu.
    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn button_id(&self) -> String {
        self.read(|inner| inner.button_id.clone()).unwrap_or_default()
    }

    pub fn list_id(&self) -> String {
        self.id.to_string()
    }

    pub fn label(&self) -> String {
        self.read(|inner| inner.config.label.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Items management
    // -------------------------------------------------------------------------

    /// Replace the rendered items (called during render).
    ///
    /// A selection that no longer points at an enabled item is cleared.
    pub fn set_items(&self, items: Vec<MenuItem>) -> Result<(), ConfigError> {
        if let Some(index) = items.iter().position(|item| item.label.trim().is_empty()) {
            return Err(ConfigError::EmptyItemLabel { index });
        }
        for link in items.iter().filter_map(|item| item.link.as_ref()) {
            link.validate(true);
        }
        if let Ok(mut guard) = self.inner.write() {
            guard.items = items;
            guard.reconcile();
            self.dirty.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    pub fn items(&self) -> Vec<MenuItem> {
        self.read(|inner| inner.items.clone()).unwrap_or_default()
    }

    pub fn item_count(&self) -> usize {
        self.read(|inner| inner.items.len()).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.read(|inner| inner.is_open).unwrap_or(false)
    }

    pub fn selection_index(&self) -> Option<usize> {
        self.read(|inner| inner.selection).unwrap_or(None)
    }

    pub fn state(&self) -> MenuState {
        self.read(|inner| MenuState {
            button_id: inner.button_id.clone(),
            button_rect: if inner.is_open {
                inner.anchor_rect
            } else {
                None
            },
            is_open: inner.is_open,
            selection_index: inner.selection,
            closing_with_click: inner.closing_with_click,
        })
        .unwrap_or_else(|| MenuState {
            button_id: String::new(),
            button_rect: None,
            is_open: false,
            selection_index: None,
            closing_with_click: false,
        })
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Record the button's measured rect (called after layout).
    pub fn set_button_rect(&self, rect: Rect) {
        if let Ok(mut guard) = self.inner.write() {
            guard.anchor_rect = Some(rect);
        }
    }

    /// Where to draw the list, given its measured size.
    ///
    /// `None` while closed or before the button has been measured.
    pub fn list_position(&self, list_rect: Rect, viewport: Rect) -> Option<Rect> {
        let button = self.state().button_rect?;
        Some(position_popover_default(button, list_rect, viewport))
    }

    // -------------------------------------------------------------------------
    // Attribute bundles
    // -------------------------------------------------------------------------

    pub fn button_attributes(&self) -> ButtonAttributes {
        ButtonAttributes {
            id: self.button_id(),
            controls: self.list_id(),
            expanded: self.is_open(),
        }
    }

    pub fn list_attributes(&self) -> ListAttributes {
        self.read(|inner| ListAttributes {
            id: inner.list_id.clone(),
            labelled_by: inner.button_id.clone(),
            active_descendant: inner
                .selection
                .filter(|_| inner.is_open)
                .map(|index| inner.item_id(index)),
            hidden: !inner.is_open,
        })
        .unwrap_or_else(|| ListAttributes {
            id: self.list_id(),
            labelled_by: String::new(),
            active_descendant: None,
            hidden: true,
        })
    }

    /// `None` when `index` is not a rendered item.
    pub fn item_attributes(&self, index: usize) -> Option<ItemAttributes> {
        self.read(|inner| {
            inner.items.get(index).map(|item| ItemAttributes {
                id: inner.item_id(index),
                disabled: item.disabled,
                selected: inner.selection == Some(index),
                href: item.link.as_ref().map(|link| link.href.clone()),
            })
        })
        .flatten()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the menu state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn read<T>(&self, f: impl FnOnce(&MenuInner) -> T) -> Option<T> {
        self.inner.read().ok().map(|guard| f(&guard))
    }

    /// Run one transition under the lock.
    pub(super) fn update(
        &self,
        f: impl FnOnce(&mut MenuInner) -> EventOutcome<MenuEffect>,
    ) -> EventOutcome<MenuEffect> {
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

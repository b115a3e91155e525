//! Menu button widget - a button that toggles a dropdown list of actions.

mod config;
mod events;
mod item;
mod state;

pub use config::MenuConfig;
pub use item::{Anchor, LinkComponent, MenuItem, MenuLink};
pub use state::{
    ButtonAttributes, ItemAttributes, ListAttributes, MenuButton, MenuEffect, MenuId, MenuState,
};

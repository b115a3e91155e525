//! Combobox widget - text input with a filtered, highlighted suggestion list.

mod config;
mod events;
mod filter;
mod highlight;
mod state;

pub use config::{ComboboxConfig, FilterMode};
pub use filter::{FilterMatch, filter_options, fuzzy_filter};
pub use highlight::{Segment, highlight_segments};
pub use state::{
    Combobox, ComboboxAttributes, ComboboxEffect, ComboboxId, ComboboxState, InputAttributes,
    ListboxAttributes, OptionAttributes,
};

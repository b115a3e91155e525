pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod widgets;

pub use error::{ConfigError, LoggerError, UsageWarning};
pub use handler::HandlerId;

pub mod prelude {
    pub use crate::error::{ConfigError, UsageWarning};
    pub use crate::handler::HandlerId;
    pub use crate::widgets::combobox::{
        Combobox, ComboboxConfig, ComboboxEffect, ComboboxId, FilterMode, Segment,
        highlight_segments,
    };
    pub use crate::widgets::events::{EventOutcome, EventResult};
    pub use crate::widgets::menu_button::{
        Anchor, LinkComponent, MenuButton, MenuConfig, MenuEffect, MenuId, MenuItem, MenuLink,
    };
    pub use crate::widgets::tooltip::{
        Tooltip, TooltipConfig, TooltipCoordinator, TooltipId, VisibilityChange,
    };

    pub use aria_dom::{AriaAttributes, FocusState, FocusTarget, Key, Modifiers, Rect};
}

//! Tooltip widget - delayed, positioned description popup for a trigger.

mod config;
mod coordinator;
mod events;
mod state;

pub use config::{DEFAULT_LEAVE_GRACE, DEFAULT_SHOW_DELAY, TooltipConfig};
pub use coordinator::{TooltipCoordinator, TooltipPhase, VisibilityChange};
pub use state::{
    PositionFn, Tooltip, TooltipAttributes, TooltipId, TriggerAttributes, TriggerState,
};

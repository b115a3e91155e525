pub mod aria;
pub mod event;
pub mod focus;
pub mod id;
pub mod layout;
pub mod position;
pub mod timer;

pub use aria::AriaAttributes;
pub use event::{Key, Modifiers, MouseButton};
pub use focus::{FocusState, FocusTarget};
pub use id::{make_id, string_hash, IdCounter};
pub use layout::Rect;
pub use position::{position_popover_default, position_tooltip_default, TOOLTIP_OFFSET};
pub use timer::Timer;

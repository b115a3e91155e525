//! Headless widget state machines.
//!
//! A widget is a cloneable handle around shared state. The host forwards
//! pointer, key and focus events into it; the widget updates its state in a
//! single step and hands back an [`events::EventOutcome`] listing the
//! effects (focus moves, selections, open/close) the host should apply.
//!
//! # Handler ID Pattern
//!
//! Widgets never store closures. Configs and items carry a
//! [`HandlerId`](crate::HandlerId) instead, which comes back inside the
//! selection effect:
//!
//! ```ignore
//! let outcome = menu.on_list_key(Key::Enter, Modifiers::NONE);
//! for effect in outcome.effects {
//!     if let MenuEffect::Select { handler: Some(id), .. } = effect {
//!         app.dispatch(&id);
//!     }
//! }
//! ```

pub mod combobox;
pub mod events;
pub mod menu_button;
pub mod tooltip;

//! Watch core: pure state machine, page classification rules and message texts.
mod availability;
mod effect;
pub mod messages;
mod msg;
mod normalize;
mod state;
mod update;

pub use availability::{Availability, Classification, ParseAvailabilityError};
pub use effect::{Effect, MessageFormat};
pub use msg::Msg;
pub use normalize::normalize_text;
pub use state::{ChatId, WatchState};
pub use update::update;

//! Service layer
//!
//! Business rules on top of the repositories. `ShowService` owns the show
//! lifecycle (status transitions, capacity tracking, visibility toggles);
//! the message and subscriber services are thin pass-through glue.

pub mod message;
pub mod show;
pub mod subscriber;

pub use message::MessageService;
pub use show::ShowService;
pub use subscriber::{SubscribeOutcome, SubscriberService};

//! Repository pattern implementation for data access
//!
//! This module provides a clean abstraction layer over the database,
//! translating semantic queries (upcoming, featured, past, paginated) into
//! persistence operations. Business rules live in the service layer; nothing
//! here decides what a status transition means.

pub mod message;
pub mod show;
pub mod subscriber;
pub mod traits;

pub use message::MessageRepository;
pub use show::ShowRepository;
pub use subscriber::SubscriberRepository;
pub use traits::Repository;

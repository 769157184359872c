//! HTTP request handlers organized by domain
//!
//! Handlers stay thin: decode and validate the request, call the service,
//! wrap the result in the response envelope.

pub mod health;
pub mod messages;
pub mod shows;
pub mod subscribers;

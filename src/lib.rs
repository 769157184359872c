//! Stagelight - venue promotion backend
//!
//! Public JSON API for the show calendar, contact form and mailing list,
//! plus admin endpoints for staff to manage shows, inbound messages and
//! subscribers. The show lifecycle rules (publication state, marketing
//! status, sold-ticket tracking) live in the service layer on top of a
//! repository-backed SQLite store.

pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod web;

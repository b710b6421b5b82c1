//! Routed pages.

pub mod advanced;
pub mod auth;
pub mod profile;

//! Reusable view components.

pub mod auth;
pub mod legal;

//! Network layer: identity backend client, advanced-action proxy, and the
//! payload types both share.

pub mod api;
pub mod functions;
pub mod types;

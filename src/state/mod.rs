//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `otp`, `settings`) so
//! individual components can depend on small focused models. Transition
//! logic lives on these plain structs, out of the view layer, so it is
//! unit-testable without a browser.

pub mod auth;
pub mod otp;
pub mod session;
pub mod settings;

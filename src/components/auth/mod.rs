//! Credential collectors and authenticated-branch controls.
//!
//! Each collector owns its transient input state, keeps at most one call in
//! flight, and reports success or failure upward via callbacks; none of them
//! write orchestrator state directly.

pub mod anonymous_button;
pub mod email_form;
pub mod password_reset;
pub mod profile_settings;
pub mod provider_buttons;
pub mod session_controls;

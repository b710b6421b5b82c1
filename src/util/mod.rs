//! Browser-adjacent helpers: location-parameter protocol, theme, and
//! `localStorage` access. Pure logic stays testable; DOM access is gated
//! behind the `hydrate` feature.

pub mod location;
pub mod storage;
pub mod theme;

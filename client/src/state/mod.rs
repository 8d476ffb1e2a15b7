//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `session` is the single owner of everything the page remembers between
//! events; `overlay` holds the transient per-gesture state of a label drag.

pub mod overlay;
pub mod session;

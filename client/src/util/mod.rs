//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

#[cfg(feature = "csr")]
pub mod calculate;
pub mod palette;
pub mod reveal;
pub mod typeset;

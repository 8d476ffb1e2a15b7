//! Networking for the recognition service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call, `types` defines the wire schema, and `error`
//! classifies what can go wrong on the way.

pub mod api;
pub mod error;
pub mod types;

//! UI components composed by the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `canvas_host` bridges to the raster engine, `toolbar` edits session tool
//! state, and `result_overlay` shows recognized expressions.

pub mod canvas_host;
pub mod result_overlay;
pub mod toolbar;

//! Raster drawing engine for the handwritten-math canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! only pixel buffer in the app: translating pointer and touch input into
//! round-capped strokes, exporting the raster as a PNG data URL for the
//! recognition service, and scanning it for the extent of what was drawn so
//! results can be placed next to the drawing. The Leptos host is responsible
//! only for wiring DOM events to the engine and acting on the returned
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`surface`] | Pixel buffer, bounds scan, PNG export |
//! | [`input`] | Tool state and the stroke state machine |
//! | [`geom`] | Points, pixel bounds, client-to-canvas conversion |
//! | [`color`] | Stroke colors and CSS color parsing |
//! | [`render`] | Blits the surface to the page canvas |
//! | [`consts`] | Stroke widths, default colors, export prefix |

pub mod color;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod render;
pub mod surface;

//! Shared constants for the canvas crate.

use crate::color::Color;

// ── Strokes ─────────────────────────────────────────────────────

/// Pen width in CSS pixels.
pub const STROKE_WIDTH: f32 = 3.0;

/// Eraser width in CSS pixels. Always wider than [`STROKE_WIDTH`].
pub const ERASER_WIDTH: f32 = 24.0;

/// Initial pen color.
pub const DEFAULT_STROKE_COLOR: Color = Color::WHITE;

/// Color the page paints behind the canvas; the eraser strokes with it.
pub const BACKGROUND_COLOR: Color = Color::BLACK;

// ── Export ──────────────────────────────────────────────────────

/// Prefix of the image data URL submitted for recognition.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

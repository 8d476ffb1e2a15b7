//! Input model: the active pen, the eraser toggle, and the stroke state machine.
//!
//! `ToolState` captures what a stroke will look like at the moment a segment is
//! drawn. `InputState` tracks whether a stroke is in progress between
//! pointer-down and pointer-up, and where its last point was.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::color::Color;
use crate::consts::{BACKGROUND_COLOR, DEFAULT_STROKE_COLOR, ERASER_WIDTH, STROKE_WIDTH};
use crate::geom::Point;

/// Pen color plus eraser flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    /// Color the pen draws with when the eraser is off.
    pub color: Color,
    /// Eraser mode. Overrides both color and width while set.
    pub eraser: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self { color: DEFAULT_STROKE_COLOR, eraser: false }
    }
}

impl ToolState {
    /// Color and width the next segment is drawn with.
    #[must_use]
    pub fn stroke_style(&self) -> StrokeStyle {
        if self.eraser {
            StrokeStyle { color: BACKGROUND_COLOR, width: ERASER_WIDTH }
        } else {
            StrokeStyle { color: self.color, width: STROKE_WIDTH }
        }
    }
}

/// Resolved paint for one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

/// Stroke state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No stroke in progress; moves are ignored.
    #[default]
    Idle,
    /// A stroke is active.
    Drawing {
        /// Canvas-space position of the previous point; the next segment starts here.
        last: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

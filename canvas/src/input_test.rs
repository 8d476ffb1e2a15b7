#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ToolState
// =============================================================

#[test]
fn tool_default_is_white_pen() {
    let tools = ToolState::default();
    assert_eq!(tools.color, Color::WHITE);
    assert!(!tools.eraser);
}

#[test]
fn pen_style_uses_selected_color_and_pen_width() {
    let tools = ToolState { color: Color::rgb(238, 51, 51), eraser: false };
    let style = tools.stroke_style();
    assert_eq!(style.color, Color::rgb(238, 51, 51));
    assert_eq!(style.width, STROKE_WIDTH);
}

#[test]
fn eraser_style_overrides_color_and_width() {
    let tools = ToolState { color: Color::rgb(238, 51, 51), eraser: true };
    let style = tools.stroke_style();
    assert_eq!(style.color, BACKGROUND_COLOR);
    assert_eq!(style.width, ERASER_WIDTH);
}

#[test]
fn eraser_is_wider_than_pen() {
    assert!(ERASER_WIDTH > STROKE_WIDTH);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::default().is_drawing());
}

#[test]
fn drawing_state_reports_drawing() {
    let state = InputState::Drawing { last: Point::new(1.0, 2.0) };
    assert!(state.is_drawing());
}

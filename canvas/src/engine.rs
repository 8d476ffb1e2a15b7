use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::color::Color;
use crate::geom::{Bounds, Point, normalize_client_point};
use crate::input::{InputState, ToolState};
use crate::render;
use crate::surface::{Surface, SurfaceError};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The raster changed; blit it to the page.
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub surface: Surface,
    pub tools: ToolState,
    pub input: InputState,
}

impl EngineCore {
    /// Create an engine with a blank raster of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidSize`] if the raster cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Ok(Self { surface: Surface::new(width, height)?, tools: ToolState::default(), input: InputState::Idle })
    }

    /// Reallocate the raster. Prior contents and any active stroke are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidSize`] if the raster cannot be allocated.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<Vec<Action>, SurfaceError> {
        self.surface = Surface::new(width, height)?;
        self.input = InputState::Idle;
        Ok(vec![Action::RenderNeeded])
    }

    // --- Tools ---

    /// Select the pen color. Does not leave eraser mode.
    pub fn set_color(&mut self, color: Color) {
        self.tools.color = color;
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.tools.eraser = eraser;
    }

    // --- Strokes ---

    /// Start a stroke at a canvas-space point. Nothing is painted until the
    /// first move.
    pub fn begin_stroke(&mut self, pt: Point) -> Vec<Action> {
        self.input = InputState::Drawing { last: pt };
        Vec::new()
    }

    /// Draw a segment from the previous point to `pt` with the current tool.
    /// Ignored when no stroke is active.
    pub fn extend_stroke(&mut self, pt: Point) -> Vec<Action> {
        let InputState::Drawing { last } = self.input else {
            return Vec::new();
        };
        let style = self.tools.stroke_style();
        self.surface.stroke_segment(last, pt, style.color, style.width);
        self.input = InputState::Drawing { last: pt };
        vec![Action::RenderNeeded]
    }

    /// Stop drawing. Safe to call with no stroke active.
    pub fn end_stroke(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        Vec::new()
    }

    /// Touch variant of [`Self::begin_stroke`]; `client` is relative to the
    /// viewport and `rect_origin` is the canvas's bounding-rect top-left.
    pub fn begin_touch_stroke(&mut self, client: Point, rect_origin: Point) -> Vec<Action> {
        self.begin_stroke(normalize_client_point(client, rect_origin))
    }

    /// Touch variant of [`Self::extend_stroke`].
    pub fn extend_touch_stroke(&mut self, client: Point, rect_origin: Point) -> Vec<Action> {
        self.extend_stroke(normalize_client_point(client, rect_origin))
    }

    /// Wipe the raster.
    pub fn clear(&mut self) -> Vec<Action> {
        self.surface.clear();
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// PNG bytes of the raster as it currently stands.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] on encoder failure.
    pub fn export_image(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.export_png()
    }

    /// PNG data URL of the raster as it currently stands.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] on encoder failure.
    pub fn export_data_url(&self) -> Result<String, SurfaceError> {
        self.surface.export_data_url()
    }

    #[must_use]
    pub fn scan_drawn_bounds(&self) -> Option<Bounds> {
        self.surface.scan_drawn_bounds()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
    /// Scratch RGBA bytes reused by every blit.
    frame: Vec<u8>,
}

fn to_js(err: SurfaceError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl Engine {
    /// Create an engine bound to `canvas`, sizing both the element and the
    /// raster to `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the raster cannot be allocated.
    pub fn new(canvas: HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        let core = EngineCore::new(width, height).map_err(to_js)?;
        canvas.set_width(core.surface.width());
        canvas.set_height(core.surface.height());
        Ok(Self { canvas, core, frame: Vec::new() })
    }

    /// Resize element and raster together. Clears the drawing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the raster cannot be allocated.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.resize(width, height).map_err(to_js)?;
        self.canvas.set_width(self.core.surface.width());
        self.canvas.set_height(self.core.surface.height());
        Ok(actions)
    }

    pub fn set_color(&mut self, color: Color) {
        self.core.set_color(color);
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.core.set_eraser(eraser);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.begin_stroke(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.extend_stroke(pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.end_stroke()
    }

    pub fn on_touch_start(&mut self, client: Point, rect_origin: Point) -> Vec<Action> {
        self.core.begin_touch_stroke(client, rect_origin)
    }

    pub fn on_touch_move(&mut self, client: Point, rect_origin: Point) -> Vec<Action> {
        self.core.extend_touch_stroke(client, rect_origin)
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.core.end_stroke()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    // --- Render ---

    /// Draw the current raster to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or the blit fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        render::blit(&self.canvas, &self.core.surface, &mut self.frame)
    }

    // --- Delegated queries ---

    /// # Errors
    ///
    /// Returns `Err` if PNG encoding fails.
    pub fn export_data_url(&self) -> Result<String, JsValue> {
        self.core.export_data_url().map_err(to_js)
    }

    #[must_use]
    pub fn scan_drawn_bounds(&self) -> Option<Bounds> {
        self.core.scan_drawn_bounds()
    }

    /// Top-left of the canvas element in viewport coordinates.
    #[must_use]
    pub fn client_origin(&self) -> Point {
        render::client_origin(&self.canvas)
    }
}

//! Rendering: copies the raster into the page's 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the surface and produces pixels on the element; it does not
//! mutate any engine state.

use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::geom::Point;
use crate::surface::Surface;

/// Replace the element's pixels with the surface's.
///
/// `frame` is scratch space for the straight-alpha bytes, kept by the caller
/// between blits.
///
/// # Errors
///
/// Returns `Err` if the 2D context cannot be obtained or `putImageData` fails.
pub fn blit(canvas: &HtmlCanvasElement, surface: &Surface, frame: &mut Vec<u8>) -> Result<(), JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    surface.write_rgba(frame);
    let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(frame.as_slice()), surface.width(), surface.height())?;
    ctx.put_image_data(&image, 0.0, 0.0)
}

/// Viewport position of the element's top-left corner.
#[must_use]
pub fn client_origin(canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

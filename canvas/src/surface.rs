//! Raster surface: the single pixel buffer every stroke lands in.
//!
//! No vector history is kept. Strokes are rasterized immediately into a
//! `tiny_skia::Pixmap`; the only ways to read the drawing back are the
//! bounds scan and the PNG export, both of which see exactly what the page
//! shows after the next blit.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::Color;
use crate::consts::PNG_DATA_URL_PREFIX;
use crate::geom::{Bounds, Point};

/// Failures from allocating or serializing the raster.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The requested dimensions overflow the pixmap size limits.
    #[error("cannot allocate a {width}x{height} raster")]
    InvalidSize { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("png encode failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Owned RGBA raster with premultiplied storage.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Allocate a fully transparent raster. Zero dimensions are bumped to one
    /// pixel so a collapsed layout still yields a valid surface.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidSize`] if the pixmap cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(width.max(1), height.max(1)).ok_or(SurfaceError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Stroke one round-capped line segment.
    ///
    /// Coordinates outside the raster are clipped, not rejected.
    #[allow(clippy::cast_possible_truncation)]
    pub fn stroke_segment(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = true;

        let stroke = Stroke { width, line_cap: LineCap::Round, line_join: LineJoin::Round, ..Stroke::default() };
        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Reset every pixel to full transparency.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Tightest box around every pixel whose alpha is non-zero, or `None` if
    /// nothing has been drawn.
    #[must_use]
    pub fn scan_drawn_bounds(&self) -> Option<Bounds> {
        let width = self.pixmap.width();
        let mut bounds: Option<Bounds> = None;
        let (mut x, mut y) = (0_u32, 0_u32);
        for px in self.pixmap.pixels() {
            if px.alpha() > 0 {
                match bounds.as_mut() {
                    Some(b) => b.include(x, y),
                    None => bounds = Some(Bounds::pixel(x, y)),
                }
            }
            x += 1;
            if x == width {
                x = 0;
                y += 1;
            }
        }
        bounds
    }

    /// Straight-alpha RGBA of one pixel, or `None` outside the raster.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // Pixmap::pixel only bounds-checks the flat index, so x wraps rows.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Row-major straight-alpha RGBA bytes, as `ImageData` and PNG expect.
    #[must_use]
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_rgba(&mut out);
        out
    }

    /// Fill `out` with the same bytes as [`Surface::rgba_bytes`], reusing its
    /// allocation. Called once per blit.
    pub fn write_rgba(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            if px.alpha() == 0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            let c = px.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
    }

    /// Encode the raster as an 8-bit RGBA PNG.
    ///
    /// Encoder settings are fixed so identical drawings encode identically.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if the encoder rejects the data.
    pub fn export_png(&self) -> Result<Vec<u8>, SurfaceError> {
        let rgba = self.rgba_bytes();
        let mut buf = Vec::new();
        let mut enc = Encoder::new(&mut buf, self.width(), self.height());
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        enc.set_filter(FilterType::NoFilter);
        enc.set_compression(Compression::Default);
        {
            let mut writer = enc.write_header()?;
            writer.write_image_data(&rgba)?;
        }
        Ok(buf)
    }

    /// The PNG export wrapped as a `data:image/png;base64,` URL.
    ///
    /// # Errors
    ///
    /// Propagates [`Surface::export_png`] failures.
    pub fn export_data_url(&self) -> Result<String, SurfaceError> {
        let png = self.export_png()?;
        Ok(format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(png)))
    }
}

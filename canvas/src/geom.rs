#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in canvas space (CSS pixels, origin at the canvas's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Inclusive pixel-space bounding box of drawn pixels.
///
/// `max_x` / `max_y` name the last drawn column/row, not one past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    /// Box covering a single pixel.
    #[must_use]
    pub fn pixel(x: u32, y: u32) -> Self {
        Self { min_x: x, min_y: y, max_x: x, max_y: y }
    }

    /// Grow the box so it also covers pixel `(x, y)`.
    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Midpoint between the min and max corners.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: (f64::from(self.min_x) + f64::from(self.max_x)) / 2.0,
            y: (f64::from(self.min_y) + f64::from(self.max_y)) / 2.0,
        }
    }
}

/// Translate raw client (viewport) coordinates into canvas space by
/// subtracting the canvas's on-screen bounding-rect origin.
///
/// Touch events only carry client coordinates, while pointer events report
/// offsets relative to the canvas; this brings the former in line.
#[must_use]
pub fn normalize_client_point(client: Point, rect_origin: Point) -> Point {
    Point {
        x: client.x - rect_origin.x,
        y: client.y - rect_origin.y,
    }
}

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use canvas::geom::Point;

/// A label drag in progress.
///
/// The pointer keeps the same offset from the label's top-left corner that it
/// had when the drag started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelDrag {
    /// Which overlay entry is being dragged.
    pub index: usize,
    /// Pointer position minus label origin at drag start.
    pub grab: Point,
    /// Where the label is drawn right now.
    pub position: Point,
}

impl LabelDrag {
    pub fn begin(index: usize, pointer: Point, origin: Point) -> Self {
        Self { index, grab: Point::new(pointer.x - origin.x, pointer.y - origin.y), position: origin }
    }

    pub fn move_to(&mut self, pointer: Point) {
        self.position = Point::new(pointer.x - self.grab.x, pointer.y - self.grab.y);
    }
}

/// Inline style placing a label at `p`.
pub fn label_style(p: Point) -> String {
    format!("left: {:.2}px; top: {:.2}px;", p.x, p.y)
}

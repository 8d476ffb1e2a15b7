//! Session state: tool selection, remembered variables, and recognized results.
//!
//! Lives in one `RwSignal<SessionState>` provided by the root component. The
//! canvas host owns the raster, so reset and calculate are expressed here as
//! sequence counters the host watches rather than direct calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use canvas::geom::{Bounds, Point};

use crate::net::types::{ResponseEntry, VariableMap};
use crate::util::palette::DEFAULT_COLOR;

/// Where labels sit before any drawing has been measured or dragged.
pub const DEFAULT_OVERLAY_POSITION: Point = Point { x: 10.0, y: 200.0 };

/// One recognized expression and its answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognitionResult {
    pub expression: String,
    pub answer: String,
}

impl RecognitionResult {
    pub fn new(expression: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { expression: expression.into(), answer: answer.into() }
    }

    /// Display markup handed to the typesetter.
    pub fn markup(&self) -> String {
        format!("\\(\\LARGE{{{} = {}}}\\)", self.expression, self.answer)
    }
}

#[derive(Clone, Debug)]
pub struct SessionState {
    /// Selected swatch, as a CSS color string.
    pub color: String,
    pub eraser: bool,
    /// Edge-triggered: set by the Reset button, consumed by [`Self::take_reset`].
    pub reset_requested: bool,
    pub variables: VariableMap,
    /// Append-only until reset.
    pub results: Vec<RecognitionResult>,
    /// Markup for each entry of `results`, in the same order.
    pub overlay: Vec<String>,
    /// Shared anchor for every label.
    pub overlay_position: Point,
    /// Bumped on every reset; the canvas host clears its raster on change.
    pub clear_seq: u64,
    /// Bumped on every Calculate press; the canvas host submits on change.
    pub calculate_seq: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            eraser: false,
            reset_requested: false,
            variables: VariableMap::new(),
            results: Vec::new(),
            overlay: Vec::new(),
            overlay_position: DEFAULT_OVERLAY_POSITION,
            clear_seq: 0,
            calculate_seq: 0,
        }
    }
}

impl SessionState {
    // --- Tools ---

    /// Pick a pen color. Picking a color leaves eraser mode.
    pub fn set_tool(&mut self, color: &str) {
        color.clone_into(&mut self.color);
        self.eraser = false;
    }

    pub fn toggle_eraser(&mut self) {
        self.eraser = !self.eraser;
    }

    // --- Reset ---

    pub fn trigger_reset(&mut self) {
        self.reset_requested = true;
    }

    /// Perform a pending reset, if any, and clear the trigger.
    ///
    /// Results, overlay, and variables are wiped together and `clear_seq` is
    /// bumped so the raster is cleared in the same flush. Returns whether a
    /// reset happened.
    pub fn take_reset(&mut self) -> bool {
        if !self.reset_requested {
            return false;
        }
        self.results.clear();
        self.overlay.clear();
        self.variables.clear();
        self.clear_seq = self.clear_seq.wrapping_add(1);
        self.reset_requested = false;
        true
    }

    // --- Variables and results ---

    /// Remember `expr = result`; a later value for the same key replaces it.
    pub fn record_assignment(&mut self, expr: impl Into<String>, result: impl Into<String>) {
        self.variables.insert(expr.into(), result.into());
    }

    pub fn current_variables(&self) -> &VariableMap {
        &self.variables
    }

    /// Append one result and its overlay markup.
    pub fn append_result(&mut self, result: RecognitionResult) {
        self.overlay.push(result.markup());
        self.results.push(result);
    }

    /// Append `result` if no reset has happened since `generation` was read
    /// from `clear_seq`. Returns whether it was appended.
    pub fn reveal(&mut self, generation: u64, result: RecognitionResult) -> bool {
        if generation != self.clear_seq {
            return false;
        }
        self.append_result(result);
        true
    }

    /// Apply a response batch in order.
    ///
    /// Every assignment entry is recorded before anything is revealed; the
    /// remaining entries are returned, in order, for the caller to reveal.
    pub fn apply_response(&mut self, entries: Vec<ResponseEntry>) -> Vec<RecognitionResult> {
        let mut reveal = Vec::new();
        for entry in entries {
            if entry.assign {
                self.record_assignment(entry.expr, entry.result);
            } else {
                reveal.push(RecognitionResult::new(entry.expr, entry.result));
            }
        }
        reveal
    }

    /// [`SessionState::apply_response`] for a batch requested when
    /// `clear_seq` was `generation`. A batch that outlived a reset is
    /// dropped whole and `None` is returned.
    pub fn apply_response_from(&mut self, generation: u64, entries: Vec<ResponseEntry>) -> Option<Vec<RecognitionResult>> {
        if generation != self.clear_seq {
            return None;
        }
        Some(self.apply_response(entries))
    }

    // --- Overlay ---

    /// Re-anchor labels at the center of the drawn area. An empty canvas
    /// leaves the anchor where it was.
    pub fn set_overlay_from_bounds(&mut self, bounds: Option<Bounds>) {
        if let Some(b) = bounds {
            self.overlay_position = b.center();
        }
    }

    /// A label was dropped at `position`. The anchor is shared, so every label
    /// follows. Drops for labels that no longer exist are ignored.
    pub fn on_drag(&mut self, index: usize, position: Point) {
        if index < self.overlay.len() {
            self.overlay_position = position;
        }
    }

    // --- Calculate ---

    pub fn request_calculation(&mut self) {
        self.calculate_seq = self.calculate_seq.wrapping_add(1);
    }
}

//! Timing of result reveals for one response batch.
//!
//! Every displayable entry gets its own timer, all armed together with the
//! same delay, so a batch appears at once after the delay rather than one
//! entry per tick. Each reveal carries the reset generation it was planned
//! under; the session drops reveals from before a reset.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::state::session::RecognitionResult;

/// One scheduled append.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Milliseconds from batch processing until the append.
    pub delay_ms: u32,
    /// `clear_seq` when the batch was applied.
    pub generation: u64,
    pub result: RecognitionResult,
}

/// Plan the reveals for `results`, in response order.
pub fn reveal_plan(results: Vec<RecognitionResult>, delay_ms: u32, generation: u64) -> Vec<Reveal> {
    results
        .into_iter()
        .map(|result| Reveal { delay_ms, generation, result })
        .collect()
}

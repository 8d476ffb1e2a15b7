use super::*;
use crate::net::types::ResponseEntry;
use crate::state::session::SessionState;

fn entry(expr: &str, result: &str, assign: bool) -> ResponseEntry {
    ResponseEntry { expr: expr.into(), result: result.into(), assign }
}

#[test]
fn every_result_gets_the_same_delay_in_order() {
    let results = vec![
        RecognitionResult::new("1+1", "2"),
        RecognitionResult::new("2*3", "6"),
        RecognitionResult::new("9-4", "5"),
    ];
    let plan = reveal_plan(results.clone(), 1000, 0);
    assert_eq!(plan.len(), 3);
    assert!(plan.iter().all(|r| r.delay_ms == 1000));
    let planned: Vec<_> = plan.into_iter().map(|r| r.result).collect();
    assert_eq!(planned, results);
}

#[test]
fn assignments_are_not_planned() {
    let mut s = SessionState::default();
    let shown = s.apply_response(vec![entry("x", "5", true), entry("x+1", "6", false), entry("y", "2", true)]);
    let plan = reveal_plan(shown, 250, s.clear_seq);
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].result, RecognitionResult::new("x+1", "6"));
    assert_eq!(plan[0].delay_ms, 250);
}

#[test]
fn empty_batch_plans_nothing() {
    assert!(reveal_plan(Vec::new(), 1000, 0).is_empty());
}

#[test]
fn plan_carries_the_reset_generation() {
    let plan = reveal_plan(vec![RecognitionResult::new("2+2", "4")], 0, 7);
    assert_eq!(plan[0].generation, 7);
    assert_eq!(plan[0].delay_ms, 0);
}

#[test]
fn reveals_land_after_delay_unless_reset_intervened() {
    let mut s = SessionState::default();
    let shown = s.apply_response(vec![entry("2+2", "4", false)]);
    let plan = reveal_plan(shown, 1000, s.clear_seq);

    // Timers fire.
    for r in plan {
        assert!(s.reveal(r.generation, r.result));
    }
    assert_eq!(s.overlay.len(), 1);
    assert!(s.overlay[0].contains("2+2 = 4"));

    let stale = reveal_plan(vec![RecognitionResult::new("3+3", "6")], 1000, s.clear_seq);
    s.trigger_reset();
    assert!(s.take_reset());
    for r in stale {
        assert!(!s.reveal(r.generation, r.result));
    }
    assert!(s.overlay.is_empty());
    assert!(s.results.is_empty());
}

//! End-to-end tests for the scripted solution.

use strictly_hanoi::{MoveOutcome, Peg, TowerConfig};
use strictly_hanoi_tui::run_demo;

#[test]
fn test_demo_solves_three_discs() {
    let config = TowerConfig::of_size(3);
    let mut out = Vec::new();
    let outcomes = run_demo(&config, false, &mut out).expect("demo runs");

    assert_eq!(outcomes.len(), 7);
    assert!(outcomes.iter().all(MoveOutcome::is_committed));

    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().count(), 8);
    assert!(text.lines().next().expect("start line").starts_with("start"));
}

#[test]
fn test_demo_json_lines() {
    let config = TowerConfig::default();
    let mut out = Vec::new();
    let outcomes = run_demo(&config, true, &mut out).expect("demo runs");
    assert_eq!(outcomes.len(), 31);

    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(lines.len(), 31);
    assert_eq!(lines[0]["step"], 1);

    let last = &lines[30]["pegs"];
    assert_eq!(last[0].as_array().map(Vec::len), Some(0));
    assert_eq!(last[1].as_array().map(Vec::len), Some(0));
    assert_eq!(
        last[2],
        serde_json::json!([4.0, 3.0, 2.0, 1.0, 0.5])
    );
}

#[test]
fn test_demo_from_right_peg_ends_left() {
    let config = TowerConfig::of_size(2).with_start_peg(Peg::Right);
    let mut out = Vec::new();
    let outcomes = run_demo(&config, false, &mut out).expect("demo runs");

    match outcomes.last() {
        Some(MoveOutcome::Committed { to, .. }) => assert_eq!(*to, Peg::Left),
        other => panic!("Expected a committed move, got {:?}", other),
    }
}

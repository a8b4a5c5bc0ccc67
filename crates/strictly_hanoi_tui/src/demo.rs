//! Scripted replay of the classic solution.
//!
//! Each move is performed as a real pick-up, drag and release, so the
//! demo exercises the same validator the mouse does.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::io::Write;
use strictly_hanoi::{AnyPuzzle, MoveOutcome, Peg, Point3, Tower, TowerConfig};
use tracing::{debug, info, instrument};

/// Height the demo lifts discs to while dragging.
const DRAG_HEIGHT: f32 = 12.0;

/// Peg moves solving `count` discs from `from` to `to`, shortest first.
#[instrument]
pub fn solution(count: usize, from: Peg, to: Peg) -> Vec<(Peg, Peg)> {
    let mut moves = Vec::with_capacity((1usize << count.min(20)).saturating_sub(1));
    solve(count, from, to, spare(from, to), &mut moves);
    moves
}

fn solve(count: usize, from: Peg, to: Peg, via: Peg, moves: &mut Vec<(Peg, Peg)>) {
    if count == 0 {
        return;
    }
    solve(count - 1, from, via, to, moves);
    moves.push((from, to));
    solve(count - 1, via, to, from, moves);
}

fn spare(a: Peg, b: Peg) -> Peg {
    Peg::ALL
        .into_iter()
        .find(|peg| *peg != a && *peg != b)
        .unwrap_or(Peg::Center)
}

/// Peg the demo moves the stack to.
pub fn target_peg(start: Peg) -> Peg {
    match start {
        Peg::Right => Peg::Left,
        _ => Peg::Right,
    }
}

#[derive(Serialize)]
struct DemoStep<'a> {
    step: usize,
    outcome: &'a MoveOutcome,
    pegs: [Vec<f32>; 3],
}

fn radii_by_peg(tower: &Tower) -> [Vec<f32>; 3] {
    Peg::ALL.map(|peg| tower.radii(peg))
}

fn format_pegs(tower: &Tower) -> String {
    Peg::ALL
        .iter()
        .map(|peg| {
            let radii = tower
                .radii(*peg)
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("{} [{}]", peg, radii)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Drags the top disc of `from` over `to` and releases it.
#[instrument(skip(puzzle))]
pub fn gesture(puzzle: &mut AnyPuzzle, from: Peg, to: Peg) -> Result<MoveOutcome> {
    let Some(id) = puzzle.tower().registry().top(from) else {
        bail!("No disc on {} peg", from);
    };
    puzzle.pick_up(id)?;
    puzzle.drag(id, Point3::new(to.center_x(), DRAG_HEIGHT, 0.0))?;
    let outcome = puzzle.release(id)?;
    debug!(%outcome, "Gesture finished");
    Ok(outcome)
}

/// Plays the full solution and writes one line per move to `out`.
///
/// Stops with an error if any move is not committed.
#[instrument(skip_all, fields(discs = config.discs().len(), json))]
pub fn run_demo<W: Write>(config: &TowerConfig, json: bool, out: &mut W) -> Result<Vec<MoveOutcome>> {
    let mut puzzle = AnyPuzzle::new(config).context("Failed to build tower")?;
    let start = *config.start_peg();
    let moves = solution(config.discs().len(), start, target_peg(start));
    info!(moves = moves.len(), "Starting demo");

    if !json {
        writeln!(out, "start    {}", format_pegs(puzzle.tower()))?;
    }

    let mut outcomes = Vec::with_capacity(moves.len());
    for (step, (from, to)) in moves.into_iter().enumerate() {
        let outcome = gesture(&mut puzzle, from, to)?;
        if json {
            let line = DemoStep {
                step: step + 1,
                outcome: &outcome,
                pegs: radii_by_peg(puzzle.tower()),
            };
            writeln!(out, "{}", serde_json::to_string(&line)?)?;
        } else {
            writeln!(out, "{:>4}: {}  |  {}", step + 1, outcome, format_pegs(puzzle.tower()))?;
        }
        if !outcome.is_committed() {
            bail!("Move {} was not committed: {}", step + 1, outcome);
        }
        outcomes.push(outcome);
    }

    info!(moves = outcomes.len(), "Demo finished");
    Ok(outcomes)
}

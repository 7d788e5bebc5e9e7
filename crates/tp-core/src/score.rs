//! Official ten-pin scoring, derived on demand.
//!
//! Scores are never stored on frames; [`score`] is a pure derivation over
//! the frame sequence. A frame whose bonus rolls have not been thrown yet
//! scores `None` ("not yet determined"), which is distinct from a scored
//! zero. Running totals stay `None` from the first indeterminate frame on.

use serde::Serialize;

use crate::frame::Frame;
use crate::game::Game;

/// Derived scores for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameScore {
    /// Value earned by each frame, `None` while bonus rolls are missing.
    pub frame_scores: Vec<Option<u16>>,
    /// Running totals per frame.
    pub cumulative: Vec<Option<u16>>,
    /// Final total, `None` while the game cannot be fully scored.
    pub total: Option<u16>,
}

/// Scores a game under standard ten-pin rules.
///
/// Frames 1-9: a strike earns 10 plus the next two rolls, a spare 10 plus
/// the next roll, an open frame the sum of its own rolls. The tenth frame
/// is the sum of its own rolls with no lookahead past it.
#[must_use]
pub fn score(game: &Game) -> GameScore {
    let frames = game.frames();

    let frame_scores: Vec<_> = frames
        .iter()
        .enumerate()
        .map(|(position, frame)| frame_value(frames, position, frame))
        .collect();

    let mut cumulative = Vec::with_capacity(frame_scores.len());
    let mut running = Some(0u16);
    for value in &frame_scores {
        running = match (running, value) {
            (Some(acc), Some(v)) => Some(acc + *v),
            _ => None,
        };
        cumulative.push(running);
    }

    let total = cumulative.last().copied().flatten();
    GameScore {
        frame_scores,
        cumulative,
        total,
    }
}

fn frame_value(frames: &[Frame], position: usize, frame: &Frame) -> Option<u16> {
    if position == 9 {
        // No lookahead past the tenth; it scores its own rolls once all
        // of them have been thrown.
        return frame.is_complete().then(|| own_pins(frame));
    }
    if frame.is_strike() {
        bonus_rolls(frames, position, 2).map(|b| 10 + b)
    } else if frame.is_spare() {
        bonus_rolls(frames, position, 1).map(|b| 10 + b)
    } else if frame.is_open() {
        Some(own_pins(frame))
    } else {
        // Second ball not thrown yet.
        None
    }
}

fn own_pins(frame: &Frame) -> u16 {
    frame.rolls().iter().map(|r| u16::from(r.count())).sum()
}

/// Sums the next `needed` rolls after `position`, crossing frame
/// boundaries. `None` if that many rolls do not exist yet.
fn bonus_rolls(frames: &[Frame], position: usize, needed: usize) -> Option<u16> {
    let mut counts = frames[position + 1..]
        .iter()
        .flat_map(|frame| frame.rolls())
        .map(|roll| u16::from(roll.count()));

    let mut sum = 0;
    for _ in 0..needed {
        sum += counts.next()?;
    }
    Some(sum)
}

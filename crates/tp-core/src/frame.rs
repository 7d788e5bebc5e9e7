//! Rolls and frames, validated at construction.
//!
//! A [`Frame`] can only be built through [`Frame::new`], which enforces the
//! ten-pin rules for its position. Malformed frames (a second ball after a
//! strike, overlapping pin sets, an unearned third ball in the tenth) are
//! unrepresentable, so scoring never has to defend against them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Pin, ValidationError};

/// Errors raised when constructing an invalid frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The frame index was outside 1-10.
    #[error("frame index must be between 1 and 10, got {index}")]
    InvalidIndex { index: u8 },

    /// The frame had no rolls at all.
    #[error("frame {index} has no rolls")]
    NoRolls { index: u8 },

    /// More rolls than the frame's position allows.
    #[error("frame {index} has {rolls} rolls, at most {max} allowed")]
    TooManyRolls { index: u8, rolls: usize, max: usize },

    /// A roll was recorded after a strike in frames 1-9.
    #[error("frame {index} admits no roll after a strike")]
    RollAfterStrike { index: u8 },

    /// Two rolls on the same rack claim the same pin.
    #[error("frame {index}: pin {pin} was already down")]
    PinAlreadyDown { index: u8, pin: Pin },

    /// A third roll in the tenth frame without a strike or spare.
    #[error("frame 10 allows a third roll only after a strike or spare")]
    UnearnedThirdRoll,
}

/// One delivery: the set of pins it knocked down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roll {
    pins: BTreeSet<Pin>,
}

impl Roll {
    /// Creates a roll from the pins it knocked down.
    pub fn new(pins: impl IntoIterator<Item = Pin>) -> Self {
        Self {
            pins: pins.into_iter().collect(),
        }
    }

    /// Creates a roll from raw pin numbers, validating each.
    pub fn from_numbers(numbers: impl IntoIterator<Item = u8>) -> Result<Self, ValidationError> {
        let pins = numbers
            .into_iter()
            .map(Pin::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { pins })
    }

    /// A roll that knocked down all ten pins.
    #[must_use]
    pub fn strike() -> Self {
        Self::new(Pin::all())
    }

    /// A roll that knocked down nothing.
    #[must_use]
    pub fn miss() -> Self {
        Self { pins: BTreeSet::new() }
    }

    /// Number of pins knocked down (0-10).
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "set holds at most 10 pins")]
    pub fn count(&self) -> u8 {
        self.pins.len() as u8
    }

    /// The pins knocked down by this delivery.
    #[must_use]
    pub const fn pins(&self) -> &BTreeSet<Pin> {
        &self.pins
    }
}

/// Raw frame shape used for serde; validated into [`Frame`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FrameParts {
    index: u8,
    rolls: Vec<Roll>,
}

/// One of the ten scoring units of a game: 1-3 rolls at a 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FrameParts", into = "FrameParts")]
pub struct Frame {
    index: u8,
    rolls: Vec<Roll>,
}

impl Frame {
    /// Builds a frame, enforcing the ten-pin rules for its position.
    ///
    /// Frames 1-9 take at most two rolls (one if the first is a strike) and
    /// both rolls must hit disjoint pin sets. The tenth frame takes up to
    /// three rolls, the third only after a strike or spare, with the rack
    /// resetting after each strike or a spare.
    pub fn new(index: u8, rolls: Vec<Roll>) -> Result<Self, FrameError> {
        if !(1..=10).contains(&index) {
            return Err(FrameError::InvalidIndex { index });
        }
        if rolls.is_empty() {
            return Err(FrameError::NoRolls { index });
        }

        if index < 10 {
            if rolls.len() > 2 {
                return Err(FrameError::TooManyRolls {
                    index,
                    rolls: rolls.len(),
                    max: 2,
                });
            }
            if rolls[0].count() == 10 && rolls.len() > 1 {
                return Err(FrameError::RollAfterStrike { index });
            }
            if rolls.len() == 2 {
                check_disjoint(index, &rolls[0], &rolls[1])?;
            }
        } else {
            if rolls.len() > 3 {
                return Err(FrameError::TooManyRolls {
                    index,
                    rolls: rolls.len(),
                    max: 3,
                });
            }
            validate_tenth(&rolls)?;
        }

        Ok(Self { index, rolls })
    }

    /// 1-based position within the game.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// All rolls of this frame, in delivery order.
    #[must_use]
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// The first delivery. Always present on a validated frame.
    #[must_use]
    pub fn first_roll(&self) -> &Roll {
        &self.rolls[0]
    }

    /// The second delivery, if it happened yet.
    #[must_use]
    pub fn second_roll(&self) -> Option<&Roll> {
        self.rolls.get(1)
    }

    /// All ten pins down on the first ball.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.first_roll().count() == 10
    }

    /// All ten pins down across the first two balls, first not a strike.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        !self.is_strike()
            && self
                .second_roll()
                .is_some_and(|second| self.first_roll().count() + second.count() == 10)
    }

    /// Two balls thrown, pins left standing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.is_strike()
            && self
                .second_roll()
                .is_some_and(|second| self.first_roll().count() + second.count() < 10)
    }

    /// Strike or spare.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.is_strike() || self.is_spare()
    }

    /// Whether every roll this frame is entitled to has been thrown.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.index < 10 {
            self.is_strike() || self.rolls.len() == 2
        } else if self.is_strike() || self.is_spare() {
            self.rolls.len() == 3
        } else {
            self.rolls.len() == 2
        }
    }

    /// The pins still standing after the first ball.
    #[must_use]
    pub fn standing_after_first(&self) -> BTreeSet<Pin> {
        let down = self.first_roll().pins();
        Pin::all().filter(|pin| !down.contains(pin)).collect()
    }
}

fn check_disjoint(index: u8, first: &Roll, second: &Roll) -> Result<(), FrameError> {
    if let Some(&pin) = first.pins().intersection(second.pins()).next() {
        return Err(FrameError::PinAlreadyDown { index, pin });
    }
    Ok(())
}

/// Tenth-frame rules, tracking rack resets after strikes and spares.
fn validate_tenth(rolls: &[Roll]) -> Result<(), FrameError> {
    let first_is_strike = rolls[0].count() == 10;

    match rolls.get(1) {
        Some(second) if !first_is_strike => check_disjoint(10, &rolls[0], second)?,
        _ => {}
    }

    if rolls.len() == 3 {
        if first_is_strike {
            // Fresh rack for the second ball; third shares it unless the
            // second was also a strike.
            if rolls[1].count() < 10 {
                check_disjoint(10, &rolls[1], &rolls[2])?;
            }
        } else if rolls[0].count() + rolls[1].count() < 10 {
            return Err(FrameError::UnearnedThirdRoll);
        }
        // A spare earns a fresh rack; the third ball is unconstrained.
    }

    Ok(())
}

impl TryFrom<FrameParts> for Frame {
    type Error = FrameError;

    fn try_from(parts: FrameParts) -> Result<Self, Self::Error> {
        Self::new(parts.index, parts.rolls)
    }
}

impl From<Frame> for FrameParts {
    fn from(frame: Frame) -> Self {
        Self {
            index: frame.index,
            rolls: frame.rolls,
        }
    }
}

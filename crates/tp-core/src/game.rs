//! A game: exactly ten frames in position order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frame::Frame;

/// Errors raised when constructing an invalid game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A game must have exactly ten frames.
    #[error("game must have exactly 10 frames, got {count}")]
    WrongFrameCount { count: usize },

    /// Frames must carry indexes 1..=10 in order.
    #[error("frame at position {position} has index {index}")]
    MisplacedFrame { position: u8, index: u8 },
}

/// An ordered sequence of exactly ten frames.
///
/// Serialized as a plain frame array; deserialization re-validates the
/// count and ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Frame>", into = "Vec<Frame>")]
pub struct Game {
    frames: Vec<Frame>,
}

impl Game {
    /// Builds a game from ten frames indexed 1..=10 in order.
    pub fn new(frames: Vec<Frame>) -> Result<Self, GameError> {
        if frames.len() != 10 {
            return Err(GameError::WrongFrameCount {
                count: frames.len(),
            });
        }
        for (position, frame) in (1u8..).zip(&frames) {
            if frame.index() != position {
                return Err(GameError::MisplacedFrame {
                    position,
                    index: frame.index(),
                });
            }
        }
        Ok(Self { frames })
    }

    /// The ten frames in position order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Whether every frame has all the rolls it is entitled to.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.frames.iter().all(Frame::is_complete)
    }
}

impl TryFrom<Vec<Frame>> for Game {
    type Error = GameError;

    fn try_from(frames: Vec<Frame>) -> Result<Self, Self::Error> {
        Self::new(frames)
    }
}

impl From<Game> for Vec<Frame> {
    fn from(game: Game) -> Self {
        game.frames
    }
}

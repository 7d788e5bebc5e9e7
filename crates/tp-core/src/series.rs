//! Series: a named, dated, tagged collection of games.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::types::{SeriesId, SeriesTag};

/// A named collection of games bowled together.
///
/// This is the storage-agnostic transfer shape: both the local SQLite
/// store and the remote document store persist exactly this serde form.
/// Games are owned by their series and do not outlive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Unique identifier (a UUID for locally created series).
    pub id: SeriesId,
    /// Display name, e.g. "City championship, squad B".
    pub name: String,
    /// Competitive context.
    pub tag: SeriesTag,
    /// When the series was recorded.
    pub created_at: DateTime<Utc>,
    /// The games, in the order they were bowled.
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Series {
    /// Total number of games in the series.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Frame, Roll};

    fn strike_game() -> Game {
        let mut frames: Vec<_> = (1..=9)
            .map(|index| Frame::new(index, vec![Roll::strike()]).unwrap())
            .collect();
        frames.push(
            Frame::new(10, vec![Roll::strike(), Roll::strike(), Roll::strike()]).unwrap(),
        );
        Game::new(frames).unwrap()
    }

    #[test]
    fn series_serde_roundtrip() {
        let series = Series {
            id: SeriesId::new("s-1").unwrap(),
            name: "League night".to_string(),
            tag: SeriesTag::League,
            created_at: "2025-03-01T19:00:00Z".parse().unwrap(),
            games: vec![strike_game()],
        };

        let json = serde_json::to_string(&series).unwrap();
        let parsed: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, series);
        assert_eq!(parsed.game_count(), 1);
    }

    #[test]
    fn series_games_default_to_empty() {
        let json = r#"{
            "id": "s-2",
            "name": "Warmup",
            "tag": "training",
            "created_at": "2025-03-02T10:00:00Z"
        }"#;
        let series: Series = serde_json::from_str(json).unwrap();
        assert_eq!(series.game_count(), 0);
    }
}

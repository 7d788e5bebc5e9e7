//! Score command: frame-by-frame scores for one series.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tp_core::{GameScore, score};

use crate::store::SeriesStore;

#[derive(Debug, Serialize)]
struct ScoreReport {
    series: String,
    games: Vec<GameEntry>,
}

#[derive(Debug, Serialize)]
struct GameEntry {
    /// 1-based position within the series.
    game: usize,
    #[serde(flatten)]
    score: GameScore,
}

pub fn run<W: Write>(
    writer: &mut W,
    store: &dyn SeriesStore,
    series_id: &str,
    game: Option<usize>,
    json: bool,
) -> Result<()> {
    let series = store
        .fetch_all()?
        .into_iter()
        .find(|s| s.id.as_str() == series_id)
        .with_context(|| format!("no series with ID {series_id}"))?;

    let scored: Vec<GameEntry> = series
        .games
        .iter()
        .enumerate()
        .map(|(i, g)| GameEntry {
            game: i + 1,
            score: score(g),
        })
        .collect();

    let selected: Vec<GameEntry> = match game {
        Some(position) => {
            let entry = scored
                .into_iter()
                .find(|entry| entry.game == position)
                .with_context(|| {
                    format!(
                        "series {series_id} has {} games, no game {position}",
                        series.games.len()
                    )
                })?;
            vec![entry]
        }
        None => scored,
    };

    if json {
        let report = ScoreReport {
            series: series_id.to_string(),
            games: selected,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if selected.is_empty() {
        writeln!(writer, "Series {series_id} has no games.")?;
        return Ok(());
    }

    for entry in selected {
        let total = entry
            .score
            .total
            .map_or_else(|| "in progress".to_string(), |t| t.to_string());
        writeln!(writer, "Game {}: {}", entry.game, total)?;
        writeln!(writer, "  frames:     {}", join_scores(&entry.score.frame_scores))?;
        writeln!(writer, "  cumulative: {}", join_scores(&entry.score.cumulative))?;
    }
    Ok(())
}

fn join_scores(values: &[Option<u16>]) -> String {
    values
        .iter()
        .map(|value| value.map_or_else(|| "-".to_string(), |v| v.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

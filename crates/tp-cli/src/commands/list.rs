//! List command: stored series with their game totals.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tp_core::{SeriesTag, score};

use crate::store::SeriesStore;

#[derive(Debug, Serialize)]
struct ListEntry {
    id: String,
    name: String,
    tag: SeriesTag,
    created_at: DateTime<Utc>,
    games: usize,
    /// Per-game totals; null while a game cannot be fully scored yet.
    totals: Vec<Option<u16>>,
}

pub fn run<W: Write>(writer: &mut W, store: &dyn SeriesStore, json: bool) -> Result<()> {
    let entries: Vec<ListEntry> = store
        .fetch_all()?
        .into_iter()
        .map(|series| ListEntry {
            totals: series.games.iter().map(|game| score(game).total).collect(),
            id: series.id.to_string(),
            name: series.name,
            tag: series.tag,
            created_at: series.created_at,
            games: series.games.len(),
        })
        .collect();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    if entries.is_empty() {
        writeln!(writer, "No series stored.")?;
        return Ok(());
    }

    for entry in entries {
        let totals: Vec<String> = entry
            .totals
            .iter()
            .map(|total| total.map_or_else(|| "-".to_string(), |t| t.to_string()))
            .collect();
        writeln!(
            writer,
            "{}  {:<10}  {}  [{}]  ({} games: {})",
            entry.created_at.format("%Y-%m-%d"),
            entry.tag,
            entry.name,
            entry.id,
            entry.games,
            totals.join(", "),
        )?;
    }
    Ok(())
}

//! Import command: series documents into the selected store.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tp_core::{Game, Series, SeriesId, SeriesTag};
use uuid::Uuid;

use crate::store::SeriesStore;

pub fn run<W: Write>(
    writer: &mut W,
    store: &mut dyn SeriesStore,
    file: Option<&Path>,
) -> Result<()> {
    let series = match file {
        Some(path) => {
            let reader = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            parse_series(BufReader::new(reader))?
        }
        None => parse_series(io::stdin().lock())?,
    };

    for entry in &series {
        store.save(entry)?;
    }
    writeln!(writer, "Imported {} series.", series.len())?;
    Ok(())
}

fn parse_series<R: BufRead>(reader: R) -> Result<Vec<Series>> {
    let mut series = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let parsed: ImportSeries = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid series on line {}", idx + 1))?;
        let entry = parsed
            .into_series()
            .with_context(|| format!("invalid series on line {}", idx + 1))?;
        series.push(entry);
    }
    Ok(series)
}

/// Incoming document shape. ID and creation time are optional so hand-written
/// documents can be imported; frames and games re-validate through their
/// serde forms, so malformed input fails here with the line number.
#[derive(Debug, Deserialize)]
struct ImportSeries {
    #[serde(default)]
    id: Option<SeriesId>,
    name: String,
    tag: SeriesTag,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    games: Vec<Game>,
}

impl ImportSeries {
    fn into_series(self) -> Result<Series> {
        if self.name.trim().is_empty() {
            anyhow::bail!("missing name");
        }
        let id = match self.id {
            Some(id) => id,
            None => SeriesId::new(Uuid::new_v4().to_string())
                .context("failed to generate series ID")?,
        };
        Ok(Series {
            id,
            name: self.name,
            tag: self.tag,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            games: self.games,
        })
    }
}

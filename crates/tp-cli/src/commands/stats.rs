//! Stats command: collection metrics over stored series.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tp_core::{Rate, SeriesStats, SeriesTag, compute_stats};

use crate::store::SeriesStore;

#[derive(Debug, Serialize)]
struct StatsReport {
    tag: Option<SeriesTag>,
    series: usize,
    games: u32,
    stats: SeriesStats,
}

/// Generates a 10-character progress bar for a percentage.
/// Non-zero values below 5% get a single block for visibility.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_bar(percent: f64) -> String {
    let filled = if percent > 0.0 && percent < 5.0 {
        1
    } else {
        (percent / 10.0).round().clamp(0.0, 10.0) as usize
    };
    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

pub fn run<W: Write>(
    writer: &mut W,
    store: &dyn SeriesStore,
    tag: Option<SeriesTag>,
    json: bool,
) -> Result<()> {
    let mut series = store.fetch_all()?;
    if let Some(tag) = tag {
        series.retain(|s| s.tag == tag);
    }
    let stats = compute_stats(&series);

    if json {
        let report = StatsReport {
            tag,
            series: series.len(),
            games: stats.clean_games.total,
            stats,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    match tag {
        Some(tag) => writeln!(
            writer,
            "Series: {} ({} games, tag {tag})",
            series.len(),
            stats.clean_games.total
        )?,
        None => writeln!(
            writer,
            "Series: {} ({} games)",
            series.len(),
            stats.clean_games.total
        )?,
    }

    write_rate(writer, "Strike after strike", stats.strike_after_strike)?;
    write_rate(writer, "Strike after open  ", stats.strike_after_open)?;
    write_rate(writer, "Clean games        ", stats.clean_games)?;
    write_rate(writer, "Split conversion   ", stats.split_conversion)?;
    writeln!(
        writer,
        "First ball average   {}  {:>5.2}",
        progress_bar(stats.first_ball_average * 10.0),
        stats.first_ball_average
    )?;
    Ok(())
}

fn write_rate<W: Write>(writer: &mut W, label: &str, rate: Rate) -> Result<()> {
    writeln!(
        writer,
        "{label}  {}  {:>5.1}% ({rate})",
        progress_bar(rate.percent()),
        rate.percent()
    )?;
    Ok(())
}

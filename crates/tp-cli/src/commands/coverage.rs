//! Coverage command: pin-combination conversion rate.

use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tp_core::{Pin, Rate, SeriesTag, coverage};

use crate::store::SeriesStore;

#[derive(Debug, Serialize)]
struct CoverageReport {
    pins: Vec<u8>,
    tag: Option<SeriesTag>,
    successes: u32,
    total: u32,
    percent: f64,
}

pub fn run<W: Write>(
    writer: &mut W,
    store: &dyn SeriesStore,
    pins: &[u8],
    tag: Option<SeriesTag>,
    json: bool,
) -> Result<()> {
    let targets: BTreeSet<Pin> = pins
        .iter()
        .map(|&number| Pin::new(number))
        .collect::<Result<_, _>>()?;

    let mut series = store.fetch_all()?;
    if let Some(tag) = tag {
        series.retain(|s| s.tag == tag);
    }
    let rate: Rate = coverage(&series, &targets);

    if json {
        let report = CoverageReport {
            pins: targets.iter().map(|pin| pin.number()).collect(),
            tag,
            successes: rate.successes,
            total: rate.total,
            percent: rate.percent(),
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let label = targets
        .iter()
        .map(|pin| pin.number().to_string())
        .collect::<Vec<_>>()
        .join("-");
    writeln!(
        writer,
        "Coverage {label}: {rate} ({:.1}%)",
        rate.percent()
    )?;
    Ok(())
}

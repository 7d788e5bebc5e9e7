//! Collection-wide statistics over series.
//!
//! All metrics are pure, single-pass recomputations over the supplied
//! series snapshot; nothing is cached between calls and the inputs are
//! never mutated. Empty input is a valid, fully-defined case: every rate
//! is 0/0 and every percentage 0.0.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::frame::Frame;
use crate::series::Series;
use crate::split::is_split;
use crate::types::Pin;

/// A success/total pair, displayed as `"successes/total"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rate {
    pub successes: u32,
    pub total: u32,
}

impl Rate {
    /// Percentage in 0.0-100.0; 0/0 is defined as 0.0, not an error.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.total) * 100.0
        }
    }

    fn record(&mut self, success: bool) {
        self.total += 1;
        if success {
            self.successes += 1;
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.successes, self.total)
    }
}

/// The five collection metrics derived from a series snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesStats {
    /// Among strikes with a following frame, how often the next frame
    /// was also a strike.
    pub strike_after_strike: Rate,
    /// Among open frames with a following frame, how often the next
    /// frame was a strike.
    pub strike_after_open: Rate,
    /// Games without a single open frame.
    pub clean_games: Rate,
    /// Splits left on the first ball that were converted to spares.
    pub split_conversion: Rate,
    /// Mean pins knocked down by the first ball, over every frame.
    pub first_ball_average: f64,
}

/// Computes all metrics in one pass over the series collection.
///
/// Pair metrics walk consecutive frame pairs within each game, so a
/// tenth-frame strike or open never counts as the "current" frame of a
/// pair (there is no frame 11 to pair it with).
#[must_use]
pub fn compute_stats(series: &[Series]) -> SeriesStats {
    let mut stats = SeriesStats::default();
    let mut first_ball_pins: u64 = 0;
    let mut first_ball_count: u64 = 0;

    for game in series.iter().flat_map(|s| &s.games) {
        let frames = game.frames();

        for pair in frames.windows(2) {
            let next_is_strike = pair[1].is_strike();
            if pair[0].is_strike() {
                stats.strike_after_strike.record(next_is_strike);
            }
            if pair[0].is_open() {
                stats.strike_after_open.record(next_is_strike);
            }
        }

        stats.clean_games.record(frames.iter().all(Frame::is_clean));

        for frame in frames {
            first_ball_pins += u64::from(frame.first_roll().count());
            first_ball_count += 1;

            if is_split(&frame.standing_after_first()) {
                stats.split_conversion.record(frame.is_spare());
            }
        }
    }

    if first_ball_count > 0 {
        #[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
        {
            stats.first_ball_average = first_ball_pins as f64 / first_ball_count as f64;
        }
    }

    tracing::debug!(
        games = stats.clean_games.total,
        frames = first_ball_count,
        "computed series stats"
    );
    stats
}

/// Coverage of a caller-selected pin combination.
///
/// A frame matches when its first ball knocked down exactly the
/// complement of `targets`, leaving exactly the targeted pins standing.
/// A matching frame is covered when a second ball exists and knocked
/// down exactly the targeted pins. The match is strict equality on pin
/// sets; a leave with extra pins standing beside the targets does not
/// count.
#[must_use]
pub fn coverage(series: &[Series], targets: &BTreeSet<Pin>) -> Rate {
    if targets.is_empty() {
        // The complement of nothing is a full rack, i.e. a strike with no
        // second ball; nothing can ever match.
        return Rate::default();
    }

    let complement: BTreeSet<Pin> = Pin::all().filter(|pin| !targets.contains(pin)).collect();

    let mut rate = Rate::default();
    for frame in series
        .iter()
        .flat_map(|s| &s.games)
        .flat_map(|g| g.frames())
    {
        if *frame.first_roll().pins() == complement {
            let covered = frame
                .second_roll()
                .is_some_and(|second| *second.pins() == *targets);
            rate.record(covered);
        }
    }
    rate
}

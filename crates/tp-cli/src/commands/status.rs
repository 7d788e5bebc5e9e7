//! Status command: backend and store summary.

use std::io::Write;

use anyhow::Result;

use crate::config::{Backend, Config};
use crate::store::SeriesStore;

pub fn run<W: Write>(writer: &mut W, store: &dyn SeriesStore, config: &Config) -> Result<()> {
    writeln!(writer, "Bowling series tracker status")?;
    match config.backend {
        Backend::Local => writeln!(
            writer,
            "Backend: local ({})",
            config.database_path.display()
        )?,
        Backend::Remote => writeln!(
            writer,
            "Backend: remote ({})",
            config.remote_url.as_deref().unwrap_or("unconfigured")
        )?,
    }

    let series = store.fetch_all()?;
    if series.is_empty() {
        writeln!(writer, "No series stored.")?;
        return Ok(());
    }

    let games: usize = series.iter().map(|s| s.games.len()).sum();
    writeln!(writer, "Series: {} ({games} games)", series.len())?;

    // fetch_all is oldest-first, so the last entry is the newest.
    if let Some(latest) = series.last() {
        writeln!(
            writer,
            "Latest: {} ({}, {})",
            latest.name,
            latest.tag,
            latest.created_at.format("%Y-%m-%d %H:%M")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeriesStore as _;

    use insta::assert_snapshot;
    use tp_core::{Series, SeriesId, SeriesTag};

    fn series(id: &str, name: &str, created_at: &str) -> Series {
        Series {
            id: SeriesId::new(id).unwrap(),
            name: name.to_string(),
            tag: SeriesTag::League,
            created_at: created_at.parse().unwrap(),
            games: Vec::new(),
        }
    }

    #[test]
    fn status_reports_latest_series() {
        let temp = tempfile::tempdir().unwrap();
        let db_path = temp.path().join("tenpin.db");
        let mut db = tp_db::Database::open(&db_path).unwrap();
        db.save(&series("s-1", "Opening night", "2025-03-01T19:00:00Z"))
            .unwrap();
        db.save(&series("s-2", "Closing night", "2025-03-08T19:00:00Z"))
            .unwrap();

        let config = Config {
            database_path: db_path.clone(),
            ..Config::default()
        };
        let mut output = Vec::new();
        run(&mut output, &db, &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        let output = output.replace(&db_path.display().to_string(), "[TEMP]/tenpin.db");
        assert_snapshot!(output, @r"
        Bowling series tracker status
        Backend: local ([TEMP]/tenpin.db)
        Series: 2 (0 games)
        Latest: Closing night (league, 2025-03-08 19:00)
        ");
    }

    #[test]
    fn status_reports_empty_store() {
        let db = tp_db::Database::open_in_memory().unwrap();
        let config = Config::default();
        let mut output = Vec::new();
        run(&mut output, &db, &config).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("No series stored."));
    }
}

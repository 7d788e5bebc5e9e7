//! Export command: dump stored series as JSON lines.
//!
//! The output is the same document shape `import` accepts, so a pipe
//! between two configurations moves data between backends.

use std::io::Write;

use anyhow::Result;

use crate::store::SeriesStore;

pub fn run<W: Write>(writer: &mut W, store: &dyn SeriesStore) -> Result<()> {
    for series in store.fetch_all()? {
        writeln!(writer, "{}", serde_json::to_string(&series)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeriesStore as _;

    use tp_core::{Series, SeriesId, SeriesTag};

    #[test]
    fn export_writes_one_line_per_series() {
        let mut db = tp_db::Database::open_in_memory().unwrap();
        for (id, created_at) in [("s-1", "2025-03-01T19:00:00Z"), ("s-2", "2025-03-02T19:00:00Z")] {
            let series = Series {
                id: SeriesId::new(id).unwrap(),
                name: format!("Series {id}"),
                tag: SeriesTag::Other,
                created_at: created_at.parse().unwrap(),
                games: Vec::new(),
            };
            db.save(&series).unwrap();
        }

        let mut output = Vec::new();
        run(&mut output, &db).unwrap();
        let output = String::from_utf8(output).unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Series = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.id.as_str(), "s-1");
    }
}

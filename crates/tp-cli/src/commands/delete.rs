//! Delete command: remove a series by ID.

use std::io::Write;

use anyhow::Result;
use tp_core::SeriesId;

use crate::store::SeriesStore;

pub fn run<W: Write>(writer: &mut W, store: &mut dyn SeriesStore, id: &str) -> Result<()> {
    let id = SeriesId::new(id)?;
    if store.delete(&id)? {
        writeln!(writer, "Deleted series {id}.")?;
    } else {
        writeln!(writer, "No series with ID {id}.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeriesStore as _;

    use tp_core::{Series, SeriesTag};

    #[test]
    fn delete_reports_outcome() {
        let mut db = tp_db::Database::open_in_memory().unwrap();
        db.save(&Series {
            id: SeriesId::new("s-1").unwrap(),
            name: "League night".to_string(),
            tag: SeriesTag::League,
            created_at: "2025-03-01T19:00:00Z".parse().unwrap(),
            games: Vec::new(),
        })
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &mut db, "s-1").unwrap();
        run(&mut output, &mut db, "s-1").unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Deleted series s-1."));
        assert!(output.contains("No series with ID s-1."));
    }

    #[test]
    fn delete_rejects_empty_id() {
        let mut db = tp_db::Database::open_in_memory().unwrap();
        let mut output = Vec::new();
        assert!(run(&mut output, &mut db, "").is_err());
    }
}

//! CSV export of the round log.
//!
//! One row per stored `RoundRecord`, oldest first:
//!
//! ```text
//! round,time,player,computer,result
//! 1,14:02:11,Rock,Scissors,Win
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::core::{Result, RpsError};
use crate::session::{RoundHistory, RoundRecord};

#[derive(Serialize)]
struct CsvRow<'a> {
    round: u64,
    time: String,
    player: &'a str,
    computer: &'a str,
    result: &'a str,
}

impl<'a> From<&'a RoundRecord> for CsvRow<'a> {
    fn from(record: &'a RoundRecord) -> Self {
        Self {
            round: record.number,
            time: record.played_at.format("%H:%M:%S").to_string(),
            player: record.player.name(),
            computer: record.computer.name(),
            result: record.outcome.label(),
        }
    }
}

/// Write the history as CSV. Returns the number of rows written.
///
/// Fails with `RpsError::EmptyHistory` if nothing is recorded.
pub fn write_csv<W: Write>(history: &RoundHistory, writer: W) -> Result<usize> {
    if history.is_empty() {
        return Err(RpsError::EmptyHistory);
    }

    let mut csv = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for record in history.iter() {
        csv.serialize(CsvRow::from(record))?;
        rows += 1;
    }
    csv.flush()?;
    Ok(rows)
}

/// Write the history to a CSV file, replacing it if present.
pub fn export_csv(history: &RoundHistory, path: impl AsRef<Path>) -> Result<usize> {
    if history.is_empty() {
        return Err(RpsError::EmptyHistory);
    }
    let file = std::fs::File::create(path.as_ref())?;
    let rows = write_csv(history, file)?;
    log::info!("exported {} rounds to {}", rows, path.as_ref().display());
    Ok(rows)
}

/// Suggested file name for an export made at `now`.
#[must_use]
pub fn default_file_name(now: DateTime<Utc>) -> String {
    format!("rps_history_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Choice;
    use crate::session::Round;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_write_csv() {
        let mut history = RoundHistory::new(10);
        // 2023-11-14 22:13:20 UTC
        history.push_at(&Round::new(Choice::Rock, Choice::Scissors), at(1_700_000_000));
        history.push_at(&Round::new(Choice::Paper, Choice::Scissors), at(1_700_000_005));

        let mut out = Vec::new();
        let rows = write_csv(&history, &mut out).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "round,time,player,computer,result\n\
             1,22:13:20,Rock,Scissors,Win\n\
             2,22:13:25,Paper,Scissors,Lose\n"
        );
    }

    #[test]
    fn test_empty_history_is_an_error() {
        let history = RoundHistory::new(10);
        let mut out = Vec::new();
        assert!(matches!(write_csv(&history, &mut out), Err(RpsError::EmptyHistory)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name(at(1_700_000_000)),
            "rps_history_20231114_221320.csv"
        );
    }
}

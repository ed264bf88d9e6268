// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Column projection and file output (raw JSON dump and CSV).

use crate::error::Result;
use crate::models::{cell_text, ActivityRecord, ProjectedRecord, ABSENT, OUTPUT_COLUMNS};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Restrict `activity` to `columns`, in that order.
///
/// Columns the activity lacks get [`ABSENT`]; this never fails.
pub fn select_columns(activity: &ActivityRecord, columns: &[&str]) -> ProjectedRecord {
    ProjectedRecord::new(
        columns
            .iter()
            .map(|column| {
                let value = activity.get(*column).cloned().unwrap_or(ABSENT);
                (column.to_string(), value)
            })
            .collect(),
    )
}

/// Pretty-print the unfiltered activities to `path`, replacing any old file.
pub fn write_raw_dump(path: &Path, activities: &[ActivityRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, activities)?;
    writer.flush()?;

    tracing::info!(path = %path.display(), count = activities.len(), "Wrote raw activity dump");
    Ok(())
}

/// Write `records` as CSV to `path`, replacing any old file.
///
/// The header comes from the first record's columns, or [`OUTPUT_COLUMNS`]
/// when there are no records.
pub fn write_csv(path: &Path, records: &[ProjectedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(&mut writer, records)?;
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = records.len(), "Wrote CSV");
    Ok(())
}

/// Write header and rows to any CSV writer.
pub fn write_records<W: Write>(
    writer: &mut csv::Writer<W>,
    records: &[ProjectedRecord],
) -> Result<()> {
    match records.first() {
        Some(first) => writer.write_record(first.keys())?,
        None => writer.write_record(OUTPUT_COLUMNS)?,
    }

    for record in records {
        writer.write_record(record.values().map(cell_text))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> ActivityRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_select_columns_is_total() {
        let activity = record(json!({"type": "Run", "name": "Lunch Run", "extra": 1}));
        let projected = select_columns(&activity, &["name", "calories", "type"]);

        assert_eq!(
            projected.keys().collect::<Vec<_>>(),
            vec!["name", "calories", "type"]
        );
        assert_eq!(projected.get("name"), Some(&json!("Lunch Run")));
        assert_eq!(projected.get("calories"), Some(&ABSENT));
        assert_eq!(projected.get("extra"), None);
    }

    #[test]
    fn test_select_columns_empty_record() {
        let projected = select_columns(&ActivityRecord::new(), OUTPUT_COLUMNS);
        assert_eq!(projected.len(), OUTPUT_COLUMNS.len());
        assert!(projected.values().all(Value::is_null));
    }

    #[test]
    fn test_csv_quotes_delimiters() {
        let activity = record(json!({"name": "Run, then coffee", "distance_mi": 3.1}));
        let projected = select_columns(&activity, &["name", "distance_mi", "gear_name"]);

        let mut writer = csv::Writer::from_writer(vec![]);
        write_records(&mut writer, &[projected]).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(out, "name,distance_mi,gear_name\n\"Run, then coffee\",3.1,\n");
    }

    #[test]
    fn test_csv_header_without_records() {
        let mut writer = csv::Writer::from_writer(vec![]);
        write_records(&mut writer, &[]).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(out, format!("{}\n", OUTPUT_COLUMNS.join(",")));
    }
}

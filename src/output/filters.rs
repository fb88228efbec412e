// src/output/filters.rs
//! Filter record export (flat tabular file)

use std::path::Path;

use crate::error::Result;
use crate::gpo::extract::FilterRecord;

/// Write collected filter records as CSV with a fixed header
pub fn write_filters(path: &Path, records: &[FilterRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Name", "ActionType", "Filter"])?;
    for record in records {
        writer.write_record([
            record.name.as_str(),
            record.action_type.as_str(),
            record.filter.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_round_trip_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filters.csv");
        let records = vec![FilterRecord {
            name: r"\\srv\share (Data)".to_string(),
            action_type: "Net Drive".to_string(),
            filter: "<Filters><FilterRunOnce/></Filters>".to_string(),
        }];
        write_filters(&path, &records).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "Name,ActionType,Filter");
        let row = lines.next().unwrap();
        assert!(row.contains("Net Drive"));
        assert!(row.contains("FilterRunOnce"));
    }
}

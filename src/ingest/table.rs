//! Reader for the delimited activity table.
//!
//! One row per entity: the entity name, then one value per timepoint column.

use crate::error::{PathwayError, Result};
use crate::store::ActivityTable;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub delimiter: u8,
    /// Skip the first row.
    pub has_headers: bool,
    /// Strip whitespace around names and values.
    pub trim: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { delimiter: b',', has_headers: false, trim: false }
    }
}

pub fn read_activity_table<R: Read>(reader: R, options: &TableOptions) -> Result<ActivityTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .flexible(true)
        .trim(if options.trim { csv::Trim::All } else { csv::Trim::None })
        .from_reader(reader);

    let mut table = ActivityTable::new();
    let mut rows = 0usize;
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let mut fields = record.iter();
        let entity = match fields.next() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(PathwayError::MissingEntity { line }),
        };

        for (timepoint, raw) in fields.enumerate() {
            let value = parse_value(raw).ok_or_else(|| PathwayError::InvalidActivity {
                line,
                column: timepoint + 1,
                value: raw.to_string(),
            })?;
            table.insert(timepoint, entity, value);
        }
        rows += 1;
    }

    debug!(
        "activity table: {} rows, {} timepoints, range {:?}",
        rows,
        table.timepoint_count(),
        table.range()
    );
    Ok(table)
}

pub fn load_activity_table(path: impl AsRef<Path>, options: &TableOptions) -> Result<ActivityTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PathwayError::io(path, e))?;
    read_activity_table(file, options)
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

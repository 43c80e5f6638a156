//! Wide-to-long reshaping of the per-volume appearance table.
//!
//! ### Workflow
//! 1. `read_wide_rows` checks the header once, then turns every CSV record
//!    into a `WideRow` holding the name plus one raw cell per volume, in
//!    canonical volume order.
//! 2. `reshape` fans each row out into nine `AppearanceRecord`s.
//! 3. `write_appearances` persists the long table with a fixed header.
//!
//! Any missing column aborts the run; nothing is skipped.

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{
    constants::{APPEARANCE_HEADER, NAME_COLUMN, VOLUME_COLUMNS},
    error::{MissingColumnError, Result},
};

// --- Wide rows ---

/// Positions of the required columns inside the input header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    name: usize,
    volumes: [usize; VOLUME_COLUMNS.len()],
}

impl ColumnIndex {
    /// Locate `Name` and every volume column; extra columns are ignored.
    pub fn from_headers(headers: &StringRecord) -> std::result::Result<Self, MissingColumnError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| MissingColumnError::new(column))
        };

        let name = find(NAME_COLUMN)?;
        let mut volumes = [0usize; VOLUME_COLUMNS.len()];
        for (slot, volume) in volumes.iter_mut().zip(VOLUME_COLUMNS) {
            *slot = find(volume)?;
        }
        Ok(Self { name, volumes })
    }
}

/// One character and its raw appearance value per volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideRow {
    pub name: String,
    /// Indexed like `VOLUME_COLUMNS`.
    pub volumes: [String; VOLUME_COLUMNS.len()],
}

impl WideRow {
    #[must_use]
    pub fn new(name: impl Into<String>, volumes: [String; VOLUME_COLUMNS.len()]) -> Self {
        Self {
            name: name.into(),
            volumes,
        }
    }

    /// Validate a record against the header layout and copy out its fields.
    pub fn from_record(
        record: &StringRecord,
        columns: &ColumnIndex,
    ) -> std::result::Result<Self, MissingColumnError> {
        let field = |index: usize, column: &str| {
            record
                .get(index)
                .map(str::to_owned)
                .ok_or_else(|| MissingColumnError::new(column))
        };

        let name = field(columns.name, NAME_COLUMN)?;
        let mut volumes: [String; VOLUME_COLUMNS.len()] = Default::default();
        for ((value, &index), column) in volumes.iter_mut().zip(&columns.volumes).zip(VOLUME_COLUMNS)
        {
            *value = field(index, column)?;
        }
        Ok(Self { name, volumes })
    }
}

/// Parse and validate every wide row.  Fails on the first bad row.
pub fn read_wide_rows<R: Read>(src: R) -> Result<Vec<WideRow>> {
    // Flexible so short rows reach `from_record` and name the absent column.
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(src);
    let columns = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(WideRow::from_record(&record?, &columns)?);
    }
    Ok(rows)
}

// --- Long records ---

/// One (character, volume) observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceRecord {
    pub name: String,
    pub volume: String,
    pub appearance_type: String,
}

impl AppearanceRecord {
    pub fn new(
        name: impl Into<String>,
        volume: impl Into<String>,
        appearance_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            volume: volume.into(),
            appearance_type: appearance_type.into(),
        }
    }
}

/// Long-format table; order is source row order × canonical volume order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppearanceTable {
    records: Vec<AppearanceRecord>,
}

impl AppearanceTable {
    #[must_use]
    pub fn records(&self) -> &[AppearanceRecord] {
        &self.records
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, AppearanceRecord> {
        self.records.iter()
    }
}

impl From<Vec<AppearanceRecord>> for AppearanceTable {
    fn from(records: Vec<AppearanceRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<AppearanceRecord> for AppearanceTable {
    fn from_iter<I: IntoIterator<Item = AppearanceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AppearanceTable {
    type Item = &'a AppearanceRecord;
    type IntoIter = std::slice::Iter<'a, AppearanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Fan wide rows out into one record per (character, volume).
#[must_use]
pub fn reshape(rows: &[WideRow]) -> AppearanceTable {
    rows.iter()
        .flat_map(|row| {
            VOLUME_COLUMNS
                .iter()
                .zip(&row.volumes)
                .map(|(volume, value)| AppearanceRecord::new(&row.name, *volume, value))
        })
        .collect()
}

/// Write the long table with header `name,volume,appearance_type`.
pub fn write_appearances<W: Write>(dst: W, table: &AppearanceTable) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(dst);
    wtr.write_record(APPEARANCE_HEADER)?;
    for record in table {
        wtr.write_record([
            record.name.as_str(),
            record.volume.as_str(),
            record.appearance_type.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Load a long table written by `write_appearances`.
pub fn read_appearances<R: Read>(src: R) -> Result<AppearanceTable> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(src);
    let headers = rdr.headers()?;
    if let Some(missing) = APPEARANCE_HEADER
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(MissingColumnError::new(*missing).into());
    }

    let mut records: Vec<AppearanceRecord> = Vec::new();
    for record in rdr.deserialize() {
        records.push(record?);
    }
    Ok(AppearanceTable::from(records))
}

pub fn read_appearances_from_path(path: &Path) -> Result<AppearanceTable> {
    read_appearances(File::open(path)?)
}

/// Read, validate and reshape `input`, then write the long table to
/// `output`.  The output file is only created once every row validated.
pub fn pre_process(input: &Path, output: &Path) -> Result<AppearanceTable> {
    let rows = read_wide_rows(File::open(input)?)?;
    let table = reshape(&rows);
    debug!(
        "reshaped {} wide rows into {} records",
        rows.len(),
        table.len()
    );

    write_appearances(File::create(output)?, &table)?;
    Ok(table)
}

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::panic;
use std::path::Path;

use calamine::{Data, Range, Reader, Xls, Xlsx};
use serde_json::Value;
use tracing::debug;

use crate::error::LoadError;
use crate::state::data_model::{self, Dataset, Row, TableData};

/// File extensions offered by the open dialog.
pub const WORKBOOK_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

const EMPTY_HEADER: &str = "__EMPTY";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

pub fn load_workbook(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = fs::read(path).map_err(|err| LoadError::Read(err.to_string()))?;
    decode_workbook(&bytes)
}

pub async fn read_workbook_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path)
        .await
        .map_err(|err| LoadError::Read(err.to_string()))
}

/// Decodes the first sheet of an xlsx or xls workbook. The first row holds
/// the column names; every following non-blank row becomes a [`Row`].
pub fn decode_workbook(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let dataset = match panic::catch_unwind(|| first_sheet(bytes)) {
        Ok(range) => sheet_to_dataset(&range?),
        Err(_) => return Err(LoadError::Parse("decoder panicked".to_string())),
    };

    if dataset.is_empty() {
        return Err(LoadError::EmptyData);
    }
    debug!(
        rows = dataset.len(),
        headers = dataset.headers().len(),
        "decoded first sheet"
    );
    Ok(dataset)
}

fn first_sheet(bytes: &[u8]) -> Result<Range<Data>, LoadError> {
    let cursor = Cursor::new(bytes);
    if bytes.starts_with(ZIP_MAGIC) {
        let workbook: Xlsx<_> = Xlsx::new(cursor).map_err(parse_error)?;
        first_range::<Cursor<&[u8]>, _>(workbook)
    } else if bytes.starts_with(OLE_MAGIC) {
        let workbook: Xls<_> = Xls::new(cursor).map_err(parse_error)?;
        first_range::<Cursor<&[u8]>, _>(workbook)
    } else {
        Err(LoadError::Parse("not an xlsx or xls workbook".to_string()))
    }
}

fn first_range<RS, R>(mut workbook: R) -> Result<Range<Data>, LoadError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: fmt::Display,
{
    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::Parse("workbook has no sheets".to_string()))?
        .map_err(parse_error)
}

fn parse_error(err: impl fmt::Display) -> LoadError {
    LoadError::Parse(err.to_string())
}

fn sheet_to_dataset(range: &Range<Data>) -> Dataset {
    let mut rows = range.rows();
    let Some(header_cells) = rows.next() else {
        return Dataset::default();
    };

    let columns = header_names(header_cells);
    let data: TableData = rows.filter_map(|cells| record(&columns, cells)).collect();
    Dataset::from_rows(&columns, data)
}

/// Blank header cells become `__EMPTY`; repeated names get `_1`, `_2`, ...
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    cells
        .iter()
        .map(|cell| {
            let base = match cell_value(cell) {
                Some(value) => data_model::display_value(&value),
                None => String::new(),
            };
            let base = if base.is_empty() {
                EMPTY_HEADER.to_string()
            } else {
                base
            };
            unique_header(base, &mut counts)
        })
        .collect()
}

fn unique_header(base: String, counts: &mut HashMap<String, usize>) -> String {
    let Some(mut counter) = counts.get(&base).copied() else {
        counts.insert(base.clone(), 1);
        return base;
    };

    let name = loop {
        let candidate = format!("{base}_{counter}");
        counter += 1;
        if !counts.contains_key(&candidate) {
            break candidate;
        }
    };
    counts.insert(base, counter);
    counts.insert(name.clone(), 1);
    name
}

fn record(columns: &[String], cells: &[Data]) -> Option<Row> {
    let row: Row = columns
        .iter()
        .zip(cells)
        .filter_map(|(column, cell)| cell_value(cell).map(|value| (column.clone(), value)))
        .collect();
    (!row.is_empty()).then_some(row)
}

fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty => None,
        Data::Int(i) => Some(Value::Number((*i).into())),
        Data::Float(f) => Some(data_model::number_value(*f)),
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(dt) => Some(data_model::number_value(dt.as_f64())),
        other => Some(Value::String(other.to_string())),
    }
}

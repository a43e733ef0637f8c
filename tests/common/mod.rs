#![allow(dead_code)]

use std::collections::BTreeMap;

use rust_xlsxwriter::{Format, Workbook};
use serde_json::Value;

use xlsheet::state::data_model::{Dataset, Row};

pub enum Cell {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    /// Excel serial number shown with a date/time number format.
    DateTime(f64),
    Blank,
}

/// Builds an xlsx workbook in memory with one sheet holding `rows`.
pub fn workbook_bytes(rows: &[Vec<Cell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_rows(sheet, rows);
    workbook.save_to_buffer().unwrap()
}

/// Builds a workbook whose first sheet holds `first` and second holds `second`.
pub fn two_sheet_workbook_bytes(first: &[Vec<Cell>], second: &[Vec<Cell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    write_rows(workbook.add_worksheet(), first);
    write_rows(workbook.add_worksheet(), second);
    workbook.save_to_buffer().unwrap()
}

fn write_rows(sheet: &mut rust_xlsxwriter::Worksheet, rows: &[Vec<Cell>]) {
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm");
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                Cell::Text(text) => {
                    sheet.write_string(r, c, *text).unwrap();
                }
                Cell::Number(number) => {
                    sheet.write_number(r, c, *number).unwrap();
                }
                Cell::Bool(flag) => {
                    sheet.write_boolean(r, c, *flag).unwrap();
                }
                Cell::DateTime(serial) => {
                    sheet
                        .write_number_with_format(r, c, *serial, &date_format)
                        .unwrap();
                }
                Cell::Blank => {}
            }
        }
    }
}

pub fn row(cells: &[(&str, Value)]) -> Row {
    cells
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect::<BTreeMap<_, _>>()
}

pub fn dataset(headers: &[&str], rows: Vec<Row>) -> Dataset {
    Dataset::new(headers.iter().map(|h| h.to_string()).collect(), rows)
}

pub fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

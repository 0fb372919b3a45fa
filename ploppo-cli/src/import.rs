use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use serde::Serialize;
use thiserror::Error;

use ploppo_core::models::{Draw, DrawTable};

pub const REQUIRED_COLUMNS: [&str; 6] = ["Num1", "Num2", "Num3", "Num4", "Num5", "Num6"];

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("unsupported file format {0:?} (expected .csv, .xlsx, .xls or .ods)")]
    UnsupportedFormat(String),

    #[error("dataset must contain columns Num1 to Num6 (missing: {})", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("workbook has no worksheet")]
    EmptyWorkbook,

    #[error("cannot read workbook: {0}")]
    Workbook(#[from] calamine::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Csv,
    Spreadsheet,
}

/// A row left out of the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedRow {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ImportResult {
    pub table: DrawTable,
    pub total_records: usize,
    pub malformed: Vec<MalformedRow>,
}

fn detect_format(path: &Path) -> Result<SourceFormat, ImportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => Ok(SourceFormat::Csv),
        "xlsx" | "xlsm" | "xls" | "ods" => Ok(SourceFormat::Spreadsheet),
        _ => Err(ImportError::UnsupportedFormat(ext)),
    }
}

/// Loads a draw table from a CSV or spreadsheet file. Rows that cannot be
/// read as six numbers are excluded and reported in `malformed`.
pub fn load_draws(path: &Path) -> Result<ImportResult> {
    let result = match detect_format(path)? {
        SourceFormat::Csv => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Cannot open {:?}", path))?;
            read_csv(file).with_context(|| format!("Cannot read CSV {:?}", path))?
        }
        SourceFormat::Spreadsheet => read_spreadsheet(path)
            .with_context(|| format!("Cannot read spreadsheet {:?}", path))?,
    };

    log::info!(
        "Loaded {} draws from {:?} ({} rows, {} malformed)",
        result.table.len(),
        path,
        result.total_records,
        result.malformed.len()
    );
    Ok(result)
}

pub fn read_csv<R: Read>(source: R) -> Result<ImportResult> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let header: Vec<String> = reader
        .headers()
        .context("Cannot read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();
    let positions = column_positions(&header)?;

    let mut result = ImportResult::default();
    for (idx, record_result) in reader.records().enumerate() {
        result.total_records += 1;
        let fallback_line = idx + 2;
        match record_result {
            Ok(record) => {
                let line = record
                    .position()
                    .map_or(fallback_line, |p| p.line() as usize);
                let cells: Vec<&str> = record.iter().collect();
                push_row(&mut result, line, parse_row(&cells, &positions));
            }
            Err(e) => {
                let line = e.position().map_or(fallback_line, |p| p.line() as usize);
                push_row(&mut result, line, Err(e.to_string()));
            }
        }
    }
    Ok(result)
}

fn read_spreadsheet(path: &Path) -> Result<ImportResult, ImportError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::EmptyWorkbook)??;
    read_range(&range)
}

/// First row of the range is the header; lines are numbered from the
/// range's position in the sheet.
fn read_range(range: &Range<Data>) -> Result<ImportResult, ImportError> {
    let first_line = range.start().map_or(1, |(row, _)| row as usize + 1);

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let positions = column_positions(&header)?;

    let mut result = ImportResult::default();
    for (idx, cells) in rows.enumerate() {
        // blank trailing rows inside the used range
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        result.total_records += 1;
        let texts: Vec<String> = cells.iter().map(cell_text).collect();
        let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
        push_row(&mut result, first_line + idx + 1, parse_row(&texts, &positions));
    }
    Ok(result)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64 => {
            (*f as u64).to_string()
        }
        other => other.to_string().trim().to_string(),
    }
}

fn column_positions(header: &[String]) -> Result<[usize; 6], ImportError> {
    let mut positions = [0usize; 6];
    let mut missing = Vec::new();
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        match header.iter().position(|h| h.trim() == *name) {
            Some(pos) => positions[slot] = pos,
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }
    Ok(positions)
}

fn parse_row(cells: &[&str], positions: &[usize; 6]) -> Result<Vec<u32>, String> {
    positions
        .iter()
        .zip(REQUIRED_COLUMNS)
        .map(|(&pos, column)| {
            let cell = cells.get(pos).map(|c| c.trim()).unwrap_or_default();
            parse_number(cell).ok_or_else(|| {
                if cell.is_empty() {
                    format!("missing value in {column}")
                } else {
                    format!("'{cell}' in {column} is not a draw number")
                }
            })
        })
        .collect()
}

fn parse_number(cell: &str) -> Option<u32> {
    if let Ok(n) = cell.parse::<u32>() {
        return Some(n);
    }
    // "12.0" as written by spreadsheet exports
    let f = cell.parse::<f64>().ok()?;
    (f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64).then_some(f as u32)
}

fn push_row(result: &mut ImportResult, line: usize, row: Result<Vec<u32>, String>) {
    match row {
        Ok(numbers) => result.table.push(Draw::with_line(line, numbers)),
        Err(reason) => {
            log::warn!("Skipping line {line}: {reason}");
            result.malformed.push(MalformedRow { line, reason });
        }
    }
}

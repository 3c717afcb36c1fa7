// Primitives for reading Excel workbooks.

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use justicia_records::{rows_from_records, source_digest};

use crate::datasets::*;

pub fn read_excel_source(path: &Path, worksheet_name: Option<&str>) -> PubResult<SourceData> {
    let wrange = get_range(path, worksheet_name)?;
    let records: Vec<Vec<String>> = wrange
        .rows()
        .enumerate()
        .map(|(idx, row)| row.iter().map(|cell| read_cell(idx, cell)).collect())
        .collect();
    let digest = source_digest(&records_text(&records));
    let rows = rows_from_records(records);
    debug!(
        "read_excel_source: {:?}: {} rows",
        simplify_file_name(path),
        rows.len()
    );
    Ok(SourceData { rows, digest })
}

fn get_range(path: &Path, worksheet_name: Option<&str>) -> PubResult<Range<DataType>> {
    let p = path.display().to_string();
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path: p.clone() })?;
    let wrange = match worksheet_name {
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu {
                name,
                path: p.clone(),
            })?,
        None => workbook
            .worksheet_range_at(0)
            .context(MissingWorksheetSnafu {
                name: "<first>",
                path: p.clone(),
            })?,
    }
    .context(OpeningExcelSnafu { path: p })?;
    Ok(wrange)
}

// Whole numbers come out of Excel as floats.
fn read_cell(lineno: usize, cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(b) => b.to_string(),
        DataType::Empty => String::new(),
        _ => {
            warn!(
                "read_cell: line {}: could not understand cell {:?}, reading it as blank",
                lineno, cell
            );
            String::new()
        }
    }
}

// A stable text rendering of the cells, for the digest.
fn records_text(records: &[Vec<String>]) -> String {
    records
        .iter()
        .map(|rec| rec.join("\t"))
        .collect::<Vec<String>>()
        .join("\n")
}

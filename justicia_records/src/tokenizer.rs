// Primitives for turning the exported spreadsheets into rows.

use log::debug;
use std::collections::HashMap;

/// One data line of a source file, keyed by the header names.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SourceRow {
    /// Position of the line among the non-empty lines of the file. The header
    /// is line 0, so data rows start at 1.
    pub index: usize,
    fields: HashMap<String, String>,
}

impl SourceRow {
    pub fn new(index: usize, fields: HashMap<String, String>) -> SourceRow {
        SourceRow { index, fields }
    }

    /// The raw value of a column, or the empty string if the column does not exist.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(|s| s.as_str()).unwrap_or("")
    }
}

/// Splits one line of text into fields.
///
/// Commas inside double quotes do not split, and a doubled quote inside quotes
/// stands for one quote character. Every field is trimmed once it is complete.
/// An unbalanced quote keeps the rest of the line inside the current field.
///
/// ```
/// use justicia_records::parse_csv_line;
///
/// assert_eq!(parse_csv_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
/// ```
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(trim_field(&current).to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(trim_field(&current).to_string());
    fields
}

// Spreadsheet exports often start with a byte order mark.
fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Reads the full text of a source file into rows.
///
/// Blank lines are dropped before anything is counted. The first remaining line
/// holds the headers. Lines with fewer fields than headers are dropped but keep
/// their index, so the indices of the following rows do not move.
pub fn parse_rows(text: &str) -> Vec<SourceRow> {
    let records = text
        .split('\n')
        .filter(|line| !trim_field(line).is_empty())
        .map(parse_csv_line);
    build_rows(records)
}

/// Same as `parse_rows`, for sources that are already split into cells
/// (spreadsheets). Records in which every cell is blank are dropped first.
pub fn rows_from_records(records: Vec<Vec<String>>) -> Vec<SourceRow> {
    let records = records
        .into_iter()
        .filter(|rec| rec.iter().any(|cell| !trim_field(cell).is_empty()))
        .map(|rec| {
            rec.into_iter()
                .map(|cell| trim_field(&cell).to_string())
                .collect::<Vec<String>>()
        });
    build_rows(records)
}

fn build_rows<I>(mut records: I) -> Vec<SourceRow>
where
    I: Iterator<Item = Vec<String>>,
{
    let headers = match records.next() {
        Some(h) => h,
        None => return vec![],
    };
    debug!("build_rows: headers: {:?}", headers);

    let mut rows: Vec<SourceRow> = Vec::new();
    for (idx, values) in records.enumerate() {
        let index = idx + 1;
        if values.len() < headers.len() {
            debug!(
                "build_rows: dropping row {}: {} fields for {} headers",
                index,
                values.len(),
                headers.len()
            );
            continue;
        }
        let fields: HashMap<String, String> = headers.iter().cloned().zip(values).collect();
        rows.push(SourceRow::new(index, fields));
    }
    rows
}

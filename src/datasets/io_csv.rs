// Primitives for reading CSV exports.

use justicia_records::{parse_rows, source_digest};

use crate::datasets::*;

pub fn read_csv_source(path: &Path) -> PubResult<SourceData> {
    let contents = fs::read_to_string(path).context(OpeningSourceSnafu {
        path: path.display().to_string(),
    })?;
    let rows = parse_rows(&contents);
    debug!(
        "read_csv_source: {:?}: {} rows",
        simplify_file_name(path),
        rows.len()
    );
    Ok(SourceData {
        rows,
        digest: source_digest(&contents),
    })
}

/*!
Normalization of the Justiciapedia spreadsheets into typed records.

The candidates, institutions and commissions of the judicial-selection process
are kept by hand in spreadsheets and exported as CSV. This crate turns that
text into records that the site can display, search and aggregate.

The parsers never fail: rows that cannot be read are dropped, missing values
get a default and numbers that cannot be read are 0.

```
use justicia_records::*;

let text = "id,nombre,cargo,estado\n,Ana López,,Inactivo\n";
let candidates = parse_candidates(text);

assert_eq!(candidates[0].id, "candidate-1");
assert_eq!(candidates[0].role, "Aspirante");
assert_eq!(candidates[0].status, CandidateStatus::Inactivo);
```

See the [manual] for the columns read from each file.
*/

mod candidates;
mod commissions;
pub mod defaults;
mod institutions;
pub mod manual;
mod records;
mod search;
mod summary;
mod tokenizer;

pub use crate::candidates::{candidates_from_rows, parse_candidates, read_status, read_years};
pub use crate::commissions::{commissions_from_rows, parse_commissions};
pub use crate::institutions::{institutions_from_rows, parse_institutions};
pub use crate::records::*;
pub use crate::search::{search_candidates, CandidateQuery};
pub use crate::summary::{source_digest, summarize, DatasetSummary, Snapshot, SourceDigests};
pub use crate::tokenizer::{parse_csv_line, parse_rows, rows_from_records, SourceRow};

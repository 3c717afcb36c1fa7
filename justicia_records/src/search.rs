use crate::records::{CandidateRecord, CandidateStatus};

/// A filter over the candidates, as offered by the search page.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct CandidateQuery {
    /// Free text, matched case-insensitively against the name, the role and
    /// the institution. Blank matches everything.
    pub term: Option<String>,
    pub status: Option<CandidateStatus>,
}

impl CandidateQuery {
    pub fn new(term: Option<String>, status: Option<CandidateStatus>) -> CandidateQuery {
        CandidateQuery { term, status }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.needle().is_none()
    }

    fn needle(&self) -> Option<String> {
        self.term
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
    }

    pub fn matches(&self, c: &CandidateRecord) -> bool {
        if let Some(status) = self.status {
            if c.status != status {
                return false;
            }
        }
        match self.needle() {
            Some(needle) => [&c.name, &c.role, &c.institution]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle)),
            None => true,
        }
    }
}

/// The candidates matching the query, in their original order.
pub fn search_candidates<'a>(
    candidates: &'a [CandidateRecord],
    query: &CandidateQuery,
) -> Vec<&'a CandidateRecord> {
    candidates.iter().filter(|c| query.matches(c)).collect()
}

use log::info;

use crate::records::*;

/// Counts shown on the dashboard.
///
/// The grouped counts are in order of first appearance in the data.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DatasetSummary {
    pub candidates: usize,
    pub institutions: usize,
    pub commissions: usize,
    pub candidates_by_status: Vec<(String, usize)>,
    pub candidates_by_institution: Vec<(String, usize)>,
    pub institutions_by_type: Vec<(String, usize)>,
    pub documents: usize,
}

/// SHA-256 of each source, when that source was loaded.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct SourceDigests {
    pub candidates: Option<String>,
    pub institutions: Option<String>,
    pub commissions: Option<String>,
}

/// Everything read from one load of the sources.
///
/// There is no way to update a snapshot: reading the sources again is the
/// only way to refresh it.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Snapshot {
    pub candidates: Vec<CandidateRecord>,
    pub institutions: Vec<InstitutionData>,
    pub commissions: Vec<CommissionData>,
    pub digests: SourceDigests,
}

impl Snapshot {
    pub fn summary(&self) -> DatasetSummary {
        summarize(&self.candidates, &self.institutions, &self.commissions)
    }
}

pub fn source_digest(text: &str) -> String {
    sha256::digest(text)
}

pub fn summarize(
    candidates: &[CandidateRecord],
    institutions: &[InstitutionData],
    commissions: &[CommissionData],
) -> DatasetSummary {
    let res = DatasetSummary {
        candidates: candidates.len(),
        institutions: institutions.len(),
        commissions: commissions.len(),
        candidates_by_status: tally(candidates.iter().map(|c| c.status.as_str())),
        candidates_by_institution: tally(candidates.iter().map(|c| c.institution.as_str())),
        institutions_by_type: tally(institutions.iter().map(|i| i.kind.as_str())),
        documents: commissions.iter().map(|c| c.documents.len()).sum(),
    };
    info!(
        "summarize: {} candidates, {} institutions, {} commissions",
        res.candidates, res.institutions, res.commissions
    );
    res
}

fn tally<'a, I: Iterator<Item = &'a str>>(keys: I) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for k in keys {
        match counts.iter_mut().find(|(name, _)| name == k) {
            Some((_, n)) => *n += 1,
            None => counts.push((k.to_string(), 1)),
        }
    }
    counts
}

use log::debug;

use crate::defaults::*;
use crate::records::*;
use crate::tokenizer::{parse_rows, SourceRow};

/// Reads the commissions file.
pub fn parse_commissions(text: &str) -> Vec<CommissionData> {
    commissions_from_rows(&parse_rows(text))
}

pub fn commissions_from_rows(rows: &[SourceRow]) -> Vec<CommissionData> {
    rows.iter().map(build_commission).collect()
}

fn build_commission(row: &SourceRow) -> CommissionData {
    let d = &COMMISSION_DEFAULTS;
    let c = CommissionData {
        id: d.resolve("id", row),
        name: d.resolve("name", row),
        institution: d.resolve("institution", row),
        purpose: d.resolve("purpose", row),
        description: d.resolve("description", row),
        start_date: d.resolve("startDate", row),
        end_date: d.resolve("endDate", row),
        members: members(&d.resolve("members", row)),
        requirements: split_list(&d.resolve("requirements", row)),
        documents: documents(
            &d.resolve("infografiaUrl", row),
            &d.resolve("cronogramaUrl", row),
        ),
        phases: vec![Phase {
            name: PHASE_NAME.to_string(),
            status: PHASE_STATUS.to_string(),
            description: PHASE_DESCRIPTION.to_string(),
        }],
        status: d.resolve("status", row),
        candidates_count: 0,
    };
    debug!(
        "build_commission: row {}: {:?} with {} members",
        row.index,
        c.id,
        c.members.len()
    );
    c
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

// The sheet only lists names: the name doubles as the institution.
fn members(raw: &str) -> Vec<Member> {
    split_list(raw)
        .into_iter()
        .map(|name| Member {
            institution: name.clone(),
            name,
            role: MEMBER_ROLE.to_string(),
        })
        .collect()
}

fn documents(infografia_url: &str, cronograma_url: &str) -> Vec<Document> {
    [
        (DocumentKind::Infografia, infografia_url),
        (DocumentKind::Cronograma, cronograma_url),
    ]
    .iter()
    .filter(|(_, url)| !url.is_empty())
    .map(|(kind, url)| Document {
        kind: *kind,
        title: kind.title().to_string(),
        url: url.to_string(),
    })
    .collect()
}

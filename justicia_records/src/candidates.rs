use log::debug;

use crate::defaults::CANDIDATE_DEFAULTS;
use crate::records::*;
use crate::tokenizer::{parse_rows, SourceRow};

/// Reads the candidates file.
pub fn parse_candidates(text: &str) -> Vec<CandidateRecord> {
    candidates_from_rows(&parse_rows(text))
}

pub fn candidates_from_rows(rows: &[SourceRow]) -> Vec<CandidateRecord> {
    rows.iter().map(build_candidate).collect()
}

fn build_candidate(row: &SourceRow) -> CandidateRecord {
    let d = &CANDIDATE_DEFAULTS;
    let role = d.resolve("role", row);
    let institution = d.resolve("institution", row);
    let description = d.resolve("description", row);
    let academic_experience = d.resolve("academicExperience", row);
    let professional_experience = d.resolve("professionalExperience", row);

    let education = education_entries(&academic_experience);
    let mut experience = experience_entries(&professional_experience);
    if experience.is_empty() {
        experience.push(Experience {
            position: role.clone(),
            institution: institution.clone(),
            period: String::new(),
            description: description.clone(),
        });
    }

    let c = CandidateRecord {
        id: d.resolve("id", row),
        name: d.resolve("name", row),
        role,
        institution,
        image_url: d.resolve("imageUrl", row),
        status: read_status(&d.resolve("status", row)),
        years_of_experience: read_years(&d.resolve("yearsOfExperience", row)),
        description,
        education,
        experience,
        academic_experience,
        professional_experience,
        email: d.resolve("email", row),
        phone: d.resolve("phone", row),
    };
    debug!("build_candidate: row {}: {:?}", row.index, c.id);
    c
}

/// Only the exact labels are recognized. Everything else counts as active.
pub fn read_status(raw: &str) -> CandidateStatus {
    match raw {
        "Activo" => CandidateStatus::Activo,
        "Inactivo" => CandidateStatus::Inactivo,
        _ => CandidateStatus::Activo,
    }
}

/// Leading integer of the value, like a spreadsheet would read "12 años".
/// An optional sign is kept. Anything unreadable is 0.
pub fn read_years(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, s) = match s.chars().next() {
        Some('-') => (true, &s[1..]),
        Some('+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) => 0,
    }
}

fn education_entries(academic: &str) -> Vec<Education> {
    if academic.is_empty() {
        return vec![];
    }
    let first_line = academic.split('\n').next().unwrap_or("").trim();
    vec![Education {
        degree: first_line.to_string(),
        institution: String::new(),
        year: String::new(),
    }]
}

fn experience_entries(professional: &str) -> Vec<Experience> {
    professional
        .split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (position, institution) = match line.split_once('-') {
                Some((left, right)) => (left.trim(), right.trim()),
                None => (line, ""),
            };
            Experience {
                position: position.to_string(),
                institution: institution.to_string(),
                period: String::new(),
                description: line.to_string(),
            }
        })
        .collect()
}

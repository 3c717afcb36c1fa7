// ********* Output data structures ***********

use serde::Serialize;
use std::fmt::Display;

/// Standing of a candidate in the selection process.
///
/// Only `Activo` and `Inactivo` are ever read from the spreadsheets. `Retirado`
/// is kept for consumers that set it from other sources.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize)]
pub enum CandidateStatus {
    Activo,
    Inactivo,
    Retirado,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Activo => "Activo",
            CandidateStatus::Inactivo => "Inactivo",
            CandidateStatus::Retirado => "Retirado",
        }
    }
}

impl Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Experience {
    pub position: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct CandidateRecord {
    pub id: String,
    pub name: String,
    pub role: String,
    pub institution: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub status: CandidateStatus,
    #[serde(rename = "yearsOfExperience")]
    pub years_of_experience: i64,
    pub description: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    // Verbatim copies of the source text, for display.
    #[serde(rename = "academicExperience")]
    pub academic_experience: String,
    #[serde(rename = "professionalExperience")]
    pub professional_experience: String,
    pub email: String,
    pub phone: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Authority {
    pub name: String,
    pub position: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct BudgetLine {
    pub year: String,
    pub amount: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct InstitutionData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub schedule: String,
    /// Not filled by the spreadsheets.
    pub authorities: Vec<Authority>,
    /// Not filled by the spreadsheets.
    pub budget: Vec<BudgetLine>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub institution: String,
}

/// The documents a commission may publish.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize)]
pub enum DocumentKind {
    #[serde(rename = "Infografía")]
    Infografia,
    #[serde(rename = "Cronograma")]
    Cronograma,
}

impl DocumentKind {
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Infografia => "Infografía",
            DocumentKind::Cronograma => "Cronograma",
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Document {
    pub kind: DocumentKind,
    pub title: String,
    pub url: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Phase {
    pub name: String,
    pub status: String,
    pub description: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct CommissionData {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub purpose: String,
    pub description: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub members: Vec<Member>,
    pub requirements: Vec<String>,
    pub documents: Vec<Document>,
    pub phases: Vec<Phase>,
    pub status: String,
    #[serde(rename = "candidatesCount")]
    pub candidates_count: u32,
}

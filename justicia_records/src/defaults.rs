//! Where every field of every record comes from.
//!
//! Each domain has one table listing, for each output field, the column it is
//! read from and what happens when that column is blank. The builders resolve
//! their fields through these tables only.

use crate::tokenizer::SourceRow;
use log::debug;

pub const CANDIDATE_IMAGE_PLACEHOLDER: &str = "https://placehold.co/400x400?text=Candidato";
pub const INSTITUTION_IMAGE_PLACEHOLDER: &str = "https://placehold.co/600x400?text=Institucion";

pub const MEMBER_ROLE: &str = "Miembro";
pub const PHASE_NAME: &str = "Convocatoria";
pub const PHASE_STATUS: &str = "Completada";
pub const PHASE_DESCRIPTION: &str = "Publicación de la convocatoria y recepción de expedientes";
pub const COMMISSION_STATUS: &str = "En proceso";

/// Separator for the list columns of the commissions file.
pub const LIST_SEPARATOR: char = ';';

/// What to do with the raw value of a column.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Fallback {
    /// The raw value, possibly empty.
    Empty,
    /// The raw value, or the given literal when blank.
    Literal(&'static str),
    /// The raw value, or `<prefix>-<row index>` when blank.
    RowPlaceholder(&'static str),
    /// Always `<prefix>-<raw value>`, blank or not.
    AlwaysPrefixed(&'static str),
    /// The raw value substituted for `{}` in the template.
    Template(&'static str),
    /// A fixed value. The source is never read.
    Constant(&'static str),
    /// The raw value, further interpreted by the builder.
    Derived,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub column: Option<&'static str>,
    pub fallback: Fallback,
}

const fn rule(field: &'static str, column: &'static str, fallback: Fallback) -> FieldRule {
    FieldRule {
        field,
        column: Some(column),
        fallback,
    }
}

const fn constant(field: &'static str, value: &'static str) -> FieldRule {
    FieldRule {
        field,
        column: None,
        fallback: Fallback::Constant(value),
    }
}

#[derive(Debug)]
pub struct DefaultTable {
    pub domain: &'static str,
    pub rules: &'static [FieldRule],
}

impl DefaultTable {
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.field == field)
    }

    /// The value of a field for one row, after applying its fallback.
    ///
    /// Unknown fields resolve to the empty string.
    pub fn resolve(&self, field: &str, row: &SourceRow) -> String {
        let r = match self.rule(field) {
            Some(r) => r,
            None => {
                debug!("{}: no rule for field {:?}", self.domain, field);
                return String::new();
            }
        };
        let raw = r.column.map(|c| row.get(c)).unwrap_or("");
        match r.fallback {
            Fallback::Empty | Fallback::Derived => raw.to_string(),
            Fallback::Literal(lit) if raw.is_empty() => lit.to_string(),
            Fallback::Literal(_) => raw.to_string(),
            Fallback::RowPlaceholder(prefix) if raw.is_empty() => {
                format!("{}-{}", prefix, row.index)
            }
            Fallback::RowPlaceholder(_) => raw.to_string(),
            Fallback::AlwaysPrefixed(prefix) => format!("{}-{}", prefix, raw),
            Fallback::Template(template) => template.replace("{}", raw),
            Fallback::Constant(value) => value.to_string(),
        }
    }
}

pub static CANDIDATE_DEFAULTS: DefaultTable = DefaultTable {
    domain: "candidates",
    rules: &[
        rule("id", "id", Fallback::RowPlaceholder("candidate")),
        rule("name", "nombre", Fallback::Empty),
        rule("role", "cargo", Fallback::Literal("Aspirante")),
        rule("institution", "institucion", Fallback::Empty),
        rule(
            "imageUrl",
            "imagen",
            Fallback::Literal(CANDIDATE_IMAGE_PLACEHOLDER),
        ),
        // Unreadable values get the same defaults in `read_status` and `read_years`.
        rule("status", "estado", Fallback::Literal("Activo")),
        rule("yearsOfExperience", "anosexperiencia", Fallback::Literal("0")),
        rule("description", "descripcion", Fallback::Empty),
        rule("academicExperience", "experienciaacademica", Fallback::Empty),
        rule(
            "professionalExperience",
            "experienciaprofesional",
            Fallback::Empty,
        ),
        rule("email", "correo", Fallback::Empty),
        rule("phone", "telefono", Fallback::Empty),
    ],
};

pub static INSTITUTION_DEFAULTS: DefaultTable = DefaultTable {
    domain: "institutions",
    rules: &[
        rule("id", "id", Fallback::AlwaysPrefixed("institution")),
        rule("name", "nombre", Fallback::Empty),
        // Unlike the other fields, the sector itself is the value.
        rule("type", "sector", Fallback::Literal("Institución")),
        rule("description", "descripcion", Fallback::Empty),
        rule(
            "imageUrl",
            "imagen",
            Fallback::Literal(INSTITUTION_IMAGE_PLACEHOLDER),
        ),
        rule("address", "direccion", Fallback::Empty),
        rule("phone", "telefono", Fallback::Empty),
        rule("email", "correo", Fallback::Empty),
        rule("website", "sitioweb", Fallback::Empty),
        rule("schedule", "horario", Fallback::Empty),
    ],
};

pub static COMMISSION_DEFAULTS: DefaultTable = DefaultTable {
    domain: "commissions",
    rules: &[
        rule("id", "id", Fallback::RowPlaceholder("commission")),
        rule("name", "nombre", Fallback::Empty),
        rule("institution", "institucion", Fallback::Empty),
        rule(
            "purpose",
            "institucion",
            Fallback::Template(
                "Comisión de Postulación encargada de la selección de candidatos para {}",
            ),
        ),
        rule("description", "descripcion", Fallback::Empty),
        rule("startDate", "fechainicio", Fallback::Empty),
        rule("endDate", "fechafin", Fallback::Empty),
        rule("members", "comision", Fallback::Derived),
        rule("requirements", "requisitos", Fallback::Derived),
        rule("infografiaUrl", "infografiaURL", Fallback::Derived),
        rule("cronogramaUrl", "cronogramaURL", Fallback::Derived),
        constant("status", COMMISSION_STATUS),
    ],
};

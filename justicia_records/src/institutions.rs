use log::debug;

use crate::defaults::INSTITUTION_DEFAULTS;
use crate::records::InstitutionData;
use crate::tokenizer::{parse_rows, SourceRow};

/// Reads the institutions file.
pub fn parse_institutions(text: &str) -> Vec<InstitutionData> {
    institutions_from_rows(&parse_rows(text))
}

pub fn institutions_from_rows(rows: &[SourceRow]) -> Vec<InstitutionData> {
    rows.iter().map(build_institution).collect()
}

fn build_institution(row: &SourceRow) -> InstitutionData {
    let d = &INSTITUTION_DEFAULTS;
    let inst = InstitutionData {
        id: d.resolve("id", row),
        name: d.resolve("name", row),
        kind: d.resolve("type", row),
        description: d.resolve("description", row),
        image_url: d.resolve("imageUrl", row),
        address: d.resolve("address", row),
        phone: d.resolve("phone", row),
        email: d.resolve("email", row),
        website: d.resolve("website", row),
        schedule: d.resolve("schedule", row),
        authorities: vec![],
        budget: vec![],
    };
    debug!("build_institution: row {}: {:?}", row.index, inst.id);
    inst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::INSTITUTION_IMAGE_PLACEHOLDER;

    const HEADER: &str = "id,nombre,sector,descripcion,imagen,direccion,telefono,correo,sitioweb,horario";

    #[test]
    fn full_row() {
        let text = format!(
            "{}\n3,Ministerio Público,Justicia,\"Fiscalía general, persecución penal\",,15 avenida 15-16 zona 1,2411-9191,info@mp.gob.gt,https://www.mp.gob.gt,Lunes a viernes 8:00 - 16:00",
            HEADER
        );
        let is = parse_institutions(&text);
        assert_eq!(is.len(), 1);
        let i = &is[0];
        assert_eq!(i.id, "institution-3");
        assert_eq!(i.name, "Ministerio Público");
        assert_eq!(i.kind, "Justicia");
        assert_eq!(i.description, "Fiscalía general, persecución penal");
        assert_eq!(i.image_url, INSTITUTION_IMAGE_PLACEHOLDER);
        assert_eq!(i.address, "15 avenida 15-16 zona 1");
        assert_eq!(i.phone, "2411-9191");
        assert_eq!(i.email, "info@mp.gob.gt");
        assert_eq!(i.website, "https://www.mp.gob.gt");
        assert_eq!(i.schedule, "Lunes a viernes 8:00 - 16:00");
        assert!(i.authorities.is_empty());
        assert!(i.budget.is_empty());
    }

    #[test]
    fn blank_sector_uses_the_generic_type() {
        let text = format!(
            "{}\n4,Contraloría General de Cuentas,,Control fiscal,img.png,zona 13,2417-8700,cgc@cgc.gob.gt,https://www.contraloria.gob.gt,8 a 16",
            HEADER
        );
        let is = parse_institutions(&text);
        assert_eq!(is[0].kind, "Institución");
        assert_eq!(is[0].image_url, "img.png");
    }

    #[test]
    fn missing_columns_do_not_fail() {
        let is = parse_institutions("nombre\nCorte de Constitucionalidad");
        assert_eq!(is.len(), 1);
        assert_eq!(is[0].id, "institution-");
        assert_eq!(is[0].kind, "Institución");
        assert_eq!(is[0].phone, "");
    }

    #[test]
    fn empty_text() {
        assert!(parse_institutions("").is_empty());
        assert!(parse_institutions(HEADER).is_empty());
    }
}

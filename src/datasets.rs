use log::{debug, info, warn};

use justicia_records::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::datasets::config_reader::*;
use crate::datasets::io_common::{resolve_path, simplify_file_name, SourceData};

mod config_reader;
mod io_common;
mod io_csv;
mod io_excel;

#[derive(Debug, Snafu)]
pub enum PublishError {
    #[snafu(display("Error reading source file {path}"))]
    OpeningSource {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening workbook {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Worksheet {name} not found in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("Error reading JSON file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Unknown dataset '{name}': expected candidates, institutions or commissions"))]
    UnknownDataset { name: String },
    #[snafu(display("Unknown provider '{name}': expected csv or excel"))]
    UnknownProvider { name: String },
    #[snafu(display("Unknown candidate status '{name}': expected Activo, Inactivo or Retirado"))]
    UnknownStatus { name: String },
    #[snafu(display("No source file given: use --config or one of --candidates, --institutions, --commissions"))]
    NoSources {},
    #[snafu(display("Error writing snapshot to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type PubResult<T> = Result<T, PublishError>;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Dataset {
    Candidates,
    Institutions,
    Commissions,
}

impl Dataset {
    pub fn parse(name: &str) -> PubResult<Dataset> {
        match name {
            "candidates" => Ok(Dataset::Candidates),
            "institutions" => Ok(Dataset::Institutions),
            "commissions" => Ok(Dataset::Commissions),
            x => UnknownDatasetSnafu { name: x }.fail(),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Provider {
    Csv,
    Excel,
}

impl Provider {
    pub fn parse(name: &str) -> PubResult<Provider> {
        match name {
            "csv" => Ok(Provider::Csv),
            "excel" | "xlsx" => Ok(Provider::Excel),
            x => UnknownProviderSnafu { name: x }.fail(),
        }
    }
}

/// A source file, with its path resolved and its names checked.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResolvedSource {
    pub dataset: Dataset,
    pub provider: Provider,
    pub path: PathBuf,
    pub worksheet: Option<String>,
}

pub fn parse_status(name: &str) -> PubResult<CandidateStatus> {
    match name {
        "Activo" => Ok(CandidateStatus::Activo),
        "Inactivo" => Ok(CandidateStatus::Inactivo),
        "Retirado" => Ok(CandidateStatus::Retirado),
        x => UnknownStatusSnafu { name: x }.fail(),
    }
}

/// Combines the configuration file and the command line into the list of
/// sources to read. A dataset given on the command line replaces the sources
/// of that dataset in the configuration file.
pub fn resolve_sources(
    config: Option<(&DatasetsConfig, &Path)>,
    args: &Args,
) -> PubResult<Vec<ResolvedSource>> {
    let cli_provider = Provider::parse(args.input_type.as_deref().unwrap_or("csv"))?;
    let cli_sources: Vec<(Dataset, &String)> = [
        (Dataset::Candidates, &args.candidates),
        (Dataset::Institutions, &args.institutions),
        (Dataset::Commissions, &args.commissions),
    ]
    .into_iter()
    .filter_map(|(d, p)| p.as_ref().map(|p| (d, p)))
    .collect();

    let mut res: Vec<ResolvedSource> = Vec::new();
    if let Some((c, root)) = config {
        for cfs in c.sources.iter() {
            let dataset = cfs.dataset()?;
            if cli_sources.iter().any(|(d, _)| *d == dataset) {
                info!(
                    "Source {:?} for {:?} replaced by the command line",
                    cfs.file_path, dataset
                );
                continue;
            }
            res.push(ResolvedSource {
                dataset,
                provider: cfs.provider()?,
                path: resolve_path(Some(root), &cfs.file_path),
                worksheet: cfs.excel_worksheet_name.clone(),
            });
        }
    }
    for (dataset, p) in cli_sources {
        res.push(ResolvedSource {
            dataset,
            provider: cli_provider,
            path: resolve_path(None, p),
            worksheet: args.excel_worksheet_name.clone(),
        });
    }

    ensure!(!res.is_empty(), NoSourcesSnafu {});
    Ok(res)
}

fn read_source(source: &ResolvedSource) -> PubResult<SourceData> {
    info!(
        "Attempting to read {:?} file {:?}",
        source.dataset,
        source.path.display().to_string()
    );
    match source.provider {
        Provider::Csv => io_csv::read_csv_source(&source.path),
        Provider::Excel => io_excel::read_excel_source(&source.path, source.worksheet.as_deref()),
    }
}

/// Reads all the sources into one snapshot.
///
/// Several sources of the same dataset are read in order and appended.
pub fn read_snapshot(sources: &[ResolvedSource]) -> PubResult<Snapshot> {
    let mut snapshot = Snapshot::default();
    for source in sources.iter() {
        let data = read_source(source)?;
        let name = simplify_file_name(&source.path);
        match source.dataset {
            Dataset::Candidates => {
                let mut recs = candidates_from_rows(&data.rows);
                info!("{}: {} candidates", name, recs.len());
                snapshot.candidates.append(&mut recs);
                merge_digest(&mut snapshot.digests.candidates, data.digest);
            }
            Dataset::Institutions => {
                let mut recs = institutions_from_rows(&data.rows);
                info!("{}: {} institutions", name, recs.len());
                snapshot.institutions.append(&mut recs);
                merge_digest(&mut snapshot.digests.institutions, data.digest);
            }
            Dataset::Commissions => {
                let mut recs = commissions_from_rows(&data.rows);
                info!("{}: {} commissions", name, recs.len());
                snapshot.commissions.append(&mut recs);
                merge_digest(&mut snapshot.digests.commissions, data.digest);
            }
        }
    }
    Ok(snapshot)
}

// Several files for one dataset: the digest covers all of them, in order.
fn merge_digest(current: &mut Option<String>, digest: String) {
    *current = Some(match current.take() {
        Some(prev) => source_digest(&format!("{}{}", prev, digest)),
        None => digest,
    });
}

// Keys keep the order of the tally (serde_json's preserve_order).
fn tally_to_json(tally: &[(String, usize)]) -> JSValue {
    let mut m: JSMap<String, JSValue> = JSMap::new();
    for (name, count) in tally {
        m.insert(name.clone(), json!(count));
    }
    JSValue::Object(m)
}

fn summary_to_json(s: &DatasetSummary) -> JSValue {
    json!({
        "candidates": s.candidates,
        "institutions": s.institutions,
        "commissions": s.commissions,
        "candidatesByStatus": tally_to_json(&s.candidates_by_status),
        "candidatesByInstitution": tally_to_json(&s.candidates_by_institution),
        "institutionsByType": tally_to_json(&s.institutions_by_type),
        "documents": s.documents,
    })
}

pub fn build_snapshot_js(
    settings: &OutputSettings,
    snapshot: &Snapshot,
    query: &CandidateQuery,
) -> PubResult<JSValue> {
    let published = search_candidates(&snapshot.candidates, query);
    if !query.is_empty() {
        info!(
            "Query {:?} keeps {} of {} candidates",
            query,
            published.len(),
            snapshot.candidates.len()
        );
    }
    let candidates_js = serde_json::to_value(&published).context(ParsingJsonSnafu {})?;
    let institutions_js =
        serde_json::to_value(&snapshot.institutions).context(ParsingJsonSnafu {})?;
    let commissions_js =
        serde_json::to_value(&snapshot.commissions).context(ParsingJsonSnafu {})?;
    let d = &snapshot.digests;
    Ok(json!({
        "config": settings,
        "sources": {
            "candidates": d.candidates,
            "institutions": d.institutions,
            "commissions": d.commissions,
        },
        "summary": summary_to_json(&snapshot.summary()),
        "candidates": candidates_js,
        "institutions": institutions_js,
        "commissions": commissions_js,
    }))
}

fn write_output(out: &str, pretty: &str) -> PubResult<()> {
    if out == "stdout" || out.is_empty() {
        println!("{}", pretty);
        return Ok(());
    }
    info!("Writing snapshot to {:?}", out);
    fs::write(out, pretty).context(WritingOutputSnafu { path: out })
}

/// Compares the snapshot with a previous one and prints the differences.
pub fn check_reference(reference_path: &str, pretty_js: &str) -> PubResult<()> {
    let reference = read_reference(reference_path)?;
    let pretty_reference =
        serde_json::to_string_pretty(&reference).context(ParsingJsonSnafu {})?;
    if pretty_reference != pretty_js {
        warn!("Found differences with the reference snapshot");
        print_diff(pretty_reference.as_str(), pretty_js, "\n");
        whatever!("Difference detected between the snapshot and the reference snapshot")
    }
    info!("Snapshot matches the reference {:?}", reference_path);
    Ok(())
}

pub fn run_publication(args: &Args) -> PubResult<()> {
    let config = match &args.config {
        Some(p) => Some((read_config(p)?, p.clone())),
        None => None,
    };
    let config_root: Option<PathBuf> = config.as_ref().map(|(_, p)| {
        Path::new(p)
            .parent()
            .map(|x| x.to_path_buf())
            .unwrap_or_default()
    });
    let sources = resolve_sources(
        config
            .as_ref()
            .map(|(c, _)| c)
            .zip(config_root.as_deref()),
        args,
    )?;
    debug!("run_publication: sources: {:?}", sources);

    let status = match &args.status {
        Some(s) => Some(parse_status(s)?),
        None => None,
    };
    let query = CandidateQuery::new(args.query.clone(), status);

    let snapshot = read_snapshot(&sources)?;
    let settings = config
        .as_ref()
        .map(|(c, _)| c.output_settings.clone())
        .unwrap_or_default();
    let js = build_snapshot_js(&settings, &snapshot, &query)?;
    let pretty_js = serde_json::to_string_pretty(&js).context(ParsingJsonSnafu {})?;

    let out: String = match (&args.out, &settings.output_path) {
        (Some(o), _) => o.clone(),
        (None, Some(o)) => resolve_path(config_root.as_deref(), o)
            .display()
            .to_string(),
        (None, None) => "stdout".to_string(),
    };
    write_output(&out, &pretty_js)?;

    if let Some(reference_path) = &args.reference {
        check_reference(reference_path, &pretty_js)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

    fn test_path(name: &str) -> String {
        format!("{}/{}", TEST_DIR, name)
    }

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn config_args() -> Args {
        Args {
            config: Some(test_path("justiciapedia.json")),
            ..Args::default()
        }
    }

    fn load(args: &Args) -> Snapshot {
        let config = read_config(args.config.as_ref().unwrap()).unwrap();
        let root = PathBuf::from(TEST_DIR);
        let sources = resolve_sources(Some((&config, root.as_path())), args).unwrap();
        read_snapshot(&sources).unwrap()
    }

    #[test]
    fn loads_the_fixture_datasets() {
        init();
        let s = load(&config_args());
        assert_eq!(s.candidates.len(), 4);
        assert_eq!(s.institutions.len(), 3);
        assert_eq!(s.commissions.len(), 2);
        assert!(s.digests.candidates.is_some());
        assert!(s.digests.institutions.is_some());
        assert!(s.digests.commissions.is_some());
    }

    #[test]
    fn fixture_candidates() {
        init();
        let s = load(&config_args());
        let ids: Vec<&str> = s.candidates.iter().map(|c| c.id.as_str()).collect();
        // The fourth line of the file is too short and is skipped.
        assert_eq!(ids, vec!["cand-001", "candidate-2", "cand-003", "candidate-5"]);
        let ana = &s.candidates[0];
        assert_eq!(ana.name, "Ana María López");
        assert_eq!(ana.years_of_experience, 18);
        assert_eq!(ana.education[0].degree, "Doctorado en Derecho");
        assert_eq!(ana.experience[0].position, "Magistrada");
        assert_eq!(ana.experience[0].institution, "Sala Tercera de Apelaciones");
        assert_eq!(s.candidates[1].status, CandidateStatus::Inactivo);
        assert_eq!(s.candidates[1].role, "Aspirante");
        assert_eq!(s.candidates[2].years_of_experience, 0);
    }

    #[test]
    fn fixture_institutions_and_commissions() {
        init();
        let s = load(&config_args());
        assert_eq!(s.institutions[0].id, "institution-1");
        assert_eq!(s.institutions[2].kind, "Institución");
        let csj = &s.commissions[0];
        assert_eq!(csj.members.len(), 3);
        assert_eq!(csj.documents.len(), 2);
        assert_eq!(csj.documents[0].kind, DocumentKind::Infografia);
        let salas = &s.commissions[1];
        assert_eq!(salas.id, "commission-2");
        assert!(salas.documents.is_empty());
    }

    #[test]
    fn command_line_replaces_the_config_source() {
        init();
        let args = Args {
            commissions: Some(test_path("comisiones.csv")),
            ..config_args()
        };
        let config = read_config(args.config.as_ref().unwrap()).unwrap();
        let root = PathBuf::from(TEST_DIR);
        let sources = resolve_sources(Some((&config, root.as_path())), &args).unwrap();
        assert_eq!(sources.len(), 3);
        let last = sources.last().unwrap();
        assert_eq!(last.dataset, Dataset::Commissions);
        assert_eq!(last.path, PathBuf::from(test_path("comisiones.csv")));
        assert_eq!(
            sources
                .iter()
                .filter(|s| s.dataset == Dataset::Commissions)
                .count(),
            1
        );
    }

    #[test]
    fn no_sources() {
        let res = resolve_sources(None, &Args::default());
        assert!(matches!(res, Err(PublishError::NoSources {})));
    }

    #[test]
    fn missing_source_file() {
        let args = Args {
            candidates: Some(test_path("no_existe.csv")),
            ..Args::default()
        };
        let sources = resolve_sources(None, &args).unwrap();
        assert!(matches!(
            read_snapshot(&sources),
            Err(PublishError::OpeningSource { .. })
        ));
    }

    #[test]
    fn status_names() {
        assert_eq!(parse_status("Retirado").unwrap(), CandidateStatus::Retirado);
        assert!(matches!(
            parse_status("activo"),
            Err(PublishError::UnknownStatus { .. })
        ));
    }

    #[test]
    fn snapshot_json() {
        init();
        let s = load(&config_args());
        let query = CandidateQuery::new(Some("corte".to_string()), None);
        let js = build_snapshot_js(&OutputSettings::default(), &s, &query).unwrap();
        assert_eq!(js["summary"]["candidates"], json!(4));
        assert_eq!(js["summary"]["candidatesByStatus"]["Activo"], json!(3));
        assert_eq!(js["summary"]["documents"], json!(2));
        let published = js["candidates"].as_array().unwrap();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0]["yearsOfExperience"], json!(18));
        assert_eq!(published[0]["status"], json!("Activo"));
        assert_eq!(js["institutions"][2]["type"], json!("Institución"));
        assert_eq!(js["commissions"][0]["documents"][0]["kind"], json!("Infografía"));
        assert_eq!(js["commissions"][0]["candidatesCount"], json!(0));
    }

    #[test]
    fn snapshot_tallies_keep_first_appearance() {
        let snapshot = Snapshot {
            candidates: parse_candidates(
                "nombre,institucion,estado\nAna,Zeta,Inactivo\nLuis,Alfa,Activo\nEva,Zeta,Activo",
            ),
            institutions: parse_institutions("id,sector\n1,Seguridad\n2,Justicia"),
            ..Snapshot::default()
        };
        let js =
            build_snapshot_js(&OutputSettings::default(), &snapshot, &CandidateQuery::default())
                .unwrap();
        let keys = |name: &str| -> Vec<String> {
            js["summary"][name]
                .as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect()
        };
        assert_eq!(keys("candidatesByStatus"), vec!["Inactivo", "Activo"]);
        assert_eq!(keys("candidatesByInstitution"), vec!["Zeta", "Alfa"]);
        assert_eq!(keys("institutionsByType"), vec!["Seguridad", "Justicia"]);
        assert_eq!(js["summary"]["candidatesByInstitution"]["Zeta"], json!(2));
    }

    #[test]
    fn excel_institutions() {
        init();
        let args = Args {
            institutions: Some(test_path("instituciones.xlsx")),
            input_type: Some("excel".to_string()),
            excel_worksheet_name: Some("Instituciones".to_string()),
            ..Args::default()
        };
        let sources = resolve_sources(None, &args).unwrap();
        let s = read_snapshot(&sources).unwrap();
        assert!(s.digests.institutions.is_some());
        assert_eq!(s.institutions.len(), 2);
        let tse = &s.institutions[0];
        // Numeric cells come back as whole numbers.
        assert_eq!(tse.id, "institution-7");
        assert_eq!(tse.name, "Tribunal Supremo Electoral");
        assert_eq!(tse.kind, "Electoral");
        assert_eq!(
            tse.description,
            "Organiza los procesos electorales\nEmite credenciales"
        );
        assert_eq!(tse.phone, "");
        let cgc = &s.institutions[1];
        assert_eq!(cgc.id, "institution-8");
        assert_eq!(cgc.kind, "Institución");
        assert_eq!(cgc.website, "");
    }

    #[test]
    fn excel_first_worksheet_and_missing_worksheet() {
        init();
        let args = Args {
            institutions: Some(test_path("instituciones.xlsx")),
            input_type: Some("excel".to_string()),
            ..Args::default()
        };
        let sources = resolve_sources(None, &args).unwrap();
        assert_eq!(read_snapshot(&sources).unwrap().institutions.len(), 2);

        let args = Args {
            excel_worksheet_name: Some("Hoja9".to_string()),
            ..args
        };
        let sources = resolve_sources(None, &args).unwrap();
        assert!(matches!(
            read_snapshot(&sources),
            Err(PublishError::MissingWorksheet { .. })
        ));
    }

    #[test]
    fn reference_comparison() {
        init();
        let s = load(&config_args());
        let js = build_snapshot_js(&OutputSettings::default(), &s, &CandidateQuery::default())
            .unwrap();
        let pretty = serde_json::to_string_pretty(&js).unwrap();

        let dir = std::env::temp_dir().join("justiciapedia-reference-test");
        fs::create_dir_all(&dir).unwrap();
        let reference = dir.join("snapshot.json");
        fs::write(&reference, &pretty).unwrap();
        let reference = reference.display().to_string();

        assert!(check_reference(&reference, &pretty).is_ok());
        let changed = pretty.replacen("Ana María López", "Ana López", 1);
        assert!(matches!(
            check_reference(&reference, &changed),
            Err(PublishError::Whatever { .. })
        ));
    }
}

use std::path::{Path, PathBuf};

use justicia_records::SourceRow;

/// The rows of one source, with the digest of its content.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SourceData {
    pub rows: Vec<SourceRow>,
    pub digest: String,
}

pub fn simplify_file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Paths in the configuration file are relative to the file itself.
pub fn resolve_path(root: Option<&Path>, file_path: &str) -> PathBuf {
    match root {
        Some(r) if Path::new(file_path).is_relative() => r.join(file_path),
        _ => PathBuf::from(file_path),
    }
}

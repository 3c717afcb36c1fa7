use crate::datasets::*;

use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "siteName")]
    pub site_name: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    #[serde(rename = "generatedOn")]
    pub generated_on: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FileSource {
    pub dataset: String,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

fn default_provider() -> String {
    "csv".to_string()
}

impl FileSource {
    pub fn dataset(&self) -> PubResult<Dataset> {
        Dataset::parse(&self.dataset)
    }

    pub fn provider(&self) -> PubResult<Provider> {
        Provider::parse(&self.provider)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetsConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(default)]
    pub sources: Vec<FileSource>,
}

pub fn read_config(path: &str) -> PubResult<DatasetsConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: DatasetsConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    debug!("read_config: {:?}", config);
    Ok(config)
}

/// Reads a previously published snapshot.
pub fn read_reference(path: &str) -> PubResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let config: DatasetsConfig = serde_json::from_str(
            r#"{
              "outputSettings": { "siteName": "Justiciapedia", "outputPath": "out.json" },
              "sources": [
                { "dataset": "candidates", "provider": "csv", "filePath": "candidatos.csv" },
                { "dataset": "institutions", "provider": "excel", "filePath": "inst.xlsx",
                  "excelWorksheetName": "Hoja1" }
              ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.output_settings.site_name.as_deref(), Some("Justiciapedia"));
        assert_eq!(config.output_settings.generated_on, None);
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].dataset().unwrap(), Dataset::Candidates);
        assert_eq!(config.sources[1].provider().unwrap(), Provider::Excel);
        assert_eq!(
            config.sources[1].excel_worksheet_name.as_deref(),
            Some("Hoja1")
        );
    }

    #[test]
    fn provider_defaults_to_csv() {
        let config: DatasetsConfig = serde_json::from_str(
            r#"{ "sources": [ { "dataset": "commissions", "filePath": "c.csv" } ] }"#,
        )
        .unwrap();
        assert_eq!(config.output_settings, OutputSettings::default());
        assert_eq!(config.sources[0].provider().unwrap(), Provider::Csv);
    }

    #[test]
    fn unknown_names_are_errors() {
        let fs = FileSource {
            dataset: "jueces".to_string(),
            provider: "ods".to_string(),
            file_path: "x".to_string(),
            excel_worksheet_name: None,
        };
        assert!(matches!(fs.dataset(), Err(PublishError::UnknownDataset { .. })));
        assert!(matches!(fs.provider(), Err(PublishError::UnknownProvider { .. })));
    }
}

use clap::Parser;

/// Publishes the Justiciapedia spreadsheets as a single JSON snapshot.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The JSON file listing the source spreadsheets.
    /// Paths in this file are relative to its directory.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, optional) The candidates spreadsheet. Overrides the candidates source of the
    /// configuration file.
    #[clap(long, value_parser)]
    pub candidates: Option<String>,

    /// (file path, optional) The institutions spreadsheet. Overrides the institutions source of
    /// the configuration file.
    #[clap(long, value_parser)]
    pub institutions: Option<String>,

    /// (file path, optional) The commissions spreadsheet. Overrides the commissions source of the
    /// configuration file.
    #[clap(long, value_parser)]
    pub commissions: Option<String>,

    /// (default csv) The type of the files given with --candidates, --institutions and
    /// --commissions: csv or excel.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default: first worksheet) When using Excel files, the name of the worksheet to read.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (file path, 'stdout' or empty) Where to write the snapshot. Setting this option overrides
    /// the output path that may be specified in the configuration file.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A previously published snapshot. If provided, the new snapshot must match it.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (text, optional) Only publish the candidates whose name, role or institution contains
    /// this text.
    #[clap(short, long, value_parser)]
    pub query: Option<String>,

    /// (Activo, Inactivo or Retirado, optional) Only publish the candidates with this status.
    #[clap(long, value_parser)]
    pub status: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

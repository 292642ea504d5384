use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tabrec_types::RowStatus;

#[derive(Parser)]
#[command(
    name = "tabrec",
    about = "Reconcile two versions of a keyed tabular dataset",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two dataset versions and report what changed
    Compare(CompareArgs),
    /// Show a file's column schema and record count
    Columns(ColumnsArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// The old version
    pub left: PathBuf,
    /// The new version
    pub right: PathBuf,

    /// Key column identifying a logical record in both files
    #[arg(short, long, default_value = "ID")]
    pub key: String,

    /// Write a styled spreadsheet report to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Worksheet name of the spreadsheet report
    #[arg(long, default_value = "Monitoring")]
    pub sheet: String,

    /// Field delimiter of the input files
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Cell text treated as a missing value (repeatable)
    #[arg(long = "na", default_value = "NA")]
    pub na_markers: Vec<String>,

    /// Restrict printed rows to these statuses, e.g. --only new,deleted
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<RowStatus>,
}

#[derive(Args)]
pub struct ColumnsArgs {
    /// The file to inspect
    pub file: PathBuf,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compare() {
        let cli = Cli::try_parse_from(["tabrec", "compare", "old.csv", "new.csv"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.left, PathBuf::from("old.csv"));
            assert_eq!(args.right, PathBuf::from("new.csv"));
            assert_eq!(args.key, "ID");
            assert_eq!(args.delimiter, ',');
            assert_eq!(args.na_markers, vec!["NA"]);
            assert!(args.output.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_compare_with_key_and_output() {
        let cli = Cli::try_parse_from([
            "tabrec", "compare", "a.csv", "b.csv", "--key", "sku", "-o", "out/diff.xlsx",
        ])
        .unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.key, "sku");
            assert_eq!(args.output, Some(PathBuf::from("out/diff.xlsx")));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_only_statuses() {
        let cli = Cli::try_parse_from([
            "tabrec", "compare", "a.csv", "b.csv", "--only", "new,deleted",
        ])
        .unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.only, vec![RowStatus::New, RowStatus::Deleted]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn reject_unknown_status() {
        assert!(Cli::try_parse_from([
            "tabrec", "compare", "a.csv", "b.csv", "--only", "changed",
        ])
        .is_err());
    }

    #[test]
    fn parse_custom_delimiter_and_na() {
        let cli = Cli::try_parse_from([
            "tabrec", "compare", "a.csv", "b.csv", "--delimiter", ";", "--na", "-", "--na", "null",
        ])
        .unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.delimiter, ';');
            assert_eq!(args.na_markers, vec!["-", "null"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_columns() {
        let cli = Cli::try_parse_from(["tabrec", "columns", "data.csv"]).unwrap();
        if let Command::Columns(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("data.csv"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_json_format() {
        let cli =
            Cli::try_parse_from(["tabrec", "--format", "json", "columns", "data.csv"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["tabrec", "--verbose", "columns", "data.csv"]).unwrap();
        assert!(cli.verbose);
    }
}

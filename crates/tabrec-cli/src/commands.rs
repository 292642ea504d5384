use colored::Colorize;

use tabrec_engine::{diff_tables, DiffOutcome, DiffRow, DiffTable};
use tabrec_report::{write_xlsx_report, ReportConfig};
use tabrec_table::{read_csv_table, CsvReadOptions};
use tabrec_types::RowStatus;

use crate::cli::{Cli, ColumnsArgs, Command, CompareArgs, OutputFormat};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Compare(args) => cmd_compare(args, &cli.format),
        Command::Columns(args) => cmd_columns(args, &cli.format),
    }
}

fn read_options(delimiter: char, na_markers: &[String]) -> CsvReadOptions {
    CsvReadOptions {
        delimiter: delimiter as u8,
        na_markers: na_markers.to_vec(),
    }
}

fn cmd_compare(args: CompareArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let options = read_options(args.delimiter, &args.na_markers);
    let left = read_csv_table(&args.left, &args.key, &options)?;
    let right = read_csv_table(&args.right, &args.key, &options)?;

    let report = diff_tables(&left, &right)?;

    for warning in &report.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    match &report.outcome {
        DiffOutcome::NoDifferences => {
            if let OutputFormat::Text = format {
                println!("{} No differences found.", "✓".green().bold());
            }
        }
        DiffOutcome::Differences(table) => {
            if let OutputFormat::Text = format {
                print_summary(table);
                print_rows(table, &args.only);
            }
            if let Some(path) = &args.output {
                let config = ReportConfig::new(path).with_sheet_name(&args.sheet);
                write_xlsx_report(table, &config)?;
                if let OutputFormat::Text = format {
                    println!(
                        "{} Report written to {}",
                        "✓".green().bold(),
                        path.display().to_string().bold()
                    );
                }
            }
        }
    }
    Ok(())
}

fn cmd_columns(args: ColumnsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let options = read_options(args.delimiter, &[]);
    // The key column is irrelevant for schema inspection.
    let table = read_csv_table(&args.file, "", &options)?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "columns": table.columns(),
                "records": table.len(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!(
                "{} columns, {} records",
                table.columns().len().to_string().bold(),
                table.len().to_string().bold()
            );
            for column in table.columns() {
                println!("  {}", column);
            }
        }
    }
    Ok(())
}

fn print_summary(table: &DiffTable) {
    println!(
        "{} new, {} deleted, {} modified",
        table.new_rows().to_string().green().bold(),
        table.deleted_rows().to_string().red().bold(),
        table.modified_rows().to_string().yellow().bold(),
    );
}

fn print_rows(table: &DiffTable, only: &[RowStatus]) {
    let mut header = vec![table.key_column.clone(), "status".to_string()];
    header.extend(table.columns.iter().cloned());
    println!("{}", header.join("\t").bold());

    for row in visible_rows(table, only) {
        let cells: Vec<String> = table
            .columns
            .iter()
            .map(|column| {
                row.cell(column)
                    .map(|cell| cell.render())
                    .unwrap_or_default()
            })
            .collect();
        println!(
            "{}\t{}\t{}",
            row.key,
            status_label(row.status),
            cells.join("\t")
        );
    }
}

fn visible_rows<'a>(table: &'a DiffTable, only: &[RowStatus]) -> Vec<&'a DiffRow> {
    table
        .rows
        .iter()
        .filter(|row| only.is_empty() || only.contains(&row.status))
        .collect()
}

fn status_label(status: RowStatus) -> colored::ColoredString {
    match status {
        RowStatus::New => "new".green(),
        RowStatus::Deleted => "deleted".red(),
        RowStatus::Modified => "modified".yellow(),
        RowStatus::Unchanged => "unchanged".normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn compare_args(left: PathBuf, right: PathBuf) -> CompareArgs {
        CompareArgs {
            left,
            right,
            key: "ID".to_string(),
            output: None,
            sheet: "Monitoring".to_string(),
            delimiter: ',',
            na_markers: vec!["NA".to_string()],
            only: vec![],
        }
    }

    #[test]
    fn compare_writes_spreadsheet_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_csv(&dir, "old.csv", "ID,name\n1,Alice\n");
        let right = write_csv(&dir, "new.csv", "ID,name\n1,Alicia\n");
        let output = dir.path().join("out").join("diff.xlsx");

        let mut args = compare_args(left, right);
        args.output = Some(output.clone());

        cmd_compare(args, &OutputFormat::Text).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn compare_without_differences_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_csv(&dir, "old.csv", "ID,name\n1,Alice\n");
        let right = write_csv(&dir, "new.csv", "ID,name\n1,Alice\n");
        let output = dir.path().join("diff.xlsx");

        let mut args = compare_args(left, right);
        args.output = Some(output.clone());

        cmd_compare(args, &OutputFormat::Text).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn compare_fails_on_missing_key_column() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_csv(&dir, "old.csv", "sku,name\n1,Alice\n");
        let right = write_csv(&dir, "new.csv", "ID,name\n1,Alice\n");

        let args = compare_args(left, right);
        assert!(cmd_compare(args, &OutputFormat::Text).is_err());
    }

    #[test]
    fn visible_rows_filter() {
        let left = tabrec_types::Table::new(
            "id",
            vec!["id".into(), "v".into()],
            vec![
                tabrec_types::Record::from_pairs([("id", "1"), ("v", "a")]),
                tabrec_types::Record::from_pairs([("id", "2"), ("v", "b")]),
            ],
        );
        let right = tabrec_types::Table::new(
            "id",
            vec!["id".into(), "v".into()],
            vec![tabrec_types::Record::from_pairs([("id", "2"), ("v", "c")])],
        );
        let report = diff_tables(&left, &right).unwrap();
        let table = report.outcome.table().unwrap();

        assert_eq!(visible_rows(table, &[]).len(), 2);
        let deleted = visible_rows(table, &[RowStatus::Deleted]);
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].key, "1");
    }

    #[test]
    fn columns_command_reads_schema() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_csv(&dir, "data.csv", "ID,name,city\n1,Alice,Oslo\n");

        let args = ColumnsArgs {
            file,
            delimiter: ',',
        };
        cmd_columns(args, &OutputFormat::Json).unwrap();
    }
}

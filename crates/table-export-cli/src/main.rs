//! tabex - export tables of an HTML file to CSV and Excel files

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use table_export::prelude::*;
use table_export::SavedFile;

#[derive(Parser)]
#[command(name = "tabex")]
#[command(author, version, about = "Export HTML tables to CSV and Excel files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a table as CSV (UTF-8 with byte-order marker)
    Csv {
        /// Input HTML file
        input: PathBuf,

        /// Id of the table element to export
        #[arg(short, long)]
        table: String,

        /// Output file name without extension (default: the table id)
        #[arg(short, long)]
        name: Option<String>,

        /// Directory the file is written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Field delimiter ("tab" for a tab character)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Line terminator: crlf, lf, cr, or literal text
        #[arg(short, long)]
        line_terminator: Option<String>,

        /// Download mechanism to emulate: native, object-url or data-uri
        #[arg(short, long, default_value = "native")]
        mechanism: DownloadMechanism,
    },

    /// Export a table as a legacy Excel (.xls) HTML workbook
    Excel {
        /// Input HTML file
        input: PathBuf,

        /// Id of the table element to export
        #[arg(short, long)]
        table: String,

        /// Output file name without extension (default: the table id)
        #[arg(short, long)]
        name: Option<String>,

        /// Worksheet name (default: Worksheet)
        #[arg(short, long, default_value = "")]
        worksheet: String,

        /// Directory the file is written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Download mechanism to emulate: native, object-url or data-uri
        #[arg(short, long, default_value = "native")]
        mechanism: DownloadMechanism,
    },

    /// List the tables of an HTML file
    Tables {
        /// Input HTML file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Csv {
            input,
            table,
            name,
            out_dir,
            delimiter,
            line_terminator,
            mechanism,
        } => {
            let doc = load(&input)?;
            let name = name.unwrap_or_else(|| table.clone());
            let delimiter = delimiter.map(|d| parse_delimiter(&d));
            let line_terminator = line_terminator.map(|t| parse_line_terminator(&t));

            export(&out_dir, mechanism, |exporter| {
                exporter.to_csv(
                    &name,
                    &doc,
                    table.as_str(),
                    delimiter.as_deref(),
                    line_terminator.as_deref(),
                )
            })
        }
        Commands::Excel {
            input,
            table,
            name,
            worksheet,
            out_dir,
            mechanism,
        } => {
            let doc = load(&input)?;
            let name = name.unwrap_or_else(|| table.clone());

            export(&out_dir, mechanism, |exporter| {
                exporter.to_excel(&name, &worksheet, &doc, table.as_str())
            })
        }
        Commands::Tables { input } => list_tables(&input),
    }
}

fn load(input: &Path) -> Result<Document> {
    let html = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    Ok(Document::parse(&html))
}

/// Run one export against an in-memory host, then write what it saved
fn export<F>(out_dir: &Path, mechanism: DownloadMechanism, run: F) -> Result<()>
where
    F: FnOnce(&mut Exporter) -> table_export::Result<()>,
{
    let host = Rc::new(RecordingHost::new(HostCapabilities::preferring(mechanism)));
    let mut exporter = Exporter::new(Rc::clone(&host));
    run(&mut exporter).context("Export failed")?;

    let files = host.take_files();
    if files.is_empty() {
        bail!("The export produced no file");
    }
    for file in files {
        write_file(out_dir, &file)?;
    }
    Ok(())
}

fn write_file(out_dir: &Path, file: &SavedFile) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create '{}'", out_dir.display()))?;
    let path = out_dir.join(&file.file_name);
    std::fs::write(&path, &file.bytes)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    eprintln!(
        "Wrote {} bytes to '{}' ({})",
        file.bytes.len(),
        path.display(),
        file.mechanism
    );
    Ok(())
}

fn list_tables(input: &Path) -> Result<()> {
    let doc = load(input)?;

    for (i, table) in doc.tables().iter().enumerate() {
        println!(
            "{}\t{}\t{} rows",
            i,
            table.id().unwrap_or("-"),
            table.row_count()
        );
    }

    Ok(())
}

fn parse_delimiter(value: &str) -> String {
    match value {
        "tab" | "\\t" => "\t".to_string(),
        other => other.to_string(),
    }
}

fn parse_line_terminator(value: &str) -> String {
    match value.to_ascii_lowercase().as_str() {
        "crlf" => LineTerminator::Crlf.into(),
        "lf" => LineTerminator::Lf.into(),
        "cr" => LineTerminator::Cr.into(),
        _ => value.to_string(),
    }
}

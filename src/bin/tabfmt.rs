//! tabfmt CLI
//!
//! Render a delimited text file as an ASCII or Markdown table.

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tabfmt::{
    delimiter_for_path, AsciiRenderer, DetectConfig, EncodingChain, Format, MarkdownRenderer,
    RenderOptions, Table,
};

#[derive(Parser, Debug)]
#[command(name = "tabfmt")]
#[command(version)]
#[command(about = "Render CSV/TSV/PSV files as aligned ASCII or Markdown tables")]
#[command(group(ArgGroup::new("header_mode").args(["header", "no_header"])))]
#[command(group(ArgGroup::new("destination").args(["output", "save"])))]
struct Cli {
    /// Input file (.csv, .tsv, .psv)
    input: PathBuf,

    /// Delimiter character (default: by extension, else sniffed)
    #[arg(short = 'd', long)]
    delimiter: Option<char>,

    /// Output format
    #[arg(long, value_enum, default_value = "ascii")]
    format: OutputFormat,

    /// Force the first row to be treated as a header
    #[arg(long)]
    header: bool,

    /// Treat every row as data
    #[arg(long)]
    no_header: bool,

    /// Maximum display width per column; longer cells are truncated
    #[arg(long, value_name = "COLS")]
    max_width: Option<usize>,

    /// Replace full-width spaces (U+3000) with two ASCII spaces
    #[arg(long)]
    normalize_ws: bool,

    /// Emit minimal Markdown without column padding
    #[arg(long)]
    no_align: bool,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Save next to the input with a format-derived extension (.txt / .md)
    #[arg(long)]
    save: bool,

    /// Extension used with --save (e.g. ".out")
    #[arg(long, requires = "save", value_name = "EXT")]
    save_ext: Option<String>,

    /// Report progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Ascii,
    Markdown,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Ascii => Format::Ascii,
            OutputFormat::Markdown => Format::Markdown,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = RenderOptions {
        format: cli.format.into(),
        max_column_width: cli.max_width,
        align_markdown: !cli.no_align,
        normalize_fullwidth_space: cli.normalize_ws,
    };
    options.validate()?;

    let decoded = EncodingChain::default().read_file(&cli.input)?;
    if cli.verbose {
        eprintln!("Decoded '{}' as {}", cli.input.display(), decoded.encoding);
    }

    let detect = DetectConfig::default();
    let delimiter = cli
        .delimiter
        .or_else(|| delimiter_for_path(&cli.input))
        .unwrap_or_else(|| detect.sniff_delimiter(decoded.text.lines().next().unwrap_or("")));

    let rows = tabfmt::tokenize(&decoded.text, delimiter);
    if rows.is_empty() {
        bail!("input file '{}' contains no rows", cli.input.display());
    }

    let has_header = if cli.header {
        true
    } else if cli.no_header {
        false
    } else {
        detect.sniff_header(&rows)
    };

    let table = Table::build(rows, has_header, delimiter, &options)?;
    if cli.verbose {
        eprintln!(
            "{} data rows, {} columns; header: {}",
            table.data_row_count(),
            table.column_count(),
            if has_header { "yes" } else { "no" }
        );
    }

    let rendered = match options.format {
        Format::Ascii => AsciiRenderer::new().render(&table),
        Format::Markdown => MarkdownRenderer::new(options.align_markdown).render(&table),
    };

    match destination(&cli, options.format) {
        Some(path) => {
            fs::write(&path, rendered + "\n")
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            if cli.verbose {
                eprintln!("Saved table to '{}'", path.display());
            }
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Where to write the rendered table; `None` means stdout.
///
/// `--output` takes an explicit path; `--save` derives one from the input
/// base name with the format's extension or the `--save-ext` override
/// (leading dot optional).
fn destination(cli: &Cli, format: Format) -> Option<PathBuf> {
    if let Some(path) = &cli.output {
        return Some(path.clone());
    }
    if cli.save {
        let ext = match &cli.save_ext {
            Some(custom) => custom.trim_start_matches('.').to_string(),
            None => format.default_extension().to_string(),
        };
        return Some(cli.input.with_extension(ext));
    }
    None
}

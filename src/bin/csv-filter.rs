//! CLI tool to cut or filter delimited text.
//!
//! Usage:
//!   csv-filter [options] cut <field>...
//!   csv-filter [options] (prefix|match|regex) (<field> <pattern>)...
//!
//! Reads stdin (or `-f`) and writes stdout (or `-o`).

use clap::Parser;
use csv_filter::{Config, FilterError, RunSummary, build_transform, parse_char_option, run};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Cut columns from, or filter rows of, delimited text.
///
/// Fields are zero-based. Predicate commands keep a row if any
/// <field> <pattern> pair matches, or all of them with -a.
#[derive(Parser)]
#[command(name = "csv-filter", version)]
struct Cli {
    /// Delimiter character (use \t for tab)
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// Quote character
    #[arg(short, long, default_value = "\"")]
    quote: String,

    /// Comment character; input lines starting with it are skipped
    #[arg(short, long)]
    comment: Option<String>,

    /// Match all filters (AND) instead of any (OR); does not apply to cut
    #[arg(short = 'a', long = "all")]
    match_all: bool,

    /// Write the field as a plain string instead of csv (cut with one field)
    #[arg(short, long)]
    single: bool,

    /// Input file (default: stdin)
    #[arg(short = 'f', long = "file")]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug detail and record counts on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Subcommand: cut (c), prefix (p), match (m), regex (r, re, regexp)
    command: String,

    /// Field indices for cut, or <field> <pattern> pairs
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn config(&self) -> Result<Config, FilterError> {
        let comment = self
            .comment
            .as_deref()
            .map(|c| parse_char_option("--comment", c))
            .transpose()?;
        Ok(Config::new()
            .with_delimiter(parse_char_option("--delimiter", &self.delimiter)?)
            .with_quote(parse_char_option("--quote", &self.quote)?)
            .with_comment(comment)
            .with_match_all(self.match_all)
            .with_single(self.single))
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn open_input(path: &Path) -> Result<File, FilterError> {
    File::open(path).map_err(|source| FilterError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn create_output(path: &Path) -> Result<File, FilterError> {
    let open_err = |source: io::Error| FilterError::Open {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    File::create(path).map_err(open_err)
}

fn execute(cli: &Cli) -> Result<RunSummary, FilterError> {
    let config = cli.config()?;
    let transform = build_transform(&cli.command, &cli.args, &config)?;

    let input: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(open_input(path)?),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn io::Write> = match &cli.output {
        Some(path) => Box::new(create_output(path)?),
        None => Box::new(io::stdout().lock()),
    };

    run(input, output, transform.as_ref(), &config)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        let show = |path: &Option<PathBuf>, default: &str| {
            path.as_ref()
                .map_or_else(|| default.to_string(), |p| p.display().to_string())
        };
        eprintln!("Command: {} {}", cli.command, cli.args.join(" "));
        eprintln!("Input:   {}", show(&cli.input, "(stdin)"));
        eprintln!("Output:  {}", show(&cli.output, "(stdout)"));
    }

    match execute(&cli) {
        Ok(summary) => {
            if cli.verbose {
                eprintln!(
                    "Records: {} in -> {} out",
                    summary.rows_read, summary.rows_written
                );
            }
        }
        Err(e) => {
            eprintln!("csv-filter: {e}");
            process::exit(e.exit_code());
        }
    }
}

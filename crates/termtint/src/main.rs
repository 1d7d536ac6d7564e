//! termtint - convert 4-bit terminal color themes between formats.
//!
//! ```text
//! termtint theme.yml colors.xres
//! termtint -o osc theme.yml            # recolor the running terminal
//! cat theme.nidx | termtint -i nidx -o csv
//! ```
//!
//! Formats are inferred from file extensions unless given with `--ifmt` /
//! `--ofmt`. Reading stdin or writing stdout (`-`) needs the explicit flag.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use termtint_codec::{ConvertError, Direction, InputFormat, OutputFormat, Theme};

/// Path standing for stdin or stdout.
const STDIO: &str = "-";

/// Environment variable holding an `EnvFilter` directive.
const LOG_ENV: &str = "TERMTINT_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "termtint",
    version,
    about = "Convert 4-bit terminal color themes between formats"
)]
struct Cli {
    /// Input file, `-` for stdin
    #[arg(default_value = STDIO)]
    infile: PathBuf,

    /// Output file, `-` for stdout
    #[arg(default_value = STDIO)]
    outfile: PathBuf,

    /// Input format (yaml, yml, nidx, stconf, xres, csv)
    #[arg(short, long, value_name = "FORMAT")]
    ifmt: Option<InputFormat>,

    /// Output format (stconf, nidx, xres, csv, osc)
    #[arg(short, long, value_name = "FORMAT")]
    ofmt: Option<OutputFormat>,

    /// Log more (-v debug, -vv trace); TERMTINT_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print the supported format identifiers and exit
    #[arg(long)]
    list_formats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("termtint: error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list_formats {
        list_formats();
        return Ok(());
    }

    let from = input_format(cli)?;
    let to = output_format(cli)?;
    debug!(
        %from,
        %to,
        infile = %cli.infile.display(),
        outfile = %cli.outfile.display(),
        "resolved formats"
    );

    let theme = read_theme(&cli.infile, from)?;
    write_theme(&cli.outfile, to, &theme)
}

fn list_formats() {
    let inputs: Vec<_> = InputFormat::identifiers().collect();
    let outputs: Vec<_> = OutputFormat::identifiers().collect();
    println!("input: {}", inputs.join(", "));
    println!("output: {}", outputs.join(", "));
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new(STDIO)
}

/// Explicit `--ifmt`, else the input file's extension.
fn input_format(cli: &Cli) -> Result<InputFormat> {
    if let Some(format) = cli.ifmt {
        return Ok(format);
    }
    if is_stdio(&cli.infile) {
        bail!("--ifmt must be given when reading stdin");
    }
    InputFormat::from_path(&cli.infile).ok_or_else(|| {
        ConvertError::UnsupportedFormat {
            direction: Direction::Input,
            identifier: cli.infile.display().to_string(),
        }
        .into()
    })
}

/// Explicit `--ofmt`, else the output file's extension.
fn output_format(cli: &Cli) -> Result<OutputFormat> {
    if let Some(format) = cli.ofmt {
        return Ok(format);
    }
    if is_stdio(&cli.outfile) {
        bail!("--ofmt must be given when writing to stdout");
    }
    OutputFormat::from_path(&cli.outfile).ok_or_else(|| {
        ConvertError::UnsupportedFormat {
            direction: Direction::Output,
            identifier: cli.outfile.display().to_string(),
        }
        .into()
    })
}

fn read_theme(path: &Path, format: InputFormat) -> Result<Theme> {
    if is_stdio(path) {
        return format
            .decode(&mut io::stdin().lock())
            .context("failed to read theme from stdin");
    }

    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    format
        .decode(&mut BufReader::new(file))
        .with_context(|| format!("failed to read theme from {}", path.display()))
}

/// Writes the theme. The output file is only created here, after decoding
/// succeeded, so a bad input never truncates an existing target.
fn write_theme(path: &Path, format: OutputFormat, theme: &Theme) -> Result<()> {
    if is_stdio(path) {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        format.encode(theme, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    format
        .encode(theme, &mut out)
        .and_then(|()| out.flush().map_err(ConvertError::from))
        .with_context(|| format!("failed to write {}", path.display()))
}

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use hhh_core::Format;
use serde::Serialize;
use tracing::{debug, error, Level};

/// Human readable HTML Helper
///
/// Retrieve HTML content via HTTP requests or local file reading, extract the
/// primary textual content from the page, then render it in a human-readable
/// format (e.g. Markdown).
#[derive(Debug, Parser, Serialize)]
#[command(name = "hhh", version)]
struct Options {
    /// URL, file path, or `-` for standard input (the default)
    targets: Vec<String>,

    /// Output format. One of: (markdown, html)
    #[arg(short, long, default_value = "markdown")]
    format: String,

    /// Write to file instead of stdout
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PathBuf>,

    /// Number for the log level verbosity (0, 1, or 2)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=2)
    )]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(opts: &Options) -> anyhow::Result<()> {
    debug!(options = %serde_json::to_string(opts)?, "parsed command line");

    let sink: Box<dyn Write> = match &opts.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("open {path:?}"))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };
    let format = Format::from_name(&opts.format);
    let mut writer = format.writer(sink);

    let targets = if opts.targets.is_empty() {
        vec![String::new()]
    } else {
        opts.targets.clone()
    };

    let mut failures = Vec::new();
    for target in &targets {
        debug!(input = %target, %format, "converting");
        if let Err(err) = hhh::convert(target, writer.as_mut()) {
            error!(input = %target, "{err}");
            failures.push(err.to_string());
        }
    }

    if !failures.is_empty() {
        bail!(
            "{} of {} targets failed:\n{}",
            failures.len(),
            targets.len(),
            failures.join("\n")
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let opts = Options::parse();
    init_logging(opts.verbose);

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

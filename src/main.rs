//! Purpose: `sync-manifest-json` CLI entry point.
//! Role: Binary crate root; parses args, runs the converter, reports the outcome.
//! Invariants: User-facing messages are plain text on stdout.
//! Invariants: Diagnostics go through `tracing` on stderr, filtered by `RUST_LOG`.
//! Invariants: Process exit code is derived from `to_exit_code`.
use std::error::Error as StdError;
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, ValueHint, error::ErrorKind as ClapErrorKind};
use tracing_subscriber::EnvFilter;

use sync_manifest::manifest_paths::default_manifest_path;
use sync_manifest::{ConvertOutcome, Error, ErrorKind, convert, to_exit_code};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

#[derive(Parser)]
#[command(
    name = "sync-manifest-json",
    version,
    about = "Render examples-manifest.json into SHELLY_MJS.md for backward compatibility",
    long_about = None,
    after_help = r#"The output SHELLY_MJS.md is written in the same directory as the input file.

EXAMPLES
  $ sync-manifest-json                            # ../examples-manifest.json next to the tool dir
  $ sync-manifest-json ../examples-manifest.json"#
)]
struct Cli {
    #[arg(
        help = "Path to the JSON manifest (default: examples-manifest.json one directory above the tool)",
        value_hint = ValueHint::FilePath,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    file: Option<PathBuf>,
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                return Ok(RunOutcome::ok());
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(clap_error_summary(&err))
                    .with_hint("Try `sync-manifest-json --help`."));
            }
        },
    };

    let input = match cli.file {
        Some(file) if file.as_os_str().is_empty() => {
            return Err(Error::new(ErrorKind::Usage)
                .with_message("missing file argument")
                .with_hint("Pass the path to examples-manifest.json, or omit it for the default."));
        }
        Some(file) => file,
        None => default_manifest_path()?,
    };
    tracing::debug!(input = %input.display(), "resolved manifest path");

    match convert(&input)? {
        ConvertOutcome::Written { path, records } => {
            tracing::info!(output = %path.display(), records, "wrote legacy manifest");
        }
        ConvertOutcome::EmptyManifest => {
            tracing::warn!(input = %input.display(), "manifest is empty; no output written");
        }
    }
    Ok(RunOutcome::ok())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn emit_error(err: &Error) {
    println!("{}", error_text(err));
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::NotFound => "file not found".to_string(),
        ErrorKind::Parse => "parse error".to_string(),
        ErrorKind::MissingField => "missing field".to_string(),
        ErrorKind::InvalidRecord => "invalid record".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_text(err: &Error) -> String {
    let mut lines = vec![format!("error: {}", error_message(err))];
    if let Some(hint) = err.hint() {
        lines.push(format!("hint: {hint}"));
    }
    if let Some(path) = err.path() {
        lines.push(format!("path: {}", path.display()));
    }
    if let Some(record) = err.record() {
        lines.push(format!("record: {record}"));
    }
    if let Some(key) = err.key() {
        lines.push(format!("key: {key}"));
    }
    for cause in error_causes(err) {
        lines.push(format!("caused by: {cause}"));
    }
    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

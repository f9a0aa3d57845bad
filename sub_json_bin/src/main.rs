use serde_json::Value;
use sub_json::CompiledPath;

use clap::Parser;
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{debug, info, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to extract, e.g. `a.b[2].c`.
    path: String,

    /// Read the document from a file instead of stdin.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Treat every non-empty input line as a separate document.
    #[arg(short, long)]
    lines: bool,

    /// Decode the extracted value and pretty-print it.
    #[arg(short, long)]
    decode: bool,

    /// More logging on stderr, repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = read_input(args.file.as_deref())?;
    debug!(bytes = input.len(), "read input");

    let stdout = io::stdout();
    let found = run(&args, &input, &mut stdout.lock())?;
    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(file) => fs::read_to_string(file),
        None => {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json)?;
            Ok(json)
        }
    }
}

/// Writes one result per document and tells whether every document had a value
/// at the path.
fn run(args: &Args, input: &str, out: &mut impl Write) -> Result<bool, Box<dyn Error>> {
    let compiled = match CompiledPath::parse(&args.path) {
        Ok(compiled) => compiled,
        Err(e) => {
            warn!(path = %args.path, "{}", e);
            return Ok(false);
        }
    };
    info!(path = %compiled, "compiled path");

    if !args.lines {
        return match compiled.extract(input) {
            Some(raw) => {
                writeln!(out, "{}", render(raw, args.decode)?)?;
                Ok(true)
            }
            None => {
                warn!(path = %args.path, "path not found");
                Ok(false)
            }
        };
    }

    let mut all_found = true;
    for (n, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match compiled.extract(line) {
            Some(raw) => writeln!(out, "{}", render(raw, args.decode)?)?,
            None => {
                warn!(line = n + 1, path = %args.path, "path not found");
                all_found = false;
                writeln!(out)?;
            }
        }
    }
    Ok(all_found)
}

fn render(raw: &str, decode: bool) -> Result<String, Box<dyn Error>> {
    if !decode {
        return Ok(raw.to_string());
    }
    let value = Value::from_str(raw)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

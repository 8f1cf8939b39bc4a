use std::{fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use clap::Parser;
use minisquare::{
    display_error,
    errors::errors::ErrorReporter,
    lexer::lexer::tokenize,
};
use tracing_subscriber::EnvFilter;

/// Tokenizes a MiniSquare source file and lists the tokens and any lexical errors.
#[derive(Parser, Debug)]
#[command(name = "minisquare")]
#[command(version, about)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Log scanner activity at debug level (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Only report errors, do not list tokens
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let file_name = cli.file.to_string_lossy().to_string();
    let file_contents = match read_to_string(&cli.file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_name, error);
            exit(2);
        }
    };

    let start = Instant::now();
    let mut reporter = ErrorReporter::new();
    let tokens = tokenize(&file_contents, &mut reporter);
    tracing::info!("Tokenized in {:?}", start.elapsed());

    if !cli.quiet {
        for token in &tokens {
            token.debug();
        }
    }

    for error in reporter.errors() {
        display_error(error, &file_contents, &file_name);
    }

    if reporter.has_errors() {
        eprintln!(
            "{} lexical error(s) in {}",
            reporter.error_count(),
            file_name
        );
        exit(1);
    }
}

//! Command-line interface for unlog
//! Removes console.log statements from a JavaScript or TypeScript file in place.
//!
//! Usage:
//!   unlog `<path>` [--config `<file>`] [--json]
//!
//! The original content is saved next to the input as `<path>.backup` before the file is
//! overwritten. An `unlog.toml` in the input's directory is picked up automatically;
//! `--config` is layered over it. Set `RUST_LOG=unlog=debug` to see what the scanner is
//! doing.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::process;
use unlog::unlog::config::{load_for_input, UnlogConfig};
use unlog::unlog::error::CleanError;
use unlog::unlog::pipeline::{check_extension, process_file, ExtensionCheck};

fn main() {
    init_tracing();

    let matches = cli().try_get_matches().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            process::exit(1);
        }
    });

    let Some(path) = matches.get_one::<String>("path") else {
        print_usage();
        eprintln!("❌ Error: {}", CleanError::MissingArgument);
        process::exit(1);
    };

    let config =
        load_config(Path::new(path), matches.get_one::<String>("config")).unwrap_or_else(fail);

    if let ExtensionCheck::Unrecognized { .. } = check_extension(Path::new(path), &config.files) {
        warn_extension(path, &config);
    }

    let report = process_file(path, &config).unwrap_or_else(fail);

    if matches.get_flag("json") {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => fail(CleanError::Io(e.to_string())),
        }
    } else {
        print!("{}", report.to_text());
    }
}

fn cli() -> Command {
    Command::new("unlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Removes console.log statements from JavaScript and TypeScript files")
        .arg(
            Arg::new("path")
                .help("Path to the file to clean")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the defaults and any unlog.toml next to the input"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the statistics as JSON")
                .action(ArgAction::SetTrue),
        )
}

fn load_config(input: &Path, explicit: Option<&String>) -> Result<UnlogConfig, CleanError> {
    Ok(load_for_input(input, explicit.map(Path::new))?)
}

fn warn_extension(path: &str, config: &UnlogConfig) {
    let supported = config
        .files
        .extensions
        .iter()
        .map(|ext| format!(".{}", ext.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(", ");

    eprintln!(
        "⚠️  Warning: File '{}' doesn't appear to be a JavaScript/TypeScript file.",
        path
    );
    eprintln!("Supported extensions: {}", supported);
    eprintln!("Proceeding anyway...");
}

fn print_usage() {
    println!("unlog - Removes console.log statements from JavaScript files");
    println!("Usage: unlog <filename>");
    println!("Example: unlog content.js");
    println!("\n🔧 Features:");
    println!("   • Handles multi-line console.log statements");
    println!("   • Preserves strings, template literals, and nested expressions");
    println!("   • Creates automatic backup files");
    println!("   • Provides detailed statistics");
    println!("\n⚠️  This tool modifies files in place. Backups are created automatically.");
}

fn fail<T>(err: CleanError) -> T {
    eprintln!("❌ Error: {}", err);
    process::exit(1);
}

/// Install a tracing subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

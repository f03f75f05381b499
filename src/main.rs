//! dirstride - Lazy directory tree enumeration from the command line.
//!
//! Usage:
//!   dirstride [PATH]          Quick top-level listing
//!   dirstride list [PATH]     List matching files (optionally recursive)
//!   dirstride count [PATH]    Count files and directories without listing
//!   dirstride --help          Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use dirstride_core::{FileRecord, SearchScope};
use dirstride_walk::{count, enumerate};

#[derive(Parser)]
#[command(
    name = "dirstride",
    version,
    about = "Lazy directory tree enumeration",
    long_about = "dirstride walks directory trees one entry at a time, keeping a \
                  single directory handle open no matter how deep the tree goes.\n\n\
                  Run `dirstride [PATH]` for a quick top-level listing, or use the \
                  `list` and `count` subcommands for glob filtering and recursive \
                  traversal."
)]
struct Cli {
    /// Path to list (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Log skipped filesystem errors to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List matching files one per line
    List {
        /// Directory to walk
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Glob applied to every file and directory name (e.g., "*.log")
        #[arg(short, long, default_value = "*")]
        pattern: String,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Count files and directories without listing them
    Count {
        /// Directory to walk
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Glob applied to every file and directory name (e.g., "*.log")
        #[arg(short, long, default_value = "*")]
        pattern: String,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Command::List {
            path,
            pattern,
            recursive,
            format,
        }) => {
            run_list(&path, &pattern, scope_for(recursive), format)?;
        }
        Some(Command::Count {
            path,
            pattern,
            recursive,
            format,
        }) => {
            run_count(&path, &pattern, scope_for(recursive), format)?;
        }
        None => {
            run_list(&cli.path, "*", scope_for(cli.recursive), OutputFormat::Text)?;
        }
    }

    Ok(())
}

/// Stream matching files to stdout, then summarize on stderr.
fn run_list(path: &PathBuf, pattern: &str, scope: SearchScope, format: OutputFormat) -> Result<()> {
    let walk = enumerate(path, pattern, scope)?;
    let mut walker = walk.iter();

    for record in walker.by_ref() {
        print_record(&record, format)?;
    }

    let counts = walker.counts();
    eprintln!(
        " {} files, {} directories",
        counts.files, counts.directories
    );

    Ok(())
}

/// Tally the tree without building a record per file.
fn run_count(
    path: &PathBuf,
    pattern: &str,
    scope: SearchScope,
    format: OutputFormat,
) -> Result<()> {
    let counts = count(path, pattern, scope)?;

    match format {
        OutputFormat::Text => {
            println!("{}", "─".repeat(60));
            println!(" {}", path.display());
            println!(
                " {} files, {} directories ({} entries)",
                counts.files,
                counts.directories,
                counts.total()
            );
            println!("{}", "─".repeat(60));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&counts)?);
        }
    }

    Ok(())
}

fn print_record(record: &FileRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!(
                "{:>10}  {}  {}",
                format_size(record.size),
                record.timestamps.modified_local().format("%Y-%m-%d %H:%M"),
                record.path.display()
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(record)?);
        }
    }

    Ok(())
}

fn scope_for(recursive: bool) -> SearchScope {
    if recursive {
        SearchScope::Recursive
    } else {
        SearchScope::TopLevel
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// An explicit `RUST_LOG` wins; otherwise `--verbose` selects the level.
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "dirstride_walk=debug,warn"
        } else {
            "warn"
        })
    })
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns RUST_LOG: the variable is process-global.
    #[test]
    fn test_log_filter_honors_rust_log() {
        unsafe { std::env::remove_var("RUST_LOG") };
        assert_eq!(log_filter(false).to_string(), "warn");
        assert!(log_filter(true).to_string().contains("dirstride_walk=debug"));

        unsafe { std::env::set_var("RUST_LOG", "dirstride_walk=trace") };
        let filter = log_filter(false).to_string();
        unsafe { std::env::remove_var("RUST_LOG") };
        assert!(filter.contains("dirstride_walk=trace"));
    }
}

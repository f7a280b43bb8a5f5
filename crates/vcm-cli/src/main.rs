//! CLI entry point for the vue-class-migrate tool.
//!
//! Migrates one Vue page at a time to the BEM class names of its page
//! block and empties its inline SCSS block, rewriting the file in place.
//!
//! # Usage
//!
//! ```bash
//! vue-class-migrate app/pages/editor.vue
//! vue-class-migrate app/pages/admin.vue
//! vue-class-migrate app/pages/queue-status.vue
//! ```
//!
//! Files whose name matches none of the known pages only get their style
//! block stripped.

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vcm_core::RewriteConfig;
use vcm_rewrite::{FileReport, rewrite_file};

/// Name of the installed binary, used in the usage line.
const BIN_NAME: &str = "vue-class-migrate";

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Renames legacy CSS classes in a Vue page to its BEM block names and
/// strips the page's inline SCSS block.
#[derive(Parser)]
#[command(name = BIN_NAME, version, about, long_about = None)]
struct Cli {
    /// Vue file to rewrite in place.
    file: Option<Utf8PathBuf>,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects `RUST_LOG` if set, otherwise logs at `info`. Output goes to
/// stderr so stdout only carries the confirmation line. `NO_COLOR`
/// disables ANSI colors.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_ansi = std::env::var_os("NO_COLOR").is_none();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

fn usage() -> String {
    format!("Usage: {BIN_NAME} <file>")
}

fn confirmation(report: &FileReport) -> String {
    format!("✅ Updated: {}", report.path)
}

// =============================================================================
// COMMAND IMPLEMENTATION
// =============================================================================

/// How a run ended, short of an error.
#[derive(Debug)]
enum Status {
    /// No file was given; the usage line was printed.
    Usage,
    /// The file was rewritten.
    Updated(FileReport),
}

impl Status {
    /// Process exit code for this status.
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage => ExitCode::FAILURE,
            Self::Updated(_) => ExitCode::SUCCESS,
        }
    }
}

/// Rewrites the file named on the command line, writing the usage or
/// confirmation line to `out`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or if `out`
/// cannot be written to.
fn run(cli: Cli, out: &mut impl Write) -> color_eyre::Result<Status> {
    let Some(path) = cli.file else {
        warn!("No file argument given");
        writeln!(out, "{}", usage())?;
        return Ok(Status::Usage);
    };

    info!(path = %path, "Migrating file");
    let report = rewrite_file(&path, &RewriteConfig::default())
        .wrap_err_with(|| format!("Failed to migrate {path}"))?;

    writeln!(out, "{}", confirmation(&report))?;
    Ok(Status::Updated(report))
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<ExitCode> {
    // Install color-eyre before anything can fail
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let status = run(cli, &mut handle)?;

    Ok(status.exit_code())
}

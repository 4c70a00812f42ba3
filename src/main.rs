//! # npmss
//!
//! Browse the `scripts` section of a `package.json` and run a script
//! interactively.
//!
//! ## Usage
//!
//! - In a package directory (or any subdirectory): `npmss`
//! - Point at a manifest: `npmss -f path/to/package.json`
//! - Fuzzy search: `npmss --search`
//! - Narrow the first selection: `npmss -q build`
//!
//! See README.md for more details.

use clap::Parser as ClapParser;
use npmss::app::{self, Options};
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the npmss tool.
#[derive(ClapParser)]
#[command(name = "npmss")]
#[command(version = PKG_VERSION)]
#[command(about = "Browse and run the npm scripts of a package.json", long_about = None)]
struct Cli {
    /// Path to the package.json (defaults to the nearest one, searching upwards)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Banner text shown at startup
    #[arg(short, long, value_name = "TEXT")]
    banner: Option<String>,

    /// Do not print the startup banner
    #[arg(long)]
    hide_banner: bool,

    /// Only offer scripts whose name contains this query (first selection only)
    #[arg(short, long, value_name = "QUERY")]
    query: Option<String>,

    /// Use a fuzzy-search prompt instead of the static list
    #[arg(short, long)]
    search: bool,
}

/// Entry point for the CLI tool.
fn main() {
    let cli = Cli::parse();

    let options = Options {
        file: cli.file,
        banner: cli.banner,
        hide_banner: cli.hide_banner,
        query: cli.query,
        search: cli.search,
    };

    std::process::exit(app::run(&options));
}

//! The selection loop: pick a script, run it, ask to go again.

use crate::search::DebouncedFilter;
use crate::selector::{self, Mode};
use crate::{banner, executor, fatal_error, manifest};
use std::path::{Path, PathBuf};

/// Default banner text when `--banner` is not given.
pub const DEFAULT_BANNER: &str = "npm script selector";

/// Resolved CLI options for a single run.
pub struct Options {
    /// Explicit manifest path; the nearest `package.json` is located when
    /// absent.
    pub file: Option<PathBuf>,
    /// Banner text override.
    pub banner: Option<String>,
    /// Suppress the banner entirely.
    pub hide_banner: bool,
    /// Initial query narrowing the first selection.
    pub query: Option<String>,
    /// Present the fuzzy-search prompt instead of the static list.
    pub search: bool,
}

/// Run the tool to completion and return the process exit code.
///
/// The manifest is read once; each loop iteration is one
/// selection/execution/confirmation cycle. A failed script is reported and
/// the loop keeps going, but declining the continuation prompt right after
/// a failure exits non-zero.
pub fn run(options: &Options) -> i32 {
    if !options.hide_banner {
        banner::print(options.banner.as_deref().unwrap_or(DEFAULT_BANNER));
    }

    let manifest_path = match &options.file {
        Some(file) => resolve_or_exit(Some(file)),
        None => {
            let path = resolve_or_exit(None);
            println!("Using package.json found at: {}", path.display());
            path
        }
    };

    let entries =
        manifest::load_scripts(&manifest_path).unwrap_or_else(|e| fatal_error(&e.to_string()));

    // Scripts run in the manifest's directory, not wherever the tool was
    // invoked from.
    let package_dir = manifest_path
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    if let Err(message) = executor::check_npm_available() {
        fatal_error(&message);
    }

    let filter = DebouncedFilter::default();
    let mode = if options.search {
        Mode::Search
    } else {
        Mode::List
    };

    // The initial query only narrows the first selection.
    let mut query = options.query.as_deref();
    let mut last_run_failed = false;

    let exit_code = loop {
        let chosen = match selector::choose(&entries, query, &filter, mode) {
            Ok(Some(entry)) => entry,
            Ok(None) => break 0,
            Err(e) => fatal_error(&format!("Error reading selection: {}", e)),
        };
        query = None;

        match executor::run_script(&chosen.name, &package_dir) {
            Ok(outcome) if outcome.success() => {
                println!("Script exited successfully.");
                last_run_failed = false;
            }
            Ok(outcome) => {
                eprintln!("Script '{}' {}", chosen.name, outcome);
                last_run_failed = true;
            }
            Err(e) => {
                eprintln!("Error starting script: {}", e);
                last_run_failed = true;
            }
        }

        match selector::confirm_continue() {
            Ok(true) => {}
            Ok(false) => break i32::from(last_run_failed),
            Err(e) => fatal_error(&format!("Error reading input: {}", e)),
        }
    };

    println!("Goodbye!");
    exit_code
}

fn resolve_or_exit(explicit: Option<&Path>) -> PathBuf {
    manifest::resolve_manifest_path(explicit).unwrap_or_else(|e| fatal_error(&e.to_string()))
}

//! # npmss
//!
//! An interactive selector for the `scripts` section of a `package.json`.
//! Point it at a manifest (or let it find the nearest one), pick a script
//! from the list, and it runs `npm run <name>` in the package directory.

pub mod app;
pub mod banner;
pub mod executor;
pub mod manifest;
pub mod search;
pub mod selector;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

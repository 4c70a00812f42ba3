//! Manifest (`package.json`) discovery and script catalog loading.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the locator searches for.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// A named command extracted from the manifest's `scripts` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub name: String,
    pub command: String,
}

/// Errors raised while locating or loading a manifest. All of these are
/// fatal to the run; script execution failures are reported elsewhere.
#[derive(Debug)]
pub enum ManifestError {
    /// No `package.json` found at the given path or anywhere up to the root.
    NotFound(Option<PathBuf>),
    /// The file could not be read or is not valid JSON.
    Parse(PathBuf, String),
    /// The manifest has no `scripts` section, or the section is empty.
    NoScripts,
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::NotFound(Some(path)) => {
                write!(f, "File not found at: {}", path.display())
            }
            ManifestError::NotFound(None) => write!(
                f,
                "No package.json found in the current directory or any parent directory."
            ),
            ManifestError::Parse(path, message) => {
                write!(
                    f,
                    "Error reading or parsing JSON file {}: {}",
                    path.display(),
                    message
                )
            }
            ManifestError::NoScripts => write!(
                f,
                "No \"scripts\" section found in the package.json file. Did you provide the right package path?"
            ),
        }
    }
}

impl std::error::Error for ManifestError {}

/// Serde view of the manifest. Only the `scripts` map is of interest;
/// `preserve_order` keeps declaration order in the underlying map.
#[derive(Deserialize)]
struct PackageManifest {
    scripts: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Search for a `package.json` starting at `start_dir` and walking up
/// through each parent, the filesystem root included. Returns the first
/// match, or `None` if no manifest exists anywhere on the path.
#[must_use]
pub fn find_manifest_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        let candidate = current_dir.join(MANIFEST_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve the manifest path for this run.
///
/// An explicit path is absolutized and used as-is (existence is checked when
/// the file is loaded). Otherwise the nearest `package.json` is located by
/// walking up from the current directory.
///
/// # Errors
///
/// Returns `ManifestError::NotFound` if no explicit path was given and no
/// manifest exists between the current directory and the root.
pub fn resolve_manifest_path(explicit: Option<&Path>) -> Result<PathBuf, ManifestError> {
    if let Some(path) = explicit {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| ManifestError::Parse(path.to_path_buf(), e.to_string()))?
                .join(path)
        };
        return Ok(absolute);
    }

    let current_dir = std::env::current_dir()
        .map_err(|e| ManifestError::Parse(PathBuf::from("."), e.to_string()))?;
    find_manifest_from(&current_dir).ok_or(ManifestError::NotFound(None))
}

/// Load the script catalog from a manifest file, in declaration order.
///
/// # Errors
///
/// Returns `NotFound` if the file does not exist, `Parse` if it is not a
/// JSON object with string-valued scripts, and `NoScripts` if the `scripts`
/// section is absent or empty.
pub fn load_scripts(path: &Path) -> Result<Vec<ScriptEntry>, ManifestError> {
    if !path.is_file() {
        return Err(ManifestError::NotFound(Some(path.to_path_buf())));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ManifestError::Parse(path.to_path_buf(), e.to_string()))?;
    let manifest: PackageManifest = serde_json::from_str(&content)
        .map_err(|e| ManifestError::Parse(path.to_path_buf(), e.to_string()))?;

    let Some(scripts) = manifest.scripts else {
        return Err(ManifestError::NoScripts);
    };

    let mut entries = Vec::with_capacity(scripts.len());
    for (name, value) in scripts {
        let Some(command) = value.as_str() else {
            return Err(ManifestError::Parse(
                path.to_path_buf(),
                format!("script \"{}\" is not a string", name),
            ));
        };
        entries.push(ScriptEntry {
            name,
            command: command.to_string(),
        });
    }

    if entries.is_empty() {
        return Err(ManifestError::NoScripts);
    }

    Ok(entries)
}

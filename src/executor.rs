//! Child process execution for the selected script.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// How a script's child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
    /// Signal number that terminated the process (Unix only).
    pub signal: Option<i32>,
}

impl RunOutcome {
    #[must_use]
    pub fn from_status(status: ExitStatus) -> Self {
        Self {
            exit_code: status.code(),
            signal: status_signal(status),
        }
    }

    /// A script run is successful only on a clean zero exit.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.exit_code, self.signal) {
            (Some(code), _) => write!(f, "exited with code {}", code),
            (None, Some(signal)) => write!(f, "terminated by signal {}", signal),
            (None, None) => write!(f, "terminated abnormally"),
        }
    }
}

#[cfg(unix)]
fn status_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn status_signal(_status: ExitStatus) -> Option<i32> {
    None
}

/// Name of the npm executable for the current platform. Windows installs
/// npm as a cmd shim which `Command::new("npm")` will not find.
#[must_use]
pub fn npm_executable() -> &'static str {
    if cfg!(target_os = "windows") && which::which("npm.cmd").is_ok() {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Check that npm is available before entering the selection loop, so the
/// failure mode is a clear diagnostic rather than a spawn error per script.
///
/// # Errors
///
/// Returns `Err` with a user-facing message if npm is not on the PATH.
pub fn check_npm_available() -> Result<(), String> {
    which::which(npm_executable())
        .map(|_| ())
        .map_err(|_| "npm not found on PATH. Is Node.js installed?".to_string())
}

/// Run `npm run <name>` in `dir` with stdio inherited from this process,
/// blocking until the child exits.
///
/// # Errors
///
/// Returns `Err` only if the child could not be spawned; a non-zero exit or
/// signal is reported through the returned `RunOutcome` instead.
pub fn run_script(name: &str, dir: &Path) -> io::Result<RunOutcome> {
    let mut command = Command::new(npm_executable());
    command.arg("run").arg(name).current_dir(dir);
    wait_for(&mut command)
}

/// Spawn a prepared command with inherited stdio and wait for it.
fn wait_for(command: &mut Command) -> io::Result<RunOutcome> {
    let status = command.status()?;
    Ok(RunOutcome::from_status(status))
}

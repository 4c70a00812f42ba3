//! Interactive prompts: script selection and the continuation confirm.

use crate::manifest::ScriptEntry;
use crate::search::DebouncedFilter;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Select};

/// How the candidate list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Static list; the user picks with the arrow keys.
    List,
    /// Fuzzy search; the list narrows as the user types.
    Search,
}

const SELECT_PROMPT: &str = "Select a script to run:";

/// Prompt the user to choose a script.
///
/// A query narrows the candidates through the debounced substring filter
/// first; if nothing matches, the full list is offered instead. Returns
/// `Ok(None)` when the user cancels the prompt (Esc).
///
/// # Errors
///
/// Returns `Err` if the terminal interaction fails, e.g. when stdin is not
/// a TTY.
pub fn choose<'a>(
    entries: &'a [ScriptEntry],
    query: Option<&str>,
    filter: &DebouncedFilter,
    mode: Mode,
) -> dialoguer::Result<Option<&'a ScriptEntry>> {
    let mut candidates: Vec<&ScriptEntry> = match query {
        Some(query) if !query.is_empty() => filter.filter(entries, query),
        _ => entries.iter().collect(),
    };

    if candidates.is_empty() {
        if let Some(query) = query {
            eprintln!("No scripts match '{}'; showing all scripts.", query);
        }
        candidates = entries.iter().collect();
    }

    let items: Vec<&str> = candidates.iter().map(|entry| entry.name.as_str()).collect();
    let theme = ColorfulTheme::default();

    let chosen = match mode {
        Mode::List => Select::with_theme(&theme)
            .with_prompt(SELECT_PROMPT)
            .items(&items)
            .default(0)
            .interact_opt()?,
        Mode::Search => FuzzySelect::with_theme(&theme)
            .with_prompt(SELECT_PROMPT)
            .items(&items)
            .default(0)
            .interact_opt()?,
    };

    Ok(chosen.map(|index| candidates[index]))
}

/// Ask whether to run another script. Defaults to yes.
///
/// # Errors
///
/// Returns `Err` if the terminal interaction fails.
pub fn confirm_continue() -> dialoguer::Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you want to run another script?")
        .default(true)
        .interact()
}

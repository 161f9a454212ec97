//! Lightweight LaTeX cleanup for frame titles.
//!
//! Titles are plain strings, not block markup, so they get a much simpler
//! treatment than frame bodies: unwrap command arguments, drop bare
//! commands, drop stray braces.

use regex::Regex;
use std::sync::LazyLock;

/// `\command[opt]{arg}` with a single brace-delimited argument; the argument
/// text survives, the wrapper does not.
static WRAPPED_COMMAND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\*?(?:\[[^\]]*\])?\{([^}]*)\}").unwrap());

/// Bare `\command` with no argument.
static BARE_COMMAND_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+").unwrap());

/// Strip residual LaTeX commands and braces from a title string.
///
/// Single pass; a doubly-nested command wrapper leaves its inner wrapper
/// behind, which is acceptable for the short plain titles frames carry.
pub fn clean_title(text: &str) -> String {
    let cleaned = WRAPPED_COMMAND_REGEX.replace_all(text, "$1");
    let cleaned = BARE_COMMAND_REGEX.replace_all(&cleaned, "");
    cleaned.replace(['{', '}'], "").trim().to_string()
}

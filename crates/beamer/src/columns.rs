//! Conversion of Beamer column layouts to a two-pane container.
//!
//! Width specifications on `columns` and `column` are discarded; the output
//! is always two equal panes, proportional widths are not modeled.

use regex::Regex;
use std::sync::LazyLock;

use crate::math::with_math_masked;

static COLUMNS_BEGIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\{columns\}(?:\[[^\]]*\])?").unwrap());

static COLUMN_BEGIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\{column\}\{[^}]*\}").unwrap());

/// Replace a `columns` region with an enclosing two-pane container and each
/// nested `column` with a pane. Bytes inside math regions are never altered.
pub fn convert_columns(text: &str) -> String {
    with_math_masked(text, replace_columns)
}

fn replace_columns(text: &str) -> String {
    let out = COLUMNS_BEGIN_REGEX.replace_all(text, "<div class=\"two-column\">");
    let out = out.replace("\\end{columns}", "</div>");
    let out = COLUMN_BEGIN_REGEX.replace_all(&out, "<div class=\"column\">");
    out.replace("\\end{column}", "</div>")
}

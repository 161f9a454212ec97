//! Inline formatting rewrites, applied outside math regions only.

use regex::Regex;
use std::sync::LazyLock;

use crate::math::apply_outside_math;

static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\textbf\{([^}]*)\}").unwrap());

static ITALIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\textit\{([^}]*)\}").unwrap());

static EMPH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\emph\{([^}]*)\}").unwrap());

/// Color information is discarded; only the wrapped content survives.
static TEXTCOLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\textcolor\{[^}]*\}\{([^}]*)\}").unwrap());

/// Rewrite bold/italic/emphasis wrappers to inline markers, unwrap color
/// commands, and convert `\newline` to a line break. Must run after math
/// spans are finalized; bytes inside math regions are never touched.
pub fn convert_formatting(text: &str) -> String {
    apply_outside_math(text, |segment| {
        let out = BOLD_REGEX.replace_all(segment, "<strong>$1</strong>");
        let out = ITALIC_REGEX.replace_all(&out, "<em>$1</em>");
        let out = EMPH_REGEX.replace_all(&out, "<em>$1</em>");
        let out = TEXTCOLOR_REGEX.replace_all(&out, "$1");
        out.replace("\\newline", "<br>")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(
            convert_formatting("\\textbf{Hello}"),
            "<strong>Hello</strong>"
        );
    }

    #[test]
    fn test_italic_and_emph() {
        assert_eq!(convert_formatting("\\textit{a}"), "<em>a</em>");
        assert_eq!(convert_formatting("\\emph{b}"), "<em>b</em>");
    }

    #[test]
    fn test_textcolor_unwrapped() {
        assert_eq!(convert_formatting("\\textcolor{red}{alert}"), "alert");
    }

    #[test]
    fn test_newline_becomes_break() {
        assert_eq!(convert_formatting("one\\newline two"), "one<br> two");
    }

    #[test]
    fn test_math_region_is_shielded() {
        let input = "bold \\textbf{x} and $\\textbf{y}$";
        let out = convert_formatting(input);
        assert_eq!(out, "bold <strong>x</strong> and $\\textbf{y}$");
    }

    #[test]
    fn test_display_math_is_shielded() {
        let input = "$$\\textcolor{red}{z}$$";
        assert_eq!(convert_formatting(input), input);
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(convert_formatting("nothing fancy"), "nothing fancy");
    }
}

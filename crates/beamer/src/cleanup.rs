//! Final cleanup pass for residual low-value commands.
//!
//! Runs after every structural conversion, so anything it sees is leftover
//! noise: spacing, centering, ellipsis glyphs, empty paragraphs, blank-line
//! runs. Command removal stays outside math spans; KaTeX still needs
//! `\quad` and friends inside `$...$`. Idempotent by construction.

use regex::Regex;
use std::sync::LazyLock;

static VSPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\vspace\{[^}]*\}").unwrap());

static HSPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\hspace\{[^}]*\}").unwrap());

static EMPTY_PARAGRAPH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>\s*</p>").unwrap());

/// Three or more consecutive line breaks, possibly with trailing blanks.
static BLANK_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap());

use crate::math::apply_outside_math;

/// Glyph substitutions and plain strips, applied in order.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\\begin{center}", ""),
    ("\\end{center}", ""),
    ("\\vdots", "\u{22ee}"),
    ("\\ldots", "\u{2026}"),
    ("\\cdots", "\u{22ef}"),
    ("\\qquad", "  "),
    ("\\quad", " "),
    ("\\hfill", ""),
    ("\\smallskip", ""),
    ("\\medskip", ""),
    ("\\bigskip", ""),
    ("\\noindent", ""),
    ("\\centering", ""),
];

/// Remove residual formatting commands and collapse blank-line runs.
pub fn cleanup(text: &str) -> String {
    let out = apply_outside_math(text, |segment| {
        let mut seg = segment.to_string();
        for &(from, to) in SUBSTITUTIONS {
            seg = seg.replace(from, to);
        }
        let seg = VSPACE_REGEX.replace_all(&seg, "");
        HSPACE_REGEX.replace_all(&seg, "").into_owned()
    });

    let out = EMPTY_PARAGRAPH_REGEX.replace_all(&out, "");
    let out = BLANK_RUN_REGEX.replace_all(&out, "\n\n");
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_commands_removed() {
        assert_eq!(cleanup("a\\vspace{1em}b\\hspace{2pt}c"), "abc");
        assert_eq!(cleanup("a\\smallskip b\\bigskip c"), "a b c");
    }

    #[test]
    fn test_centering_removed() {
        assert_eq!(cleanup("\\begin{center}x\\end{center}"), "x");
        assert_eq!(cleanup("\\centering y"), "y");
    }

    #[test]
    fn test_ellipsis_glyphs() {
        assert_eq!(cleanup("a \\ldots b"), "a \u{2026} b");
        assert_eq!(cleanup("\\vdots"), "\u{22ee}");
        assert_eq!(cleanup("\\cdots"), "\u{22ef}");
    }

    #[test]
    fn test_quad_becomes_space() {
        assert_eq!(cleanup("a\\quad b"), "a  b");
        assert_eq!(cleanup("a\\qquad b"), "a   b");
    }

    #[test]
    fn test_blank_run_collapses_to_one_blank_line() {
        assert_eq!(cleanup("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(cleanup("a\n  \n\t\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_empty_paragraph_removed() {
        assert_eq!(cleanup("x<p>  </p>y"), "xy");
    }

    #[test]
    fn test_idempotent() {
        let once = cleanup("a\\quad\n\n\n\nb\\hfill\\ldots");
        let twice = cleanup(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_math_content_is_shielded() {
        let input = "$a \\quad b$ and \\quad outside";
        assert_eq!(cleanup(input), "$a \\quad b$ and   outside");
    }

    #[test]
    fn test_trims_result() {
        assert_eq!(cleanup("  \n content \n "), "content");
    }
}

//! Conversion of Beamer block environments to semantic containers.

use deck_core::clean_title;

use crate::environment::find_environments;
use crate::math::with_math_masked;

/// Recognized block environments and their semantic classes. Iterated in
/// this fixed order; unknown environments pass through untouched.
const BLOCK_TYPES: &[(&str, &str)] = &[
    ("block", "highlight"),
    ("alertblock", "warning"),
    ("techblock", "definition"),
    ("momblock", "key-point"),
    ("mleblock", "key-point"),
    ("example", "example"),
];

/// Replace each recognized `\begin{type}{Title}...\end{type}` region with a
/// semantic `<div>`. A non-empty title argument becomes an `<h4>` heading;
/// a missing or empty title (including the bare `example` form) yields an
/// untitled container. Block bodies keep their list/column markup for later
/// stages to convert. Bytes inside math regions are never altered.
pub fn convert_blocks(text: &str) -> String {
    with_math_masked(text, replace_blocks)
}

fn replace_blocks(text: &str) -> String {
    let mut out = text.to_string();

    for &(env, class) in BLOCK_TYPES {
        let snapshot = out.clone();
        for m in find_environments(&snapshot, env, true).iter().rev() {
            let title = m.title.as_deref().map(clean_title).unwrap_or_default();
            let body = m.body.trim();
            let replacement = if title.is_empty() {
                format!("<div class=\"{class}\">{body}</div>")
            } else {
                format!("<div class=\"{class}\"><h4>{title}</h4>{body}</div>")
            };
            out.replace_range(m.start..m.end, &replacement);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titled_block() {
        let out = convert_blocks("\\begin{block}{Key Idea}Estimate it.\\end{block}");
        assert_eq!(
            out,
            "<div class=\"highlight\"><h4>Key Idea</h4>Estimate it.</div>"
        );
    }

    #[test]
    fn test_empty_title_yields_untitled_container() {
        let out = convert_blocks("\\begin{block}{}Body only.\\end{block}");
        assert_eq!(out, "<div class=\"highlight\">Body only.</div>");
    }

    #[test]
    fn test_alertblock_maps_to_warning() {
        let out = convert_blocks("\\begin{alertblock}{Careful}Overfits.\\end{alertblock}");
        assert_eq!(
            out,
            "<div class=\"warning\"><h4>Careful</h4>Overfits.</div>"
        );
    }

    #[test]
    fn test_bare_example_environment() {
        let out = convert_blocks("\\begin{example}Coin flips.\\end{example}");
        assert_eq!(out, "<div class=\"example\">Coin flips.</div>");
    }

    #[test]
    fn test_unknown_environment_passes_through() {
        let text = "\\begin{theorem}untouched\\end{theorem}";
        assert_eq!(convert_blocks(text), text);
    }

    #[test]
    fn test_block_body_keeps_list_markup() {
        let out = convert_blocks(
            "\\begin{block}{Steps}\\begin{itemize}\\item a\\end{itemize}\\end{block}",
        );
        assert!(out.contains("\\begin{itemize}"));
        assert!(out.starts_with("<div class=\"highlight\"><h4>Steps</h4>"));
    }

    #[test]
    fn test_title_with_latex_command_is_cleaned() {
        let out = convert_blocks("\\begin{block}{\\textbf{MLE}}x\\end{block}");
        assert_eq!(out, "<div class=\"highlight\"><h4>MLE</h4>x</div>");
    }

    #[test]
    fn test_block_delimiters_inside_math_untouched() {
        let input = "$ \\begin{example} $ real \\end{example}";
        let out = convert_blocks(input);
        assert_eq!(out, input);
    }

    #[test]
    fn test_block_body_math_survives() {
        let out = convert_blocks("\\begin{block}{MLE}use $\\hat\\theta$ here\\end{block}");
        assert_eq!(
            out,
            "<div class=\"highlight\"><h4>MLE</h4>use $\\hat\\theta$ here</div>"
        );
    }

    #[test]
    fn test_multiple_blocks_convert_independently() {
        let out = convert_blocks(
            "\\begin{block}{A}one\\end{block} mid \\begin{momblock}{B}two\\end{momblock}",
        );
        assert_eq!(
            out,
            "<div class=\"highlight\"><h4>A</h4>one</div> mid <div class=\"key-point\"><h4>B</h4>two</div>"
        );
    }
}

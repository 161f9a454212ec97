//! Conversion of itemize/enumerate environments to list structures.
//!
//! `\item` has no closing counterpart in the source markup, so item
//! boundaries are inferred: a token scan with a per-list-depth stack closes
//! the open item when the next item or the list end is reached. A stray
//! `\item` outside any list still becomes a `<li>` but is never closed,
//! matching the best-effort contract for unbalanced markup.

use regex::Regex;
use std::sync::LazyLock;

use crate::math::with_math_masked;

static SETLENGTH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\setlength\{[^}]*\}\{[^}]*\}").unwrap());

static ITEMIZE_BEGIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\{itemize\}(?:\[[^\]]*\])?").unwrap());

static ENUMERATE_BEGIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\{enumerate\}(?:\[[^\]]*\])?").unwrap());

static ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\item\b\s*").unwrap());

/// Convert `itemize`→`<ul>`, `enumerate`→`<ol>`, `\item`→`<li>`, strip
/// `\setlength` sizing commands, and close inferred item boundaries. Bytes
/// inside math regions are never altered; masking (rather than per-segment
/// rewriting) keeps the item-boundary state alive across embedded math.
pub fn convert_lists(text: &str) -> String {
    with_math_masked(text, replace_lists)
}

fn replace_lists(text: &str) -> String {
    let out = SETLENGTH_REGEX.replace_all(text, "");
    let out = ITEMIZE_BEGIN_REGEX.replace_all(&out, "<ul>");
    let out = out.replace("\\end{itemize}", "</ul>");
    let out = ENUMERATE_BEGIN_REGEX.replace_all(&out, "<ol>");
    let out = out.replace("\\end{enumerate}", "</ol>");
    let out = ITEM_REGEX.replace_all(&out, "<li>");
    close_items(&out)
}

/// Tokens the item-boundary machine reacts to.
const TOKENS: &[&str] = &["<ul>", "<ol>", "</ul>", "</ol>", "<li>"];

/// Insert `</li>` closers: before a `<li>` when the current list already has
/// an open item, and before `</ul>`/`</ol>` when one is still open.
fn close_items(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // One open-item flag per nesting level.
    let mut stack: Vec<bool> = Vec::new();
    let mut pos = 0;

    while let Some((start, token)) = next_token(text, pos) {
        out.push_str(&text[pos..start]);

        match token {
            "<ul>" | "<ol>" => stack.push(false),
            "</ul>" | "</ol>" => {
                if stack.pop() == Some(true) {
                    out.push_str("</li>");
                }
            }
            "<li>" => {
                if let Some(open) = stack.last_mut() {
                    if *open {
                        out.push_str("</li>");
                    }
                    *open = true;
                }
            }
            _ => unreachable!(),
        }

        out.push_str(token);
        pos = start + token.len();
    }

    out.push_str(&text[pos..]);
    out
}

/// Earliest occurrence of any list token at or after `from`.
fn next_token(text: &str, from: usize) -> Option<(usize, &'static str)> {
    TOKENS
        .iter()
        .filter_map(|&tok| text[from..].find(tok).map(|i| (from + i, tok)))
        .min_by_key(|&(start, _)| start)
}

//! Math region handling.
//!
//! Two responsibilities: rewrite display-math environments (`align`,
//! `equation` and their starred forms) into `$$...$$` form, and compute the
//! spans of `$...$`/`$$...$$` regions so every later text rewrite can be
//! kept out of them. Inline `$...$` math passes through byte-for-byte.
//!
//! An unmatched `$` opens no span; whatever follows it is treated as
//! non-math and is subject to later rewrites. Known limitation, kept for
//! parity with existing decks.

use std::ops::Range;

use crate::environment::find_environments;

/// Rewrite `align`/`align*` and `equation`/`equation*` environments into
/// normalized display math. Multi-row align bodies become a single
/// `aligned` block; single rows become a plain display block.
pub fn rewrite_display_math(text: &str) -> String {
    let mut out = text.to_string();
    for name in ["align", "align*"] {
        out = replace_environments(&out, name, rewrite_align_body);
    }
    for name in ["equation", "equation*"] {
        out = replace_environments(&out, name, |body| format!("$${body}$$"));
    }
    out
}

/// Replace every occurrence of `name` with `rewrite(body)`, splicing from
/// the back so match offsets stay valid.
fn replace_environments(text: &str, name: &str, rewrite: impl Fn(&str) -> String) -> String {
    let mut out = text.to_string();
    for m in find_environments(text, name, false).iter().rev() {
        out.replace_range(m.start..m.end, &rewrite(&m.body));
    }
    out
}

/// Split an align body on `\\` row separators, strip alignment markers, and
/// re-join as a single display block.
fn rewrite_align_body(body: &str) -> String {
    let rows: Vec<String> = body
        .split("\\\\")
        .map(|row| row.replace('&', "").trim().to_string())
        .filter(|row| !row.is_empty())
        .collect();

    match rows.len() {
        0 => String::new(),
        1 => format!("$${}$$", rows[0]),
        _ => format!(
            "$$\\begin{{aligned}}{}\\end{{aligned}}$$",
            rows.join(" \\\\ ")
        ),
    }
}

/// Byte spans of math regions (`$...$` and `$$...$$`), in order.
///
/// Escaped `\$` never delimits. A `$` with no closing partner opens no span.
pub fn math_spans(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }

        let display = i + 1 < bytes.len() && bytes[i + 1] == b'$';
        let delim_len = if display { 2 } else { 1 };
        match find_delimiter(bytes, i + delim_len, display) {
            Some(close) => {
                spans.push(i..close + delim_len);
                i = close + delim_len;
            }
            None => break,
        }
    }

    spans
}

/// Find the next unescaped `$` (or `$$`) at or after `from`.
fn find_delimiter(bytes: &[u8], from: usize, display: bool) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'$' => {
                if !display {
                    return Some(i);
                }
                if i + 1 < bytes.len() && bytes[i + 1] == b'$' {
                    return Some(i);
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    None
}

/// Run `rewrite` over `text` with every math span replaced by an opaque
/// placeholder, then restore the spans verbatim.
///
/// Unlike [`apply_outside_math`], the rewrite sees the whole body in one
/// piece, so environment delimiters on either side of a math region still
/// pair up and stateful scans keep their state across it. Stages that match
/// `\begin`/`\end` pairs or infer item boundaries need this form.
pub fn with_math_masked(text: &str, rewrite: impl Fn(&str) -> String) -> String {
    let spans = math_spans(text);
    if spans.is_empty() {
        return rewrite(text);
    }

    let mut masked = String::with_capacity(text.len());
    let mut saved: Vec<&str> = Vec::with_capacity(spans.len());
    let mut cursor = 0;
    for (i, span) in spans.iter().enumerate() {
        masked.push_str(&text[cursor..span.start]);
        masked.push_str(&placeholder(i));
        saved.push(&text[span.clone()]);
        cursor = span.end;
    }
    masked.push_str(&text[cursor..]);

    let mut out = rewrite(&masked);
    for (i, content) in saved.iter().enumerate() {
        out = out.replace(&placeholder(i), content);
    }
    out
}

/// Placeholder token for the `i`-th masked span. Private-use delimiters
/// keep it inert to every rewrite pattern.
fn placeholder(i: usize) -> String {
    format!("\u{e000}{i}\u{e000}")
}

/// Apply `rewrite` to every maximal non-math segment of `text`, copying
/// math spans through untouched.
pub fn apply_outside_math(text: &str, rewrite: impl Fn(&str) -> String) -> String {
    let spans = math_spans(text);
    if spans.is_empty() {
        return rewrite(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in &spans {
        out.push_str(&rewrite(&text[cursor..span.start]));
        out.push_str(&text[span.clone()]);
        cursor = span.end;
    }
    out.push_str(&rewrite(&text[cursor..]));
    out
}

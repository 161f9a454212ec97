//! Matching of `\begin{name}...\end{name}` regions in raw source text.
//!
//! This is the primitive every higher-level converter builds on. Matching is
//! a token scan with a per-name depth counter, so a body containing a nested
//! environment of the same name resolves to the matching `\end` rather than
//! the first one. Unbalanced markup (an `\end` with no `\begin`, or a
//! `\begin` that never closes) produces no match and the raw command text is
//! left in place for later stages to ignore.

/// One matched environment region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvMatch {
    /// Byte offset of the `\begin{name}` token.
    pub start: usize,

    /// Byte offset one past the `\end{name}` token.
    pub end: usize,

    /// Content of a bracketed option block immediately after `\begin{name}`.
    pub options: Option<String>,

    /// Content of a brace-delimited title argument following the options.
    /// Only parsed when requested; `None` otherwise.
    pub title: Option<String>,

    /// Text between the argument list and the matching `\end{name}`.
    pub body: String,
}

/// Find every `\begin{name}...\end{name}` region in `text`, in order.
///
/// When `take_title` is true, a brace-delimited argument immediately after
/// the options (e.g. a block title or frame title) is consumed into
/// [`EnvMatch::title`] instead of the body. Outer matches consume nested
/// same-name regions; only top-level occurrences are reported.
pub fn find_environments(text: &str, name: &str, take_title: bool) -> Vec<EnvMatch> {
    let begin_tok = format!("\\begin{{{name}}}");
    let end_tok = format!("\\end{{{name}}}");

    let mut matches = Vec::new();
    let mut search_from = 0;

    while let Some(rel) = text[search_from..].find(&begin_tok) {
        let start = search_from + rel;
        let mut pos = start + begin_tok.len();

        let options = parse_bracket_group(text, &mut pos);
        let title = if take_title {
            parse_brace_group(text, &mut pos)
        } else {
            None
        };

        match find_matching_end(text, pos, &begin_tok, &end_tok) {
            Some((body_end, end)) => {
                matches.push(EnvMatch {
                    start,
                    end,
                    options,
                    title,
                    body: text[pos..body_end].to_string(),
                });
                search_from = end;
            }
            None => {
                log::debug!("Unclosed \\begin{{{name}}} at byte {start}; leaving raw");
                search_from = start + begin_tok.len();
            }
        }
    }

    matches
}

/// Scan forward from `from` for the `\end` token that closes an already-open
/// environment, counting same-name `\begin` tokens so nesting resolves to
/// the matching close. Returns (body end, match end).
fn find_matching_end(
    text: &str,
    from: usize,
    begin_tok: &str,
    end_tok: &str,
) -> Option<(usize, usize)> {
    let mut depth = 1usize;
    let mut pos = from;

    while depth > 0 {
        let next_begin = text[pos..].find(begin_tok).map(|i| pos + i);
        let next_end = text[pos..].find(end_tok).map(|i| pos + i)?;

        match next_begin {
            Some(b) if b < next_end => {
                depth += 1;
                pos = b + begin_tok.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some((next_end, next_end + end_tok.len()));
                }
                pos = next_end + end_tok.len();
            }
        }
    }

    None
}

/// Consume a `[...]` group at `*pos`, if present, advancing past it.
fn parse_bracket_group(text: &str, pos: &mut usize) -> Option<String> {
    if !text[*pos..].starts_with('[') {
        return None;
    }
    let close = text[*pos + 1..].find(']')? + *pos + 1;
    let content = text[*pos + 1..close].to_string();
    *pos = close + 1;
    Some(content)
}

/// Consume a balanced `{...}` group at `*pos`, if present, advancing past
/// it. Brace depth is tracked and backslash-escaped braces are ignored.
fn parse_brace_group(text: &str, pos: &mut usize) -> Option<String> {
    if !text[*pos..].starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in text[*pos..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let content = text[*pos + 1..*pos + i].to_string();
                    *pos += i + 1;
                    return Some(content);
                }
            }
            _ => {}
        }
    }

    None
}

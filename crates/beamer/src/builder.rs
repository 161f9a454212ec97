//! Deck building: document metadata, slide assembly, serialization.

use std::fs;
use std::path::Path;

use deck_core::{DeckMetadata, Error, Result, SlideDeck};
use regex::Regex;
use std::sync::LazyLock;

use crate::assemble::assemble_slide;
use crate::frames::extract_frames;

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\title\{([^}]+)\}").unwrap());

static SUBTITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\subtitle\{([^}]+)\}").unwrap());

/// Deck-level settings the source document does not carry.
#[derive(Debug, Clone)]
pub struct DeckOptions {
    /// Course label stamped into the deck metadata.
    pub course: String,

    /// Institution name stamped into the deck metadata.
    pub institution: String,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            course: "CMSC 173".to_string(),
            institution: "University of the Philippines - Cebu".to_string(),
        }
    }
}

/// First capture of `pattern` in `content`, if any.
fn extract_first(pattern: &Regex, content: &str) -> Option<String> {
    pattern.captures(content).map(|caps| caps[1].to_string())
}

/// Module id from the source path: the leading digit run of the
/// parent-of-parent directory name (e.g. "01 - Parameter Estimation" under
/// which the slides directory lives), falling back to "00".
fn module_id(source_path: &Path) -> String {
    let digits: String = source_path
        .parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or("")
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        "00".to_string()
    } else {
        digits
    }
}

/// Build a deck from source text already in memory.
///
/// A document with no content frames yields a valid deck with zero slides;
/// batch pipelines must not abort on one malformed file.
pub fn build_deck(content: &str, source_path: &Path, options: &DeckOptions) -> SlideDeck {
    let title =
        extract_first(&TITLE_REGEX, content).unwrap_or_else(|| "Untitled".to_string());
    let subtitle = extract_first(&SUBTITLE_REGEX, content).unwrap_or_default();

    let units = extract_frames(content);
    log::debug!("Extracted {} content frames", units.len());

    let slides: Vec<_> = units
        .iter()
        .enumerate()
        .map(|(index, unit)| assemble_slide(index, unit))
        .collect();

    let module = DeckMetadata {
        id: module_id(source_path),
        title,
        subtitle,
        course: options.course.clone(),
        institution: options.institution.clone(),
        total_slides: slides.len(),
        estimated_duration: format!("{} minutes", slides.len() * 2),
    };

    SlideDeck { module, slides }
}

/// Serialize a deck as pretty-printed UTF-8 JSON.
pub fn deck_json(deck: &SlideDeck) -> Result<String> {
    serde_json::to_string_pretty(deck).map_err(|e| Error::JsonError(e.to_string()))
}

/// Read a source document, convert it, and write the deck as pretty-printed
/// UTF-8 JSON. A missing or unreadable input is fatal and no output file is
/// written; serialization also happens before the output is touched.
pub fn convert_file(input: &Path, output: &Path, options: &DeckOptions) -> Result<SlideDeck> {
    let content = fs::read_to_string(input)?;
    let deck = build_deck(&content, input, options);

    let json = deck_json(&deck)?;
    fs::write(output, json)?;

    Ok(deck)
}

//! Extraction of slide units from a full source document.

use deck_core::SlideUnit;
use regex::Regex;
use std::sync::LazyLock;

use crate::environment::find_environments;

static SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\section\{([^}]+)\}").unwrap());

/// Marker identifying a title-page frame; such frames are not content.
const TITLE_PAGE_MARKER: &str = "\\titlepage";

/// Extract every content frame from the document, in order.
///
/// A frame is dropped when its body contains the title-page marker or its
/// title argument is missing, empty, or whitespace. The `\section` heading
/// in effect at each frame is threaded through as `section_label`; nothing
/// downstream consumes it yet.
pub fn extract_frames(content: &str) -> Vec<SlideUnit> {
    let sections: Vec<(usize, String)> = SECTION_REGEX
        .captures_iter(content)
        .map(|caps| (caps.get(0).unwrap().start(), caps[1].to_string()))
        .collect();

    find_environments(content, "frame", true)
        .into_iter()
        .filter_map(|m| {
            let title = m.title.as_deref().unwrap_or("").trim().to_string();
            if title.is_empty() || m.body.contains(TITLE_PAGE_MARKER) {
                log::debug!("Skipping non-content frame at byte {}", m.start);
                return None;
            }

            let section_label = sections
                .iter()
                .rev()
                .find(|&&(offset, _)| offset < m.start)
                .map(|(_, label)| label.clone());

            Some(SlideUnit {
                raw_title: title,
                raw_body: m.body.trim().to_string(),
                section_label,
            })
        })
        .collect()
}

//! Assembly of one extracted frame into one slide.
//!
//! The body conversion is an explicit ordered pipeline. Stages before the
//! display-math rewrite only touch environment delimiters, never `$`-region
//! content; formatting and cleanup run after math spans are final and use
//! them to shield math bytes.

use deck_core::{clean_title, Slide, SlideUnit};
use regex::Regex;
use std::sync::LazyLock;

use crate::{blocks, cleanup, columns, formatting, images, lists, math};

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Assumed reading speed for the per-slide estimate.
const WORDS_PER_MINUTE: f64 = 150.0;

/// One named conversion stage.
pub struct Stage {
    pub name: &'static str,
    pub run: fn(&str) -> String,
}

/// The fixed conversion order. Reordering breaks invariants: blocks must
/// run before lists so block bodies still expose their list markup, and
/// formatting/cleanup must run after the display-math rewrite.
pub const PIPELINE: &[Stage] = &[
    Stage { name: "blocks", run: blocks::convert_blocks },
    Stage { name: "columns", run: columns::convert_columns },
    Stage { name: "lists", run: lists::convert_lists },
    Stage { name: "math", run: math::rewrite_display_math },
    Stage { name: "formatting", run: formatting::convert_formatting },
    Stage { name: "images", run: images::convert_images },
    Stage { name: "cleanup", run: cleanup::cleanup },
];

/// Run the full conversion pipeline over a raw frame body.
pub fn convert_body(raw: &str) -> String {
    PIPELINE
        .iter()
        .fold(raw.to_string(), |text, stage| {
            let out = (stage.run)(&text);
            log::trace!("stage {} -> {} bytes", stage.name, out.len());
            out
        })
        .trim()
        .to_string()
}

/// Reading-time label for converted content: `max(1, round(words / 150))`.
/// Ties round away from zero, so 375 words is "3 min".
fn reading_time_label(content: &str) -> String {
    let words = WORD_REGEX.find_iter(content).count();
    let minutes = ((words as f64 / WORDS_PER_MINUTE).round() as u64).max(1);
    format!("{minutes} min")
}

/// Convert one extracted frame into a slide. `index` is 0-based document
/// order; slide ids are 1-based and contiguous.
pub fn assemble_slide(index: usize, unit: &SlideUnit) -> Slide {
    // Checked on the raw body: the image stage rewrites the marker away.
    let has_visualization = unit.raw_body.contains("\\includegraphics");
    let content = convert_body(&unit.raw_body);

    Slide {
        id: index + 1,
        title: clean_title(&unit.raw_title),
        reading_time: reading_time_label(&content),
        content,
        has_visualization,
        knowledge_check: None,
    }
}

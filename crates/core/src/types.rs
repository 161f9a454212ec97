//! Domain types for the converted slide deck.
//!
//! `SlideDeck` is the sole externally visible artifact; its JSON shape is a
//! wire contract consumed verbatim by the web rendering layer, so every field
//! carries an explicit serde name.

use serde::{Deserialize, Serialize};

/// The complete converted deck: document-level metadata plus ordered slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideDeck {
    /// Document-level metadata.
    pub module: DeckMetadata,

    /// Slides in document order, ids contiguous from 1.
    pub slides: Vec<Slide>,
}

impl SlideDeck {
    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Metadata describing the source document as a course module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckMetadata {
    /// Module identifier derived from the enclosing directory name ("00" if absent).
    pub id: String,

    /// Document title ("Untitled" if the source declares none).
    pub title: String,

    /// Document subtitle (empty if the source declares none).
    pub subtitle: String,

    /// Course label, e.g. "CMSC 173".
    pub course: String,

    /// Institution name.
    pub institution: String,

    /// Total number of slides in the deck.
    #[serde(rename = "totalSlides")]
    pub total_slides: usize,

    /// Coarse duration estimate: 2 minutes per slide.
    #[serde(rename = "estimatedDuration")]
    pub estimated_duration: String,
}

/// One converted slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based slide number, contiguous in document order.
    pub id: usize,

    /// Cleaned title text (plain string, no markup).
    pub title: String,

    /// Sanitized structural markup; never raw source markup.
    pub content: String,

    /// Reading-time estimate, formatted as "<n> min".
    #[serde(rename = "readingTime")]
    pub reading_time: String,

    /// True if the raw frame body contained an image-inclusion command.
    #[serde(rename = "hasVisualization")]
    pub has_visualization: bool,

    /// Reserved for future use; always null in converter output.
    #[serde(rename = "knowledgeCheck")]
    pub knowledge_check: Option<KnowledgeCheck>,
}

/// Placeholder for a future interactive knowledge check attached to a slide.
///
/// The converter never produces one; the field exists so the wire contract
/// carries an explicit `knowledgeCheck: null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeCheck {
    /// Free-form prompt text.
    pub prompt: String,
}

/// One extracted frame, before conversion. Intermediate only, never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideUnit {
    /// Raw title argument from the frame, untouched.
    pub raw_title: String,

    /// Raw frame body, untouched.
    pub raw_body: String,

    /// Section heading in effect at this frame, if any. Tracked for future
    /// grouping; no consumer reads it yet.
    pub section_label: Option<String>,
}

impl SlideUnit {
    /// Create a unit with no section label.
    pub fn new(raw_title: impl Into<String>, raw_body: impl Into<String>) -> Self {
        Self {
            raw_title: raw_title.into(),
            raw_body: raw_body.into(),
            section_label: None,
        }
    }
}

/// A structured reference to an included image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Source path as written in the markup; resolution to a served asset
    /// URL is a downstream concern.
    pub path: String,

    /// Rendered width as a percentage of the text width (default 80).
    #[serde(rename = "widthPercent")]
    pub width_percent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_serializes_wire_names() {
        let slide = Slide {
            id: 1,
            title: "Overview".to_string(),
            content: "<p>Hi</p>".to_string(),
            reading_time: "1 min".to_string(),
            has_visualization: false,
            knowledge_check: None,
        };

        let json = serde_json::to_value(&slide).unwrap();
        assert_eq!(json["readingTime"], "1 min");
        assert_eq!(json["hasVisualization"], false);
        assert!(json["knowledgeCheck"].is_null());
    }

    #[test]
    fn test_metadata_serializes_wire_names() {
        let meta = DeckMetadata {
            id: "01".to_string(),
            title: "Intro".to_string(),
            subtitle: String::new(),
            course: "CMSC 173".to_string(),
            institution: "University of the Philippines - Cebu".to_string(),
            total_slides: 2,
            estimated_duration: "4 minutes".to_string(),
        };

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["totalSlides"], 2);
        assert_eq!(json["estimatedDuration"], "4 minutes");
    }

    #[test]
    fn test_deck_has_exactly_two_top_level_keys() {
        let deck = SlideDeck {
            module: DeckMetadata {
                id: "00".to_string(),
                title: "Untitled".to_string(),
                subtitle: String::new(),
                course: "CMSC 173".to_string(),
                institution: "University of the Philippines - Cebu".to_string(),
                total_slides: 0,
                estimated_duration: "0 minutes".to_string(),
            },
            slides: Vec::new(),
        };

        let json = serde_json::to_value(&deck).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("module"));
        assert!(obj.contains_key("slides"));
    }

    #[test]
    fn test_image_ref_round_trip() {
        let image = ImageRef {
            path: "figures/foo.png".to_string(),
            width_percent: 50,
        };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["widthPercent"], 50);
        assert_eq!(json["path"], "figures/foo.png");
    }
}

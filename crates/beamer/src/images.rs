//! Conversion of image-inclusion commands to figure placeholders.
//!
//! The converter never resolves the image path to a real asset or verifies
//! that it exists; placeholders carry the path and width for a downstream
//! asset-resolution step.

use deck_core::ImageRef;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static INCLUDEGRAPHICS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\includegraphics(?:\[([^\]]*)\])?\{([^}]+)\}").unwrap());

static WIDTH_OPTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"width=([0-9.]+)\\textwidth").unwrap());

/// Rendered width when no `width=<f>\textwidth` option is given.
const DEFAULT_WIDTH_PERCENT: u32 = 80;

/// Parse the width option out of an `\includegraphics` option string.
fn width_percent(options: &str) -> u32 {
    WIDTH_OPTION_REGEX
        .captures(options)
        .and_then(|c| c[1].parse::<f64>().ok())
        .map(|fraction| (fraction * 100.0).round() as u32)
        .unwrap_or(DEFAULT_WIDTH_PERCENT)
}

/// Parse one regex capture into an [`ImageRef`].
fn image_ref(caps: &Captures) -> ImageRef {
    ImageRef {
        path: caps[2].to_string(),
        width_percent: caps
            .get(1)
            .map(|opts| width_percent(opts.as_str()))
            .unwrap_or(DEFAULT_WIDTH_PERCENT),
    }
}

/// Replace each `\includegraphics[options]{path}` with a structured figure
/// placeholder carrying the path and width percentage.
pub fn convert_images(text: &str) -> String {
    INCLUDEGRAPHICS_REGEX
        .replace_all(text, |caps: &Captures| {
            let image = image_ref(caps);
            format!(
                "<div class=\"figure\" data-width=\"{}\"><p><em>[Figure: {}]</em></p></div>",
                image.width_percent, image.path
            )
        })
        .into_owned()
}

/// All image references in a raw frame body, in order.
pub fn image_refs(text: &str) -> Vec<ImageRef> {
    INCLUDEGRAPHICS_REGEX
        .captures_iter(text)
        .map(|caps| image_ref(&caps))
        .collect()
}

//! Beamer source parser and slide-deck converter backend.
//!
//! Converts a LaTeX Beamer presentation into the normalized slide-deck
//! document defined in `deck-core`. The conversion is a single synchronous
//! pass: frame extraction, then a fixed ordered pipeline of body rewrites
//! per frame, then deck metadata assembly.

pub mod assemble;
pub mod blocks;
pub mod builder;
pub mod cleanup;
pub mod columns;
pub mod environment;
pub mod formatting;
pub mod frames;
pub mod images;
pub mod lists;
pub mod math;

pub use assemble::{assemble_slide, convert_body};
pub use builder::{build_deck, convert_file, deck_json, DeckOptions};
pub use environment::{find_environments, EnvMatch};
pub use frames::extract_frames;
pub use images::image_refs;

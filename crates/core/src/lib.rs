//! Core domain types, error handling, and title cleanup
//! for Beamer slide-deck conversion.

pub mod error;
pub mod titles;
pub mod types;

pub use error::{Error, Result};
pub use titles::clean_title;
pub use types::{DeckMetadata, ImageRef, Slide, SlideDeck, SlideUnit};

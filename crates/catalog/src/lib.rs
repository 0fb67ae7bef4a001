//! Content data model and the built-in demo catalog.
//!
//! Everything here is static input for the presentation layer: ordered lists
//! of display items with titles, metadata, and thumbnail/video references.
//! Nothing is fetched or persisted.

pub mod data;
pub mod domain;

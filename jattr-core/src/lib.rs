//! jattr core - top-level attribute extraction for judgement JSON files
//!
//! This crate holds everything the `jattr` binary does apart from argument
//! parsing:
//!
//! - Loading a file into an ordered JSON object
//! - Selecting attributes (all, default, single, multiple)
//! - Rendering the selection as indented JSON
//! - Error types and fixed attribute names

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod loader;
pub mod render;
pub mod select;

use std::path::Path;

// Re-export commonly used types
pub use constants::RESERVED_KEYS;
pub use error::{ExtractError, Result};
pub use loader::{load_document, parse_document};
pub use render::{render_to_string, write_rendered, RenderOptions};
pub use select::{not_found_placeholder, select, ExtractOptions, Selection};

/// A top-level JSON object; iteration follows document order.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Load `path` and apply `selection` to it.
pub fn extract(
    path: impl AsRef<Path>,
    selection: &Selection,
    options: &ExtractOptions,
) -> Result<Document> {
    let document = load_document(path)?;
    Ok(select(&document, selection, options))
}

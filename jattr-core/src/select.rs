//! Attribute selection modes
//!
//! Every mode builds a fresh [`Document`]; the input is never modified.
//! Requested attributes that are missing resolve to a placeholder string
//! rather than an error.

use crate::constants::{ATTRIBUTE_SEPARATOR, RESERVED_KEYS};
use crate::Document;
use serde_json::Value;
use tracing::{debug, trace};

/// Which attributes to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every attribute, reserved keys included
    All,
    /// Every attribute except the reserved keys
    #[default]
    Default,
    /// One named attribute
    Single(String),
    /// Named attributes, in request order
    Multiple(Vec<String>),
}

impl Selection {
    /// Resolve command-line flags into a selection.
    ///
    /// Flags are checked in the order `all`, `single`, `multiple`; the first
    /// one set wins and the rest are ignored. Empty strings count as unset.
    pub fn from_flags(all: bool, single: Option<&str>, multiple: Option<&str>) -> Self {
        if all {
            return Selection::All;
        }
        if let Some(name) = single.filter(|name| !name.is_empty()) {
            return Selection::Single(name.to_string());
        }
        if let Some(list) = multiple.filter(|list| !list.is_empty()) {
            return Selection::Multiple(split_attribute_list(list));
        }
        Selection::Default
    }

    /// Short label used in log output.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Default => "default",
            Selection::Single(_) => "single",
            Selection::Multiple(_) => "multiple",
        }
    }
}

/// Selection settings
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Attributes dropped by [`Selection::Default`]
    pub reserved_keys: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            reserved_keys: RESERVED_KEYS.iter().map(|key| key.to_string()).collect(),
        }
    }
}

/// Apply `selection` to `document`.
pub fn select(document: &Document, selection: &Selection, options: &ExtractOptions) -> Document {
    let selected = match selection {
        Selection::All => all_attributes(document),
        Selection::Default => without_keys(document, &options.reserved_keys),
        Selection::Single(name) => single_attribute(document, name),
        Selection::Multiple(names) => multiple_attributes(document, names),
    };
    debug!(
        mode = selection.mode_name(),
        input = document.len(),
        output = selected.len(),
        "selected attributes"
    );
    selected
}

/// Copy of the whole document.
pub fn all_attributes(document: &Document) -> Document {
    document.clone()
}

/// Copy of the document without `excluded`. Excluded keys need not be present.
pub fn without_keys<S: AsRef<str>>(document: &Document, excluded: &[S]) -> Document {
    document
        .iter()
        .filter(|(key, _)| !excluded.iter().any(|ex| ex.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// One-entry mapping holding `name` and its value or the placeholder.
pub fn single_attribute(document: &Document, name: &str) -> Document {
    let mut selected = Document::new();
    selected.insert(name.to_string(), lookup(document, name));
    selected
}

/// Mapping of each requested name, in order, to its value or the placeholder.
pub fn multiple_attributes<S: AsRef<str>>(document: &Document, names: &[S]) -> Document {
    let mut selected = Document::new();
    for name in names {
        let name = name.as_ref();
        selected.insert(name.to_string(), lookup(document, name));
    }
    selected
}

/// Split a comma-separated request. Names are not trimmed, and empty
/// segments are kept.
pub fn split_attribute_list(list: &str) -> Vec<String> {
    list.split(ATTRIBUTE_SEPARATOR).map(str::to_string).collect()
}

/// Value substituted for an attribute missing from the document.
pub fn not_found_placeholder(name: &str) -> String {
    format!("Attribute '{}' not found.", name)
}

fn lookup(document: &Document, name: &str) -> Value {
    match document.get(name) {
        Some(value) => value.clone(),
        None => {
            trace!(attribute = name, "attribute not found");
            Value::String(not_found_placeholder(name))
        }
    }
}

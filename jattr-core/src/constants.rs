//! Fixed attribute names and output formatting defaults

/// Full judgement text
pub const JFULL: &str = "JFULL";
/// Base64-encoded judgement PDF
pub const JPDF: &str = "JPDF";

/// Attributes left out of the default selection.
pub const RESERVED_KEYS: [&str; 2] = [JFULL, JPDF];

/// Separator between names in a multiple-attribute request.
pub const ATTRIBUTE_SEPARATOR: char = ',';

/// Spaces per nesting level in rendered output.
pub const DEFAULT_INDENT: usize = 4;

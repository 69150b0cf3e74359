//! Pretty JSON output

use crate::constants::DEFAULT_INDENT;
use crate::error::{ExtractError, Result};
use crate::Document;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

/// Output formatting settings
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

/// Render `selected` as indented JSON, keys in mapping order.
///
/// Non-ASCII characters are written as-is, never as `\u` escapes.
pub fn render_to_string(selected: &Document, options: &RenderOptions) -> Result<String> {
    let indent = " ".repeat(options.indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    selected
        .serialize(&mut serializer)
        .map_err(ExtractError::Render)?;
    // serde_json only emits valid UTF-8
    String::from_utf8(buf).map_err(|err| {
        ExtractError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}

/// Write the rendered selection plus a trailing newline, then flush.
pub fn write_rendered<W: Write>(
    mut writer: W,
    selected: &Document,
    options: &RenderOptions,
) -> Result<()> {
    let text = render_to_string(selected, options)?;
    writer.write_all(text.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

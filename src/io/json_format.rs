//! JSON format handling
//!
//! Reads the genesis document and renders the transformation result.
//!
//! Output is indented by a single space per level, object keys keep their
//! input order (serde_json `preserve_order`), numbers keep the digits they
//! were written with (serde_json `arbitrary_precision`), and the document ends
//! with a newline. Text outside printable ASCII is written as `\uXXXX`
//! escapes, using surrogate pairs above the Basic Multilingual Plane.
//!
//! The whole document is rendered into memory before anything is written, so
//! a serialization failure never leaves partial JSON behind.

use crate::types::GenesisError;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;
use std::io::{self, ErrorKind, Read, Write};

/// Indentation used for every nesting level of the output
pub const OUTPUT_INDENT: &[u8] = b" ";

/// Pretty formatter that keeps string contents within printable ASCII
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> AsciiFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    // Control characters, quotes and backslashes never reach this method;
    // serde_json escapes them through `write_char_escape`.
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch < '\u{7f}' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Read the whole genesis input and parse it as JSON
///
/// # Errors
///
/// * `GenesisError::DataFormat` if the input is not UTF-8 or not valid JSON
/// * `GenesisError::Io` if reading fails
pub fn read_genesis(reader: &mut dyn Read) -> Result<Value, GenesisError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            GenesisError::DataFormat {
                input: "genesis".to_string(),
                line: None,
                column: None,
                message: e.to_string(),
            }
        } else {
            GenesisError::from(e)
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| GenesisError::invalid_genesis(&e))
}

/// Render a value as indented JSON followed by a newline
///
/// # Errors
///
/// Returns `GenesisError::Serialization` if the value cannot be represented
/// as JSON (for example a map with non-string keys).
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, GenesisError> {
    let mut buffer = Vec::new();
    let formatter = AsciiFormatter::with_indent(OUTPUT_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| GenesisError::serialization(&e))?;

    buffer.push(b'\n');
    Ok(buffer)
}

/// Render a value and write it to the output in one piece
///
/// # Errors
///
/// * `GenesisError::Serialization` if rendering fails (nothing is written)
/// * `GenesisError::Io` if writing or flushing fails
pub fn write_json<T: Serialize + ?Sized>(
    value: &T,
    output: &mut dyn Write,
) -> Result<(), GenesisError> {
    let rendered = render_json(value)?;
    output.write_all(&rendered)?;
    output.flush()?;
    Ok(())
}

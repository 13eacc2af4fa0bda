//! I/O module
//!
//! Handles the two inputs and the JSON output.
//!
//! # Components
//!
//! - `source` - Input sources (file path or standard input)
//! - `json_format` - Genesis parsing and indented JSON rendering
//! - `vesting_reader` - Lazy, single-pass vesting-info CSV rows

pub mod json_format;
pub mod source;
pub mod vesting_reader;

pub use json_format::{read_genesis, render_json, write_json, OUTPUT_INDENT};
pub use source::{InputSource, STDIN_PATH};
pub use vesting_reader::{VestingRow, VestingRows};

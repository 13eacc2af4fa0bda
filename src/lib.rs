//! Genesis Tools Library
//! # Overview
//!
//! Shared command-line plumbing for tools that rewrite an exported blockchain
//! genesis file (JSON) using vesting-account data (CSV).
//!
//! A tool supplies its program description, default chain id and default start
//! time, plus a transformation. The library parses the command line, checks
//! the chain id, reads the genesis document, streams the vesting rows into the
//! transformation and prints the result as indented JSON on stdout.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parser constructor and the parsed [`cli::Arguments`]
//! - [`driver`] - The read, transform, print pipeline and the process boundary
//! - [`io`] - Input sources, genesis JSON handling, lazy vesting rows
//! - [`transform`] - The [`transform::GenesisTransform`] extension point
//! - [`types`] - Error taxonomy
//! - [`logging`] - stderr tracing subscriber
//!
//! # Example
//!
//! ```no_run
//! use genesis_tools::{cli, driver, transform::PassThrough};
//! use std::process::ExitCode;
//!
//! fn main() -> ExitCode {
//!     let parser = cli::init_default_argument_parser(
//!         "Print the exported genesis unchanged",
//!         "columbus-3",
//!         "2019-12-13T00:00:00Z",
//!     );
//!     driver::main(&parser, PassThrough)
//! }
//! ```

// Module declarations
pub mod cli;
pub mod driver;
pub mod io;
pub mod logging;
pub mod transform;
pub mod types;

pub use cli::{init_default_argument_parser, ArgumentParser, Arguments};
pub use io::{InputSource, VestingRow, VestingRows};
pub use transform::{from_fn, GenesisTransform, PassThrough};
pub use types::GenesisError;

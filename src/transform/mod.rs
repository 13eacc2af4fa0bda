//! Transformation module
//!
//! The driver knows nothing about genesis schemas or vesting schedules. Each
//! concrete tool supplies a [`GenesisTransform`] that receives the parsed
//! genesis document, the lazy vesting rows and the parsed arguments, and
//! returns whatever JSON-serializable value should be printed.
//!
//! Tools either implement the trait on their own type or wrap a closure with
//! [`from_fn`]:
//!
//! ```no_run
//! use genesis_tools::cli::{init_default_argument_parser, Arguments};
//! use genesis_tools::io::VestingRows;
//! use genesis_tools::transform::from_fn;
//! use genesis_tools::{driver, GenesisError};
//! use serde_json::{json, Value};
//!
//! let parser = init_default_argument_parser("Stamp chain id", "columbus-3", "");
//! let transform = from_fn(|genesis: Value, _rows: VestingRows, args: &Arguments| {
//!     Ok::<_, GenesisError>(json!({"chain_id": args.chain_id, "orig": genesis}))
//! });
//! let _ = driver::main(&parser, transform);
//! ```

use crate::cli::Arguments;
use crate::io::VestingRows;
use crate::types::GenesisError;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

pub mod passthrough;

pub use passthrough::PassThrough;

/// A genesis transformation supplied by a concrete tool
///
/// Called exactly once per run, after the arguments are validated and the
/// genesis document is parsed. The vesting rows have not been read yet; the
/// transformation pulls them as it needs them and may stop early.
pub trait GenesisTransform {
    /// Value printed as JSON on success
    type Output: Serialize;

    /// Produce the output document
    ///
    /// # Errors
    ///
    /// Any `GenesisError` aborts the run; a malformed vesting row surfaces
    /// here as `GenesisError::DataFormat` when the transformation reads it.
    fn transform(
        self,
        genesis: Value,
        vesting_info: VestingRows,
        parsed_args: &Arguments,
    ) -> Result<Self::Output, GenesisError>;
}

/// Transformation backed by a closure, built with [`from_fn`]
pub struct FromFn<F, S> {
    f: F,
    _output: PhantomData<fn() -> S>,
}

/// Wrap a closure as a [`GenesisTransform`]
pub fn from_fn<F, S>(f: F) -> FromFn<F, S>
where
    F: FnOnce(Value, VestingRows, &Arguments) -> Result<S, GenesisError>,
    S: Serialize,
{
    FromFn {
        f,
        _output: PhantomData,
    }
}

impl<F, S> GenesisTransform for FromFn<F, S>
where
    F: FnOnce(Value, VestingRows, &Arguments) -> Result<S, GenesisError>,
    S: Serialize,
{
    type Output = S;

    fn transform(
        self,
        genesis: Value,
        vesting_info: VestingRows,
        parsed_args: &Arguments,
    ) -> Result<S, GenesisError> {
        (self.f)(genesis, vesting_info, parsed_args)
    }
}

impl<F, S> fmt::Debug for FromFn<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

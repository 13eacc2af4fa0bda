//! Types module
//!
//! Contains the error taxonomy shared by the parser, the readers and the driver.

pub mod error;

pub use error::GenesisError;

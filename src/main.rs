//! Genesis pass-through tool
//!
//! Reads an exported genesis file and a vesting-info CSV, and prints the
//! genesis document unchanged as indented JSON. The vesting file is read to
//! the end so that malformed input is still reported.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- genesis.json i-4-vesting-type-accounts.csv > out.json
//! cargo run -- --chain-id columbus-3 --start-time 2019-12-13T00:00:00Z genesis.json vesting.csv
//! RUST_LOG=debug cargo run -- genesis.json vesting.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Empty chain-id, malformed input, or any other processing error
//! - 2: Usage error (missing arguments, input file not found or not readable)

use genesis_tools::{cli, driver, transform::PassThrough};
use std::process::ExitCode;

const PROG_DESC: &str = "Print an exported genesis file unchanged, validating the vesting info";
const DEFAULT_CHAIN_ID: &str = "columbus-3";
const DEFAULT_START_TIME: &str = "2019-12-13T00:00:00Z";

fn main() -> ExitCode {
    let parser =
        cli::init_default_argument_parser(PROG_DESC, DEFAULT_CHAIN_ID, DEFAULT_START_TIME);
    driver::main(&parser, PassThrough)
}

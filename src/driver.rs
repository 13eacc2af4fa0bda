//! Driver for genesis tools
//!
//! Runs one transformation end to end, strictly in order:
//!
//! 1. Parse the command line (clap exits on usage errors)
//! 2. Reject an empty or whitespace-only chain identifier
//! 3. Read and parse the whole genesis document
//! 4. Wrap the vesting-info input as lazy rows
//! 5. Call the transformation
//! 6. Print the result as indented JSON with a trailing newline
//!
//! [`run`] holds the logic and returns a `Result`; [`main`] is the process
//! boundary that turns an error into a message on stderr and an exit code.

use crate::cli::{ArgumentParser, Arguments};
use crate::io::{read_genesis, write_json, VestingRows};
use crate::logging;
use crate::transform::GenesisTransform;
use crate::types::GenesisError;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;

/// Run a transformation against already-parsed arguments
///
/// Nothing is written to `output` unless the transformation succeeded and
/// its result serialized completely.
///
/// # Errors
///
/// * `GenesisError::Configuration` if the chain identifier is blank (the
///   inputs are not read and the transformation is not called)
/// * `GenesisError::FileAccess` if an input cannot be opened
/// * `GenesisError::DataFormat` if the genesis document is not valid JSON
/// * `GenesisError::Serialization` if the result cannot be rendered
/// * any error returned by the transformation itself
pub fn run<T: GenesisTransform>(
    args: &Arguments,
    transform: T,
    output: &mut dyn Write,
) -> Result<(), GenesisError> {
    args.validate()?;

    let genesis = {
        let mut reader = args.exported_genesis.open()?;
        read_genesis(&mut reader)?
    };
    debug!(source = %args.exported_genesis, "genesis parsed");

    let vesting_info = VestingRows::new(&args.vesting_info)?;
    debug!(source = %args.vesting_info, chain_id = %args.chain_id, "running transform");

    let result = transform.transform(genesis, vesting_info, args)?;

    write_json(&result, output)
}

/// Parse the process arguments, run the transformation and print the result
///
/// Intended to be returned straight from a tool's `main`.
pub fn main<T: GenesisTransform>(parser: &ArgumentParser, transform: T) -> ExitCode {
    logging::init();

    let args = parser.parse();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    match run(&args, transform, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "genesis transform failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::InputSource;
    use crate::transform::{from_fn, PassThrough};
    use rstest::rstest;
    use serde_json::{json, Value};
    use std::cell::Cell;
    use std::collections::BTreeMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary input file for testing
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn args_for(genesis: &NamedTempFile, vesting: &NamedTempFile, chain_id: &str) -> Arguments {
        Arguments {
            exported_genesis: InputSource::File(genesis.path().to_path_buf()),
            vesting_info: InputSource::File(vesting.path().to_path_buf()),
            chain_id: chain_id.to_string(),
            start_time: "2019-12-13T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_identity_transform_prints_genesis() {
        let genesis = create_temp_file(r#"{"z": [1, 2], "a": {"b": null}}"#);
        let vesting = create_temp_file("terra1abc,100\n");
        let args = args_for(&genesis, &vesting, "test-1");

        let mut output = Vec::new();
        run(&args, PassThrough, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "{\n \"z\": [\n  1,\n  2\n ],\n \"a\": {\n  \"b\": null\n }\n}\n"
        );
    }

    #[test]
    fn test_chain_id_and_original_genesis() {
        let genesis = create_temp_file(r#"{"a": 1}"#);
        let vesting = create_temp_file("");
        let args = args_for(&genesis, &vesting, "test-1");

        let transform = from_fn(|genesis: Value, _: VestingRows, args: &Arguments| {
            Ok(json!({"chain_id": args.chain_id, "orig": genesis}))
        });

        let mut output = Vec::new();
        run(&args, transform, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "{\n \"chain_id\": \"test-1\",\n \"orig\": {\n  \"a\": 1\n }\n}\n"
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::space(" ")]
    #[case::whitespace("\t \n")]
    fn test_blank_chain_id_skips_transform(#[case] chain_id: &str) {
        let genesis = create_temp_file(r#"{"a": 1}"#);
        let vesting = create_temp_file("");
        let args = args_for(&genesis, &vesting, chain_id);

        let called = Cell::new(false);
        let transform = from_fn(|genesis: Value, _: VestingRows, _: &Arguments| {
            called.set(true);
            Ok(genesis)
        });

        let mut output = Vec::new();
        let result = run(&args, transform, &mut output);

        assert_eq!(result, Err(GenesisError::configuration("chain-id required")));
        assert!(!called.get());
        assert!(output.is_empty());
    }

    #[test]
    fn test_blank_chain_id_checked_before_inputs() {
        let args = Arguments {
            exported_genesis: InputSource::File("missing-genesis.json".into()),
            vesting_info: InputSource::File("missing-vesting.csv".into()),
            chain_id: "  ".to_string(),
            start_time: String::new(),
        };

        let mut output = Vec::new();
        let result = run(&args, PassThrough, &mut output);

        assert!(matches!(result, Err(GenesisError::Configuration { .. })));
    }

    #[test]
    fn test_malformed_genesis_writes_nothing() {
        let genesis = create_temp_file("{not json");
        let vesting = create_temp_file("");
        let args = args_for(&genesis, &vesting, "test-1");

        let mut output = Vec::new();
        let result = run(&args, PassThrough, &mut output);

        assert!(matches!(result, Err(GenesisError::DataFormat { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_vesting_rows_reach_transform_in_order() {
        let genesis = create_temp_file("{}");
        let vesting = create_temp_file("terra1a,1,x\nterra1b,2\n\"terra1c\",\"3,5\",,\n");
        let args = args_for(&genesis, &vesting, "test-1");

        let transform = from_fn(|_: Value, rows: VestingRows, _: &Arguments| {
            rows.collect::<Result<Vec<_>, _>>()
        });

        let mut output = Vec::new();
        run(&args, transform, &mut output).unwrap();

        let printed: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            printed,
            json!([["terra1a", "1", "x"], ["terra1b", "2"], ["terra1c", "3,5", "", ""]])
        );
    }

    #[test]
    fn test_transform_error_propagates() {
        let genesis = create_temp_file("{}");
        let vesting = create_temp_file("");
        let args = args_for(&genesis, &vesting, "test-1");

        let transform = from_fn(|_: Value, _: VestingRows, _: &Arguments| {
            Err::<Value, _>(GenesisError::transform("missing accounts"))
        });

        let mut output = Vec::new();
        let result = run(&args, transform, &mut output);

        assert_eq!(result, Err(GenesisError::transform("missing accounts")));
        assert!(output.is_empty());
    }

    #[test]
    fn test_unserializable_result_writes_nothing() {
        let genesis = create_temp_file("{}");
        let vesting = create_temp_file("");
        let args = args_for(&genesis, &vesting, "test-1");

        let transform = from_fn(|_: Value, _: VestingRows, _: &Arguments| {
            let mut by_pair = BTreeMap::new();
            by_pair.insert((1u32, 2u32), "vesting");
            Ok(by_pair)
        });

        let mut output = Vec::new();
        let result = run(&args, transform, &mut output);

        assert!(matches!(result, Err(GenesisError::Serialization { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_vanished_input_is_file_access_error() {
        let genesis = create_temp_file("{}");
        let vesting = create_temp_file("");
        let args = args_for(&genesis, &vesting, "test-1");
        drop(genesis);

        let mut output = Vec::new();
        let result = run(&args, PassThrough, &mut output);

        assert!(matches!(result, Err(GenesisError::FileAccess { .. })));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let genesis = create_temp_file(r#"{"accounts": [{"address": "terra1abc", "coins": []}], "chain_id": "x"}"#);
        let vesting = create_temp_file("terra1abc,100\n");
        let args = args_for(&genesis, &vesting, "test-1");

        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&args, PassThrough, &mut first).unwrap();
        run(&args, PassThrough, &mut second).unwrap();

        assert_eq!(first, second);
    }
}

use crate::io::InputSource;
use crate::types::GenesisError;
use clap::{ArgMatches, Command, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;

/// Inputs for a genesis transformation, populated once from the command line
///
/// The tool-specific defaults for `--chain-id` and `--start-time` are filled in
/// by [`init_default_argument_parser`].
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version)]
pub struct Arguments {
    /// exported genesis.json file ('-' for stdin)
    #[arg(value_name = "EXPORTED_GENESIS", value_parser = InputSource::parse_readable)]
    pub exported_genesis: InputSource,

    /// i-4-vesting-type-accounts.csv file ('-' for stdin)
    #[arg(value_name = "VESTING_INFO", value_parser = InputSource::parse_readable)]
    pub vesting_info: InputSource,

    /// Identifier of the target chain
    #[arg(long = "chain-id", value_name = "CHAIN_ID", default_value = "")]
    pub chain_id: String,

    /// Start time handed to the transformation as-is
    #[arg(long = "start-time", value_name = "START_TIME", default_value = "")]
    pub start_time: String,
}

impl Arguments {
    /// Check the values that clap cannot check on its own
    ///
    /// # Errors
    ///
    /// Returns `GenesisError::Configuration` if the chain identifier is empty
    /// or only whitespace.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.chain_id.trim().is_empty() {
            return Err(GenesisError::configuration("chain-id required"));
        }
        Ok(())
    }
}

/// Command-line parser configured with a tool's description and defaults
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    command: Command,
}

/// Build the parser shared by every genesis tool
///
/// Recognizes two positional inputs (`EXPORTED_GENESIS`, `VESTING_INFO`) and
/// the `--chain-id` and `--start-time` options, which default to the supplied
/// values. No file is touched until parsing.
pub fn init_default_argument_parser(
    prog_desc: &str,
    default_chain_id: &str,
    default_start_time: &str,
) -> ArgumentParser {
    let command = Arguments::command()
        .about(prog_desc.to_string())
        .mut_arg("chain_id", |arg| {
            arg.default_value(default_chain_id.to_string())
        })
        .mut_arg("start_time", |arg| {
            arg.default_value(default_start_time.to_string())
        });

    ArgumentParser { command }
}

impl ArgumentParser {
    /// Parse the process arguments
    ///
    /// On failure (missing or unreadable input, unknown flag, `--help`) clap
    /// prints the message or help text and exits the process.
    pub fn parse(&self) -> Arguments {
        let matches = self.command.clone().get_matches();
        self.arguments_from(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Parse the given arguments without exiting on failure
    ///
    /// The first item is the binary name, as with `std::env::args_os()`.
    ///
    /// # Errors
    ///
    /// Returns the clap error describing the usage problem.
    pub fn try_parse_from<I, T>(&self, itr: I) -> Result<Arguments, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(itr)?;
        self.arguments_from(&matches)
    }

    /// The underlying clap command, for help rendering and inspection
    pub fn command(&self) -> &Command {
        &self.command
    }

    fn arguments_from(&self, matches: &ArgMatches) -> Result<Arguments, clap::Error> {
        Arguments::from_arg_matches(matches).map_err(|e| e.format(&mut self.command.clone()))
    }
}

// CLI module
// Command-line interface and argument parsing shared by genesis tools

mod args;

pub use args::{init_default_argument_parser, ArgumentParser, Arguments};

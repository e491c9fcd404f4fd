//! Command-line surface of the converter
//!
//! [`CliArgs`] holds the three path options; [`parse_args`] reads them from
//! the process arguments.

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints its message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

//! QIF Converter CLI
//!
//! Command-line interface for converting a QIF export into a text summary
//! and a CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- -i export.qif
//! cargo run -- -i export.qif -t summary.txt -c export.csv
//! RUST_LOG=debug cargo run -- --input export.qif
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input not found or unreadable, output not writable)

use env_logger::Env;
use qif_convert::cli;
use qif_convert::pipeline;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();
    let config = args.to_conversion_config();

    match pipeline::convert(&config) {
        Ok(report) => println!("{}", report.success_message()),
        Err(e) => {
            eprintln!("Error occurred: {}", e);
            process::exit(1);
        }
    }
}

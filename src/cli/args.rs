use crate::pipeline::{ConversionConfig, DEFAULT_CSV_OUTPUT, DEFAULT_TEXT_OUTPUT};
use clap::Parser;
use std::path::PathBuf;

/// Parse a QIF file and output a summary and CSV
#[derive(Parser, Debug)]
#[command(name = "qif-convert")]
#[command(about = "Parse a QIF file and output a summary and CSV.", long_about = None)]
pub struct CliArgs {
    /// Input QIF file path
    #[arg(
        short = 'i',
        long = "input",
        value_name = "INPUT",
        help = "Path to the input QIF file"
    )]
    pub input_file: PathBuf,

    /// Human-readable summary output path
    #[arg(
        short = 't',
        long = "text-output",
        value_name = "PATH",
        default_value = DEFAULT_TEXT_OUTPUT,
        help = "Path for the human-readable summary file"
    )]
    pub text_output: PathBuf,

    /// CSV output path
    #[arg(
        short = 'c',
        long = "csv-output",
        value_name = "PATH",
        default_value = DEFAULT_CSV_OUTPUT,
        help = "Path for the output CSV file"
    )]
    pub csv_output: PathBuf,
}

impl CliArgs {
    /// Build the pipeline configuration from the parsed arguments
    pub fn to_conversion_config(&self) -> ConversionConfig {
        ConversionConfig {
            input: self.input_file.clone(),
            text_output: self.text_output.clone(),
            csv_output: self.csv_output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(
        &["program", "-i", "in.qif"],
        "in.qif", "transactions_summary.txt", "transactions.csv"
    )]
    #[case::long_flags(
        &["program", "--input", "in.qif", "--text-output", "s.txt", "--csv-output", "o.csv"],
        "in.qif", "s.txt", "o.csv"
    )]
    #[case::short_flags(
        &["program", "-i", "in.qif", "-t", "s.txt", "-c", "o.csv"],
        "in.qif", "s.txt", "o.csv"
    )]
    #[case::only_csv(
        &["program", "-c", "o.csv", "-i", "in.qif"],
        "in.qif", "transactions_summary.txt", "o.csv"
    )]
    fn test_conversion_config(
        #[case] args: &[&str],
        #[case] input: &str,
        #[case] text_output: &str,
        #[case] csv_output: &str,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_conversion_config();

        assert_eq!(config.input, PathBuf::from(input));
        assert_eq!(config.text_output, PathBuf::from(text_output));
        assert_eq!(config.csv_output, PathBuf::from(csv_output));
    }

    // Error handling tests
    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::positional_input(&["program", "in.qif"])]
    #[case::missing_value(&["program", "-i"])]
    #[case::unknown_flag(&["program", "-i", "in.qif", "--verbose"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}

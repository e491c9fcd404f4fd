//! End-to-end integration tests
//!
//! These tests validate the complete conversion pipeline using predefined
//! QIF fixtures. Each test:
//! 1. Reads input.qif from a fixture directory
//! 2. Converts it into a summary and a CSV inside a temporary directory
//! 3. Compares both outputs with expected.txt and expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path and multiple account sections
//! - Every supported date layout plus the raw fallback
//! - Missing, repeated and unknown fields
//! - Trailing unterminated records and files without transactions
//! - CSV quoting

#[cfg(test)]
mod tests {
    use qif_convert::pipeline::{convert, ConversionConfig};
    use qif_convert::QifError;
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    /// Run a fixture and compare both outputs with the expected files
    ///
    /// # Panics
    ///
    /// Panics if a fixture file is missing or an output does not match.
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = PathBuf::from(format!("tests/fixtures/{}", fixture_name));
        let input_path = fixture_dir.join("input.qif");
        let expected_csv_path = fixture_dir.join("expected.csv");
        let expected_txt_path = fixture_dir.join("expected.txt");

        for path in [&input_path, &expected_csv_path, &expected_txt_path] {
            assert!(path.exists(), "Fixture file not found: {}", path.display());
        }

        let out_dir = tempdir().expect("Failed to create temp dir");
        let config = ConversionConfig {
            input: input_path,
            text_output: out_dir.path().join("summary.txt"),
            csv_output: out_dir.path().join("transactions.csv"),
        };

        convert(&config).unwrap_or_else(|e| panic!("Failed to convert {}: {}", fixture_name, e));

        for (actual_path, expected_path) in [
            (&config.csv_output, &expected_csv_path),
            (&config.text_output, &expected_txt_path),
        ] {
            let actual = fs::read_to_string(actual_path)
                .unwrap_or_else(|e| panic!("Failed to read output {}: {}", actual_path.display(), e));
            let expected = fs::read_to_string(expected_path).unwrap_or_else(|e| {
                panic!("Failed to read expected file {}: {}", expected_path.display(), e)
            });

            assert_eq!(
                actual, expected,
                "\n\nOutput mismatch for fixture: {} ({})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
                fixture_name,
                expected_path.display(),
                actual,
                expected
            );
        }
    }

    #[rstest]
    #[case("happy_path")]
    #[case("account_sections")]
    #[case("date_formats")]
    #[case("missing_fields")]
    #[case("trailing_unterminated")]
    #[case("no_transactions")]
    #[case("csv_quoting")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[test]
    fn test_report_counts_match_fixture() {
        let out_dir = tempdir().unwrap();
        let config = ConversionConfig {
            input: PathBuf::from("tests/fixtures/trailing_unterminated/input.qif"),
            text_output: out_dir.path().join("summary.txt"),
            csv_output: out_dir.path().join("transactions.csv"),
        };

        let report = convert(&config).unwrap();
        assert_eq!(report.stats.records, 1);
        assert!(report.stats.discarded_trailing);
        assert_eq!(report.csv_output, config.csv_output);
    }

    #[test]
    fn test_missing_input_is_reported() {
        let out_dir = tempdir().unwrap();
        let config = ConversionConfig {
            input: PathBuf::from("tests/fixtures/does_not_exist.qif"),
            text_output: out_dir.path().join("summary.txt"),
            csv_output: out_dir.path().join("transactions.csv"),
        };

        let error = convert(&config).unwrap_err();
        assert_eq!(
            error,
            QifError::FileNotFound {
                path: "tests/fixtures/does_not_exist.qif".to_string()
            }
        );
        assert!(!Path::new(&config.text_output).exists());
        assert!(!Path::new(&config.csv_output).exists());
    }
}

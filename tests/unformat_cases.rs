#[cfg(test)]
mod tests {
    use formatcurrency::unformat;
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Deserialize)]
    struct TestCase {
        input: String,
        decimal: Option<char>,
        expected: f64,
    }

    #[derive(Debug, Deserialize)]
    struct TestCases {
        cases: Vec<TestCase>,
    }

    fn run_test_case(case: &TestCase) -> Result<(), String> {
        let result = unformat(case.input.as_str(), case.decimal);

        if result != case.expected {
            return Err(format!(
                "\n✗ Mismatch for input: {:?}\nDecimal:    {:?}\nExpected:   {}\nActual:     {}",
                case.input, case.decimal, case.expected, result
            ));
        }

        Ok(())
    }

    #[test]
    fn test_unformat_case_table() {
        let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("unformat-cases.toml");

        let toml_content = fs::read_to_string(&toml_path)
            .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

        let test_suite: TestCases = toml::from_str(&toml_content)
            .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e));

        assert!(!test_suite.cases.is_empty(), "Case table should not be empty");

        let failures: Vec<String> = test_suite
            .cases
            .iter()
            .filter_map(|case| run_test_case(case).err())
            .collect();

        assert!(
            failures.is_empty(),
            "{} of {} cases failed:{}",
            failures.len(),
            test_suite.cases.len(),
            failures.concat()
        );
    }
}

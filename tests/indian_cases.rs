#[cfg(test)]
mod tests {
    use desi_currency::{
        format, format_accounting, format_whole, to_crores, to_indian_words, to_lakhs,
        to_shorthand, to_words,
    };
    use serde::Deserialize;
    use std::fs;
    use std::path::PathBuf;

    fn default_true() -> bool {
        true
    }

    fn default_decimals() -> u32 {
        2
    }

    #[derive(Debug, Deserialize)]
    struct TestCase {
        operation: String,
        value: f64,
        #[serde(default = "default_true")]
        show_symbol: bool,
        #[serde(default = "default_decimals")]
        decimals: u32,
        expected: String,
    }

    #[derive(Debug, Deserialize)]
    struct TestCases {
        cases: Vec<TestCase>,
    }

    fn run_test_case(case: &TestCase) -> Result<(), String> {
        let result = match case.operation.as_str() {
            "format" => format(case.value, case.show_symbol),
            "format_whole" => format_whole(case.value, case.show_symbol),
            "format_accounting" => format_accounting(case.value, case.show_symbol),
            "to_lakhs" => to_lakhs(case.value, case.decimals, case.show_symbol),
            "to_crores" => to_crores(case.value, case.decimals, case.show_symbol),
            "to_shorthand" => to_shorthand(case.value, case.show_symbol),
            "to_words" => to_words(case.value, case.show_symbol),
            "to_indian_words" => to_indian_words(case.value),
            other => return Err(format!("Unknown operation in fixture: {}", other)),
        };

        if result != case.expected {
            return Err(format!(
                "\n✗ Mismatch for {}({})\nExpected:   \"{}\"\nActual:     \"{}\"",
                case.operation, case.value, case.expected, result
            ));
        }

        Ok(())
    }

    #[test]
    fn test_fixture_cases() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("indian_cases.json");
        let content = fs::read_to_string(&path).expect("fixture file is readable");
        let cases: TestCases = serde_json::from_str(&content).expect("fixture file is valid JSON");
        assert!(!cases.cases.is_empty());

        let failures: Vec<String> = cases
            .cases
            .iter()
            .filter_map(|case| run_test_case(case).err())
            .collect();

        assert!(
            failures.is_empty(),
            "{} of {} fixture cases failed:{}",
            failures.len(),
            cases.cases.len(),
            failures.join("")
        );
    }
}

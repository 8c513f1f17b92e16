//! Matrix-build demo: fixed test cases plus runtime identification

use crate::error::{Error, Result};

struct Case {
    name: &'static str,
    expected: &'static str,
    actual: &'static str,
}

const CASES: [Case; 3] = [
    Case {
        name: "Test 1: Basic functionality",
        expected: "true",
        actual: "true",
    },
    Case {
        name: "Test 2: Edge cases",
        expected: "42",
        actual: "42",
    },
    Case {
        name: "Test 3: Error handling",
        expected: "success",
        actual: "success",
    },
];

/// Run the fixed matrix test cases
///
/// `force_failure` flips the last expectation so the non-zero exit path can
/// be exercised; with the stock fixtures every case passes.
pub fn run(force_failure: bool) -> Result<()> {
    println!("Running tests...");
    println!("Crate version: {}", env!("CARGO_PKG_VERSION"));
    println!("Platform: {}", std::env::consts::OS);
    println!("Architecture: {}", std::env::consts::ARCH);

    let mut passed = 0;
    let mut failed = 0;

    for (index, case) in CASES.iter().enumerate() {
        let actual = if force_failure && index == CASES.len() - 1 {
            "failure"
        } else {
            case.actual
        };
        if case.expected == actual {
            println!("  ✓ PASS - {}", case.name);
            passed += 1;
        } else {
            println!("  ✗ FAIL - {}", case.name);
            failed += 1;
        }
    }

    println!("\nResults: {passed} passed, {failed} failed");

    if failed > 0 {
        return Err(Error::TestFailure(format!(
            "{failed} of {} matrix cases failed",
            CASES.len()
        )));
    }

    println!("All tests passed! ✓");
    Ok(())
}

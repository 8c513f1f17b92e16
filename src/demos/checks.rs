//! Lint and test demos for the reusable-workflow pipeline

const LINT_CHECKS: [&str; 4] = [
    "Syntax validation",
    "Code style",
    "Best practices",
    "Security patterns",
];

const WORKFLOW_TESTS: [&str; 4] = [
    "Reusable workflow input handling",
    "Composite action execution",
    "Artifact upload/download",
    "Output propagation",
];

pub fn lint() {
    println!("Checking code quality...");
    for check in LINT_CHECKS {
        println!("  ✓ {check}");
    }
    println!("\nAll checks passed!");
}

pub fn test() {
    println!("Running tests...");
    for name in WORKFLOW_TESTS {
        println!("  ✓ {name}: pass");
    }
    println!("\n{} tests passed!", WORKFLOW_TESTS.len());
}

//! Custom-package demos: package self-test and simulated consumer app

use crate::package;

/// Exercise the bundled sample package and print the check transcript
pub fn package_test() {
    println!("Testing package...");

    let greeting = package::greet("GitHub");
    println!("  ✓ greet(): {greeting}");

    let result = package::calculate(10, 5);
    println!(
        "  ✓ calculate(): sum={}, product={}",
        result.sum, result.product
    );

    println!("All package tests passed!");
}

/// Print the consumer-app transcript, simulating a registry fetch
pub fn consumer() {
    println!("Consumer App Starting...");
    println!();
    println!("Using package from GitHub Packages:");
    println!("  - Loaded @github-user/my-awesome-package@1.0.0");
    println!("  - Calling greet(\"Audience\")");
    println!("  - Result: \"{}\"", package::greet("Audience"));
    println!();
    println!("✓ Successfully consumed package from GitHub Packages!");
}

//! Bundled sample package used by the custom-package demos
//!
//! Stands in for a package published to a registry; the consumer demo
//! pretends to fetch it, the package-test demo exercises it directly.

use serde::Serialize;

pub fn greet(name: &str) -> String {
    format!("Hello, {name}! This is from a GitHub Package.")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub sum: i64,
    pub product: i64,
    pub difference: i64,
}

pub fn calculate(a: i64, b: i64) -> Calculation {
    Calculation {
        sum: a + b,
        product: a * b,
        difference: a - b,
    }
}

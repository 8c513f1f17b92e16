//! # actions-lab
//!
//! A local workbench for GitHub Actions concepts. The one real component is
//! the greeting composite action: it reads named inputs, renders a greeting
//! by style, and publishes `greeting` and `time` outputs for the invoking
//! runner. The remaining subcommands are deterministic demo pipelines
//! (matrix builds, reusable workflows, environments, dynamic jobs, custom
//! packages) that print fixed transcripts and write fixture files.
//!
//! ## Usage
//!
//! ```bash
//! actions-lab greet --who-to-greet World --greeting-style formal
//! actions-lab demo matrix-test
//! actions-lab demo deploy --no-delay
//! ```
//!
//! ## Modules
//!
//! - `env` - Trait-based host environment abstraction (real runner + mock)
//! - `greeting` - The greeting action: styles, request/response, harness
//! - `demos` - Simulated CI pipelines with deterministic transcripts
//! - `package` - Bundled sample package used by the custom-package demos
pub mod demos;
pub mod env;
pub mod error;
pub mod greeting;
pub mod package;

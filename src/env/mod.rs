//! Host environment abstraction for composite actions
//!
//! A composite action never talks to the invoking runner directly; it reads
//! named inputs and publishes named outputs through the [`ActionEnv`] trait.
//! This keeps the action logic pure and testable:
//! - **Trait**: [`ActionEnv`] defines the input/output capability
//! - **Real implementation**: [`RealActionEnv`] speaks the GitHub Actions
//!   conventions (`INPUT_*` environment variables, `GITHUB_OUTPUT` file)
//! - **Mock implementation**: [`MockActionEnv`] holds inputs in memory and
//!   records outputs, with an optional injected read failure
//!
//! # Usage
//!
//! ```
//! use actions_lab::env::{ActionEnv, MockActionEnv};
//!
//! let env = MockActionEnv::new();
//! env.add_input("who-to-greet", "World");
//!
//! let value = env.input("who-to-greet").unwrap();
//! assert_eq!(value.as_deref(), Some("World"));
//! ```

mod mock;
mod real;
mod traits;

pub use mock::MockActionEnv;
pub use real::RealActionEnv;
pub use traits::ActionEnv;

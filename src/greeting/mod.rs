//! The greeting composite action
//!
//! Reads two named inputs (`who-to-greet`, `greeting-style`), renders a
//! greeting from a per-style template, captures the invocation wall-clock
//! time, and publishes both as the `greeting` and `time` outputs. One linear
//! request/response pass: the only branch is style selection and the only
//! failure exit is the host environment refusing to supply inputs.

mod action;
mod style;

pub use action::{run, GreetingRequest, GreetingResult};
pub use action::{INPUT_GREETING_STYLE, INPUT_WHO_TO_GREET, OUTPUT_GREETING, OUTPUT_TIME};
pub use style::GreetingStyle;

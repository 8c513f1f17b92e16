//! Action harness: input retrieval, rendering, output publication

use super::style::GreetingStyle;
use crate::env::ActionEnv;
use crate::error::Result;
use chrono::Local;
use tracing::info;

pub const INPUT_WHO_TO_GREET: &str = "who-to-greet";
pub const INPUT_GREETING_STYLE: &str = "greeting-style";
pub const OUTPUT_GREETING: &str = "greeting";
pub const OUTPUT_TIME: &str = "time";

/// Immutable snapshot of the action's configuration, built once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingRequest {
    pub name: String,
    pub style: GreetingStyle,
}

impl GreetingRequest {
    /// Read both inputs through the host environment
    ///
    /// A missing `who-to-greet` becomes the empty string and a missing
    /// `greeting-style` selects the casual default; only the host failing
    /// to supply inputs at all is an error.
    pub fn from_env(env: &dyn ActionEnv) -> Result<Self> {
        let name = env.input(INPUT_WHO_TO_GREET)?.unwrap_or_default();
        let style = env
            .input(INPUT_GREETING_STYLE)?
            .map(|raw| GreetingStyle::parse(&raw))
            .unwrap_or_default();
        Ok(Self { name, style })
    }

    /// Render the greeting and capture the invocation wall-clock time
    pub fn respond(&self) -> GreetingResult {
        GreetingResult {
            greeting: self.style.render(&self.name),
            time: Local::now().format("%H:%M:%S %:z").to_string(),
        }
    }
}

/// The two output values published on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingResult {
    pub greeting: String,
    pub time: String,
}

/// Run the greeting action against the given host environment
///
/// Inputs are read before anything is published, so an input-retrieval
/// failure leaves zero outputs set. The diagnostic line is observability
/// only; the functional contract is the two outputs.
pub fn run(env: &dyn ActionEnv) -> Result<GreetingResult> {
    let request = GreetingRequest::from_env(env)?;
    let result = request.respond();

    info!(
        who = %request.name,
        time = %result.time,
        "{}", result.greeting
    );

    env.set_output(OUTPUT_GREETING, &result.greeting)?;
    env.set_output(OUTPUT_TIME, &result.time)?;
    Ok(result)
}

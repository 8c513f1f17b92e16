//! Trait definition for the action host environment

use crate::error::Result;

/// Input/output surface between an action and its invoking runner
///
/// Implementations decide where inputs come from and where outputs go; the
/// action itself only sees named string values.
///
/// # Examples
///
/// ```
/// use actions_lab::env::{ActionEnv, MockActionEnv};
///
/// fn read_name(env: &dyn ActionEnv) -> actions_lab::error::Result<String> {
///     Ok(env.input("who-to-greet")?.unwrap_or_default())
/// }
///
/// let env = MockActionEnv::new();
/// env.add_input("who-to-greet", "Sam");
/// assert_eq!(read_name(&env).unwrap(), "Sam");
/// ```
pub trait ActionEnv: Send + Sync {
    /// Look up a named action input
    ///
    /// `Ok(None)` means the input was simply not provided; callers apply
    /// their own defaults. `Err` means the host could not supply the
    /// declared inputs at all.
    fn input(&self, name: &str) -> Result<Option<String>>;

    /// Publish a named output value for the invoking runner
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
}

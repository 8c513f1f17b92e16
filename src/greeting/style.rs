//! Greeting style selection and templates

/// Closed set of greeting templates
///
/// Selection is by exact string match; anything unrecognized (including the
/// empty string) selects [`GreetingStyle::Casual`]. That fallback is the
/// default branch of the dispatch, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingStyle {
    Formal,
    Enthusiastic,
    Casual,
}

impl GreetingStyle {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "formal" => Self::Formal,
            "enthusiastic" => Self::Enthusiastic,
            _ => Self::Casual,
        }
    }

    /// Render the template for this style with `name` substituted verbatim
    ///
    /// No validation is performed on the name; an empty name yields a
    /// degenerate but well-formed greeting.
    pub fn render(self, name: &str) -> String {
        match self {
            Self::Formal => format!("Good day, {name}. It is a pleasure to meet you."),
            Self::Enthusiastic => format!("Hello {name}! 🎉 So excited to see you here!"),
            Self::Casual => format!("Hey {name}, what's up?"),
        }
    }
}

impl Default for GreetingStyle {
    fn default() -> Self {
        Self::Casual
    }
}

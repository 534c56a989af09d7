use std::fmt;

/// A directive name that is not part of the fetch-directive vocabulary.
///
/// Returned by [`Directive::from_str`](std::str::FromStr::from_str).
/// [`Policy`](crate::Policy) never surfaces this error: unknown names are
/// dropped during construction and derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirective {
    name: String,
}

impl UnknownDirective {
    /// Creates a new error for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the rejected directive name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown directive '{}'", self.name)
    }
}

impl std::error::Error for UnknownDirective {}

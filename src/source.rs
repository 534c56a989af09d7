//! Source-expression inputs and well-known keywords.

use crate::SourceList;

/// The `'self'` keyword.
pub const SELF: &str = "'self'";
/// The `'none'` keyword.
pub const NONE: &str = "'none'";
/// The `'unsafe-inline'` keyword.
pub const UNSAFE_INLINE: &str = "'unsafe-inline'";
/// The `'unsafe-eval'` keyword.
pub const UNSAFE_EVAL: &str = "'unsafe-eval'";

/// The shapes a caller may supply for a directive's sources.
///
/// Resolved once, when a [`Policy`](crate::Policy) is constructed.
///
/// # Examples
///
/// ```
/// use csp_policy::{SourceInput, SourceList};
///
/// let text = SourceInput::from("'self'  https://a.example");
/// let seq = SourceInput::from(vec!["'self'", "https://a.example"]);
/// let list = SourceInput::from(SourceList::from_iter(["'self'", "https://a.example"]));
///
/// assert_eq!(text.into_tokens(), seq.clone().into_tokens());
/// assert_eq!(seq.into_tokens(), list.into_tokens());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// Whitespace-delimited source expressions.
    Text(String),
    /// Individual source expressions.
    Sequence(Vec<String>),
    /// A list built earlier.
    List(SourceList),
}

impl SourceInput {
    /// Flattens the input into individual source expressions, in order.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            SourceInput::Text(text) => text.split_whitespace().map(str::to_owned).collect(),
            SourceInput::Sequence(items) => items,
            SourceInput::List(list) => list.to_sequence(),
        }
    }
}

impl From<&str> for SourceInput {
    fn from(text: &str) -> Self {
        SourceInput::Text(text.to_owned())
    }
}

impl From<String> for SourceInput {
    fn from(text: String) -> Self {
        SourceInput::Text(text)
    }
}

impl From<Vec<String>> for SourceInput {
    fn from(items: Vec<String>) -> Self {
        SourceInput::Sequence(items)
    }
}

impl From<Vec<&str>> for SourceInput {
    fn from(items: Vec<&str>) -> Self {
        SourceInput::Sequence(items.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for SourceInput {
    fn from(items: &[&str]) -> Self {
        SourceInput::Sequence(items.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SourceInput {
    fn from(items: [&str; N]) -> Self {
        SourceInput::Sequence(items.into_iter().map(str::to_owned).collect())
    }
}

impl From<SourceList> for SourceInput {
    fn from(list: SourceList) -> Self {
        SourceInput::List(list)
    }
}

impl From<&SourceList> for SourceInput {
    fn from(list: &SourceList) -> Self {
        SourceInput::List(list.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_splits_on_any_whitespace() {
        let tokens = SourceInput::from(" 'self'\thttps://a.example  https://b.example\n").into_tokens();
        assert_eq!(tokens, vec!["'self'", "https://a.example", "https://b.example"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(SourceInput::from("   ").into_tokens().is_empty());
    }

    #[test]
    fn sequence_keeps_items_verbatim() {
        let tokens = SourceInput::from(["b", "a", "b"]).into_tokens();
        assert_eq!(tokens, vec!["b", "a", "b"]);
    }

    #[test]
    fn list_yields_its_entries() {
        let list = SourceList::from_iter([SELF, UNSAFE_INLINE]);
        assert_eq!(SourceInput::from(&list).into_tokens(), vec![SELF, UNSAFE_INLINE]);
    }
}

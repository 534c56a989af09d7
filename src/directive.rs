//! The closed vocabulary of fetch directives.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownDirective;

/// A CSP fetch directive.
///
/// Parsing is exact and case-sensitive; anything else is an
/// [`UnknownDirective`].
///
/// # Examples
///
/// ```
/// use csp_policy::Directive;
///
/// let directive: Directive = "script-src".parse().unwrap();
/// assert_eq!(directive, Directive::ScriptSrc);
/// assert_eq!(directive.as_str(), "script-src");
/// assert!("milktoast".parse::<Directive>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `default-src`
    DefaultSrc,
    /// `script-src`
    ScriptSrc,
    /// `style-src`
    StyleSrc,
    /// `img-src`
    ImgSrc,
    /// `font-src`
    FontSrc,
    /// `media-src`
    MediaSrc,
    /// `object-src`
    ObjectSrc,
    /// `form-action`
    FormAction,
    /// `connect-src`
    ConnectSrc,
    /// `frame-src`
    FrameSrc,
    /// `child-src`
    ChildSrc,
    /// `worker-src`
    WorkerSrc,
    /// `manifest-src`
    ManifestSrc,
}

impl Directive {
    /// Every fetch directive, in canonical order.
    pub const ALL: [Directive; 13] = [
        Directive::DefaultSrc,
        Directive::ScriptSrc,
        Directive::StyleSrc,
        Directive::ImgSrc,
        Directive::FontSrc,
        Directive::MediaSrc,
        Directive::ObjectSrc,
        Directive::FormAction,
        Directive::ConnectSrc,
        Directive::FrameSrc,
        Directive::ChildSrc,
        Directive::WorkerSrc,
        Directive::ManifestSrc,
    ];

    /// Returns the directive name as it appears in a header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::DefaultSrc => "default-src",
            Directive::ScriptSrc => "script-src",
            Directive::StyleSrc => "style-src",
            Directive::ImgSrc => "img-src",
            Directive::FontSrc => "font-src",
            Directive::MediaSrc => "media-src",
            Directive::ObjectSrc => "object-src",
            Directive::FormAction => "form-action",
            Directive::ConnectSrc => "connect-src",
            Directive::FrameSrc => "frame-src",
            Directive::ChildSrc => "child-src",
            Directive::WorkerSrc => "worker-src",
            Directive::ManifestSrc => "manifest-src",
        }
    }
}

impl FromStr for Directive {
    type Err = UnknownDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Directive::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDirective::new(s))
    }
}

impl AsRef<str> for Directive {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of directives a [`Policy`](crate::Policy) accepts.
///
/// Directives outside the vocabulary are treated exactly like unknown names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vocabulary {
    /// All thirteen fetch directives.
    #[default]
    Fetch,
    /// Only `default-src`, `script-src` and `style-src`.
    Minimal,
}

impl Vocabulary {
    /// Returns `true` if `directive` belongs to this vocabulary.
    pub fn contains(&self, directive: Directive) -> bool {
        match self {
            Vocabulary::Fetch => true,
            Vocabulary::Minimal => matches!(
                directive,
                Directive::DefaultSrc | Directive::ScriptSrc | Directive::StyleSrc
            ),
        }
    }

    /// Resolves a directive name against this vocabulary.
    ///
    /// Returns `None` for unknown names and for directives the vocabulary
    /// excludes.
    pub fn resolve(&self, name: &str) -> Option<Directive> {
        match name.parse::<Directive>() {
            Ok(directive) if self.contains(directive) => Some(directive),
            Ok(directive) => {
                tracing::debug!(%directive, vocabulary = ?self, "directive outside vocabulary dropped");
                None
            }
            Err(err) => {
                tracing::debug!(directive = err.name(), "unknown directive dropped");
                None
            }
        }
    }

    /// Iterates over the directives in this vocabulary, in canonical order.
    pub fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
        Directive::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_directive_round_trips_through_its_name() {
        for directive in Directive::ALL {
            assert_eq!(directive.as_str().parse::<Directive>(), Ok(directive));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Script-Src".parse::<Directive>().is_err());
        assert!(" script-src".parse::<Directive>().is_err());
    }

    #[test]
    fn non_fetch_directives_are_unknown() {
        let err = "frame-ancestors".parse::<Directive>().unwrap_err();
        assert_eq!(err.name(), "frame-ancestors");
    }

    #[test]
    fn display_matches_header_name() {
        assert_eq!(format!("{}", Directive::FormAction), "form-action");
        assert_eq!(Directive::ManifestSrc.as_ref(), "manifest-src");
    }

    #[test]
    fn fetch_vocabulary_is_the_default() {
        assert_eq!(Vocabulary::default(), Vocabulary::Fetch);
        assert_eq!(Vocabulary::Fetch.directives().count(), 13);
    }

    #[test]
    fn minimal_vocabulary_has_three_directives() {
        let minimal: Vec<Directive> = Vocabulary::Minimal.directives().collect();
        assert_eq!(
            minimal,
            vec![Directive::DefaultSrc, Directive::ScriptSrc, Directive::StyleSrc]
        );
    }

    #[test]
    fn resolve_drops_unknown_and_excluded_names() {
        assert_eq!(Vocabulary::Fetch.resolve("img-src"), Some(Directive::ImgSrc));
        assert_eq!(Vocabulary::Minimal.resolve("img-src"), None);
        assert_eq!(Vocabulary::Fetch.resolve("shuuba"), None);
    }
}

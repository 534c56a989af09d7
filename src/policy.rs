use std::fmt;

use crate::directive::Directive;
use crate::header::HeaderName;
use crate::options::PolicyOptions;
use crate::sink::{HeaderSink, SinkError};
use crate::source::{SourceInput, SELF, UNSAFE_INLINE};
use crate::source_list::SourceList;

/// An immutable Content-Security-Policy.
///
/// A `Policy` maps fetch directives to [`SourceList`]s, in the order the
/// directives were first introduced, and carries its [`PolicyOptions`].
/// Every derivation method returns a new policy; the receiver never changes.
///
/// Unknown directive names are dropped wherever they appear. They are never
/// stored, never rendered, and never reported as errors.
///
/// # Examples
///
/// ```
/// use csp_policy::Policy;
///
/// let policy = Policy::new([
///     ("default-src", vec!["https://www.google.com"]),
///     ("script-src", vec!["https://www.google.com"]),
/// ]);
///
/// assert_eq!(policy.source_string("default-src"), "'self' https://www.google.com");
/// assert_eq!(
///     policy.header_string(),
///     "Content-Security-Policy: default-src 'self' https://www.google.com; \
///      script-src 'self' https://www.google.com"
/// );
///
/// let relaxed = policy.add_unsafe_inline("script-src");
/// assert_eq!(
///     relaxed.source_string("script-src"),
///     "'self' https://www.google.com 'unsafe-inline'"
/// );
/// assert_eq!(policy.source_string("script-src"), "'self' https://www.google.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    entries: Vec<(Directive, SourceList)>,
    options: PolicyOptions,
}

impl Policy {
    /// Builds a policy with default options.
    ///
    /// Each referenced directive starts from `'self'`, then the supplied
    /// sources are merged in. A directive named twice merges into its first
    /// position.
    pub fn new<I, K, V>(directives: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<SourceInput>,
    {
        Self::with_options(directives, PolicyOptions::default())
    }

    /// Builds a policy with explicit options.
    ///
    /// # Examples
    ///
    /// ```
    /// use csp_policy::{Policy, PolicyOptions};
    ///
    /// let policy = Policy::with_options(
    ///     [("img-src", "https://img.example.com data:")],
    ///     PolicyOptions::default().auto_self(false).report_only(true),
    /// );
    ///
    /// assert_eq!(
    ///     policy.header_string(),
    ///     "Content-Security-Policy-Report-Only: img-src https://img.example.com data:"
    /// );
    /// ```
    pub fn with_options<I, K, V>(directives: I, options: PolicyOptions) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<SourceInput>,
    {
        Self {
            entries: Vec::new(),
            options,
        }
        .merge(directives, true, |list, tokens| list.add_list(tokens))
    }

    /// Returns a builder for chained construction.
    pub fn builder() -> crate::PolicyBuilder {
        crate::PolicyBuilder::new()
    }

    /// Adds one source to a directive.
    ///
    /// A directive not yet in the policy is introduced, seeded with `'self'`
    /// when auto-self is on.
    #[must_use]
    pub fn add_item_to_src(&self, directive: impl AsRef<str>, item: impl Into<String>) -> Self {
        self.add_list_to_src(directive, [item.into()])
    }

    /// Removes one source from a directive.
    #[must_use]
    pub fn remove_item_to_src(&self, directive: impl AsRef<str>, item: impl Into<String>) -> Self {
        self.remove_list_to_src(directive, [item.into()])
    }

    /// Adds several sources to a directive, in order.
    #[must_use]
    pub fn add_list_to_src<I>(&self, directive: impl AsRef<str>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        self.merge([(directive, items)], true, |list, tokens| list.add_list(tokens))
    }

    /// Removes several sources from a directive.
    ///
    /// Never introduces a directive that is not already present.
    #[must_use]
    pub fn remove_list_to_src<I>(&self, directive: impl AsRef<str>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        self.merge([(directive, items)], false, |list, tokens| list.remove_list(tokens))
    }

    /// Adds sources to several directives at once.
    ///
    /// With auto-self on, every touched directive is guaranteed to contain
    /// `'self'` afterwards, even if it had been removed earlier.
    ///
    /// # Examples
    ///
    /// ```
    /// use csp_policy::Policy;
    ///
    /// let policy = Policy::default().add_map([
    ///     ("default-src", vec!["https://www.example.com"]),
    ///     ("shuuba", vec!["alkjdfkjsd"]),
    /// ]);
    ///
    /// assert_eq!(
    ///     policy.header_string(),
    ///     "Content-Security-Policy: default-src 'self' https://www.example.com"
    /// );
    /// ```
    #[must_use]
    pub fn add_map<I, K, V>(&self, changes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<SourceInput>,
    {
        let auto_self = self.options.is_auto_self();
        self.merge(changes, true, |list, tokens| {
            let merged = list.add_list(tokens);
            if auto_self {
                merged.add(SELF)
            } else {
                merged
            }
        })
    }

    /// Removes sources from several directives at once. `'self'` is not
    /// re-added.
    #[must_use]
    pub fn remove_map<I, K, V>(&self, changes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<SourceInput>,
    {
        self.merge(changes, false, |list, tokens| list.remove_list(tokens))
    }

    /// Allows inline content for a directive.
    #[must_use]
    pub fn add_unsafe_inline(&self, directive: impl AsRef<str>) -> Self {
        self.add_item_to_src(directive, UNSAFE_INLINE)
    }

    /// Forbids inline content for a directive.
    #[must_use]
    pub fn remove_unsafe_inline(&self, directive: impl AsRef<str>) -> Self {
        self.remove_item_to_src(directive, UNSAFE_INLINE)
    }

    /// Returns the sources of a directive, if it is present.
    pub fn get(&self, directive: impl AsRef<str>) -> Option<&SourceList> {
        let directive = directive.as_ref().parse::<Directive>().ok()?;
        self.entries
            .iter()
            .find(|(d, _)| *d == directive)
            .map(|(_, list)| list)
    }

    /// Iterates over present directives in first-introduced order.
    pub fn directives(&self) -> impl Iterator<Item = (Directive, &SourceList)> + '_ {
        self.entries.iter().map(|(d, list)| (*d, list))
    }

    /// Returns the space-joined sources of a directive.
    ///
    /// Absent and unknown directives yield an empty string.
    pub fn source_string(&self, directive: impl AsRef<str>) -> String {
        self.get(directive)
            .map(SourceList::to_string)
            .unwrap_or_default()
    }

    /// Returns `"<directive> <sources>"`, or an empty string when the
    /// directive has no sources.
    pub fn header_line(&self, directive: impl AsRef<str>) -> String {
        match directive.as_ref().parse::<Directive>() {
            Ok(d) => match self.get(d) {
                Some(list) if !list.is_empty() => format!("{} {}", d, list),
                _ => String::new(),
            },
            Err(_) => String::new(),
        }
    }

    /// Returns every non-empty directive line joined with `"; "`.
    pub fn header_lines(&self) -> String {
        self.entries
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(d, list)| format!("{} {}", d, list))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Returns the header name selected by the report-only flag.
    pub fn header_name(&self) -> HeaderName {
        HeaderName::for_report_only(self.options.is_report_only())
    }

    /// Returns the complete header, `"<name>: <lines>"`.
    pub fn header_string(&self) -> String {
        format!("{}: {}", self.header_name(), self.header_lines())
    }

    /// Hands the header name and value to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the sink's `SinkError` unchanged.
    pub fn submit<S: HeaderSink + ?Sized>(&self, sink: &S) -> Result<(), SinkError> {
        let name = self.header_name();
        let value = self.header_lines();
        tracing::debug!(header = %name, directives = self.entries.len(), "submitting policy");

        sink.set_header(name.as_str(), &value).map_err(|err| {
            tracing::warn!(header = %name, error = %err, "header sink refused policy");
            err
        })
    }

    /// Returns the policy-wide options.
    pub fn options(&self) -> PolicyOptions {
        self.options
    }

    /// Returns `true` if the policy is emitted as report-only.
    pub fn is_report_only(&self) -> bool {
        self.options.is_report_only()
    }

    /// Returns `true` if referenced directives are seeded with `'self'`.
    pub fn is_auto_self(&self) -> bool {
        self.options.is_auto_self()
    }

    fn seed(&self) -> SourceList {
        if self.options.is_auto_self() {
            SourceList::new().add(SELF)
        } else {
            SourceList::new()
        }
    }

    /// Applies `op` to every named directive and returns the resulting policy.
    ///
    /// Names outside the vocabulary are skipped. An absent directive is
    /// created from the seed only when `introduce` is set.
    fn merge<I, K, V, F>(&self, changes: I, introduce: bool, op: F) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<SourceInput>,
        F: Fn(&SourceList, Vec<String>) -> SourceList,
    {
        let vocabulary = self.options.directive_vocabulary();
        let mut entries = self.entries.clone();

        for (name, input) in changes {
            let Some(directive) = vocabulary.resolve(name.as_ref()) else {
                continue;
            };
            let tokens = input.into().into_tokens();

            match entries.iter().position(|(d, _)| *d == directive) {
                Some(i) => {
                    let next = op(&entries[i].1, tokens);
                    entries[i].1 = next;
                }
                None if introduce => entries.push((directive, op(&self.seed(), tokens))),
                None => {}
            }
        }

        tracing::trace!(directives = entries.len(), "derived policy");
        Self {
            entries,
            options: self.options,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_lines())
    }
}

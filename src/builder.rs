use crate::{Policy, PolicyOptions, SourceInput, Vocabulary};

/// Chained construction of a [`Policy`].
///
/// Collects directives and options, then normalizes everything at once in
/// [`build`](Self::build). Directive names are not checked until then, so
/// unknown names are silently dropped exactly as in [`Policy::new`].
///
/// # Examples
///
/// ```
/// use csp_policy::Policy;
///
/// let policy = Policy::builder()
///     .report_only(true)
///     .directive("default-src", "https://cdn.example.com")
///     .directive("object-src", vec!["'none'"])
///     .build();
///
/// assert_eq!(
///     policy.header_string(),
///     "Content-Security-Policy-Report-Only: default-src 'self' https://cdn.example.com; \
///      object-src 'self' 'none'"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    options: PolicyOptions,
    directives: Vec<(String, SourceInput)>,
}

impl PolicyBuilder {
    /// Creates a builder with default options and no directives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether referenced directives are seeded with `'self'`.
    pub fn auto_self(mut self, enabled: bool) -> Self {
        self.options = self.options.auto_self(enabled);
        self
    }

    /// Sets whether the policy is emitted as report-only.
    pub fn report_only(mut self, enabled: bool) -> Self {
        self.options = self.options.report_only(enabled);
        self
    }

    /// Sets the accepted directive vocabulary.
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.options = self.options.vocabulary(vocabulary);
        self
    }

    /// Replaces all options at once.
    pub fn options(mut self, options: PolicyOptions) -> Self {
        self.options = options;
        self
    }

    /// Adds sources for a directive. Repeated directives are merged.
    pub fn directive(mut self, name: impl AsRef<str>, sources: impl Into<SourceInput>) -> Self {
        self.directives
            .push((name.as_ref().to_owned(), sources.into()));
        self
    }

    /// Normalizes the collected directives into a policy.
    pub fn build(self) -> Policy {
        Policy::with_options(self.directives, self.options)
    }
}

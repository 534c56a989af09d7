use crate::directive::Vocabulary;

/// Policy-wide settings carried by every [`Policy`](crate::Policy).
///
/// Defaults: `'self'` seeding on, enforcing header, full fetch vocabulary.
///
/// # Examples
///
/// ```
/// use csp_policy::{PolicyOptions, Vocabulary};
///
/// let options = PolicyOptions::default()
///     .auto_self(false)
///     .report_only(true)
///     .vocabulary(Vocabulary::Minimal);
///
/// assert!(!options.is_auto_self());
/// assert!(options.is_report_only());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyOptions {
    auto_self: bool,
    report_only: bool,
    vocabulary: Vocabulary,
}

impl PolicyOptions {
    /// Sets whether referenced directives are seeded with `'self'`.
    #[must_use]
    pub fn auto_self(mut self, enabled: bool) -> Self {
        self.auto_self = enabled;
        self
    }

    /// Sets whether the policy is emitted as report-only.
    #[must_use]
    pub fn report_only(mut self, enabled: bool) -> Self {
        self.report_only = enabled;
        self
    }

    /// Sets the accepted directive vocabulary.
    #[must_use]
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Returns `true` if referenced directives are seeded with `'self'`.
    pub fn is_auto_self(&self) -> bool {
        self.auto_self
    }

    /// Returns `true` if the policy is report-only.
    pub fn is_report_only(&self) -> bool {
        self.report_only
    }

    /// Returns the accepted directive vocabulary.
    pub fn directive_vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            auto_self: true,
            report_only: false,
            vocabulary: Vocabulary::Fetch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_self_and_enforce() {
        let options = PolicyOptions::default();
        assert!(options.is_auto_self());
        assert!(!options.is_report_only());
        assert_eq!(options.directive_vocabulary(), Vocabulary::Fetch);
    }

    #[test]
    fn setters_chain() {
        let options = PolicyOptions::default().report_only(true).auto_self(false);
        assert!(options.is_report_only());
        assert!(!options.is_auto_self());
    }
}

use std::fmt;

/// The response header a policy is emitted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderName {
    /// `Content-Security-Policy`: the browser enforces the policy.
    Enforce,
    /// `Content-Security-Policy-Report-Only`: violations are reported, not blocked.
    ReportOnly,
}

impl HeaderName {
    /// Selects the header name for the report-only flag.
    pub fn for_report_only(report_only: bool) -> Self {
        if report_only {
            HeaderName::ReportOnly
        } else {
            HeaderName::Enforce
        }
    }

    /// Returns the header name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderName::Enforce => "Content-Security-Policy",
            HeaderName::ReportOnly => "Content-Security-Policy-Report-Only",
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

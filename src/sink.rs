use std::cell::RefCell;
use std::fmt;

/// Error returned when a header could not be handed to the transport.
///
/// # Examples
///
/// ```
/// use csp_policy::{SinkError, SinkErrorKind};
///
/// let error = SinkError::new(SinkErrorKind::AlreadySent);
/// assert_eq!(error.kind(), SinkErrorKind::AlreadySent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    kind: SinkErrorKind,
    message: Option<String>,
}

impl SinkError {
    /// Creates a new sink error with the specified kind.
    pub fn new(kind: SinkErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Creates a new sink error with a custom message.
    pub fn with_message(kind: SinkErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SinkErrorKind {
        self.kind
    }

    /// Returns the error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = &self.message {
            write!(f, "header sink error ({}): {}", self.kind, msg)
        } else {
            write!(f, "header sink error ({})", self.kind)
        }
    }
}

impl std::error::Error for SinkError {}

/// Kind of sink error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkErrorKind {
    /// The transport refused the header name or value.
    Rejected,
    /// I/O error occurred while writing the header.
    Io,
    /// Response headers were already sent.
    AlreadySent,
}

impl fmt::Display for SinkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => write!(f, "header rejected"),
            Self::Io => write!(f, "I/O error"),
            Self::AlreadySent => write!(f, "headers already sent"),
        }
    }
}

/// The transport boundary that emits response headers.
///
/// A [`Policy`](crate::Policy) never writes headers itself; callers pass a
/// sink to [`Policy::submit`](crate::Policy::submit). Framework integrations
/// implement this trait over their response type.
///
/// # Examples
///
/// ```
/// use csp_policy::{HeaderSink, SinkError};
/// use std::cell::RefCell;
///
/// struct Response {
///     headers: RefCell<Vec<String>>,
/// }
///
/// impl HeaderSink for Response {
///     fn set_header(&self, name: &str, value: &str) -> Result<(), SinkError> {
///         self.headers.borrow_mut().push(format!("{}: {}", name, value));
///         Ok(())
///     }
/// }
/// ```
pub trait HeaderSink {
    /// Adds a header to the outgoing response.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the transport cannot accept the header.
    fn set_header(&self, name: &str, value: &str) -> Result<(), SinkError>;
}

impl<S: HeaderSink + ?Sized> HeaderSink for &S {
    fn set_header(&self, name: &str, value: &str) -> Result<(), SinkError> {
        (**self).set_header(name, value)
    }
}

/// A header emitted into a [`VecHeaderSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedHeader {
    /// Header name
    pub name: String,
    /// Header value
    pub value: String,
}

impl fmt::Display for RecordedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// A sink that records headers in memory instead of sending them.
///
/// Uses interior mutability so it can be shared by reference, like a
/// response object handed around a request handler.
///
/// # Examples
///
/// ```
/// use csp_policy::{Policy, VecHeaderSink};
///
/// let sink = VecHeaderSink::new();
/// let policy = Policy::new([("default-src", "https://cdn.example.com")]);
/// policy.submit(&sink).expect("recording sink accepts everything");
///
/// let headers = sink.into_vec();
/// assert_eq!(headers[0].to_string(), policy.header_string());
/// ```
#[derive(Debug, Default)]
pub struct VecHeaderSink {
    headers: RefCell<Vec<RecordedHeader>>,
}

impl VecHeaderSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self {
            headers: RefCell::new(Vec::new()),
        }
    }

    /// Returns the number of recorded headers.
    pub fn len(&self) -> usize {
        self.headers.borrow().len()
    }

    /// Returns `true` if no header has been recorded.
    pub fn is_empty(&self) -> bool {
        self.headers.borrow().is_empty()
    }

    /// Provides borrowed access to the recorded headers via callback.
    pub fn with_headers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[RecordedHeader]) -> R,
    {
        f(&self.headers.borrow())
    }

    /// Returns the value of the last header recorded under `name`.
    pub fn last_value(&self, name: &str) -> Option<String> {
        self.headers
            .borrow()
            .iter()
            .rev()
            .find(|h| h.name == name)
            .map(|h| h.value.clone())
    }

    /// Consumes the sink and returns the recorded headers.
    pub fn into_vec(self) -> Vec<RecordedHeader> {
        self.headers.into_inner()
    }
}

impl HeaderSink for VecHeaderSink {
    fn set_header(&self, name: &str, value: &str) -> Result<(), SinkError> {
        self.headers.borrow_mut().push(RecordedHeader {
            name: name.to_owned(),
            value: value.to_owned(),
        });
        Ok(())
    }
}

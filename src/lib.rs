//! Immutable Content-Security-Policy values and header serialization.
//!
//! This crate builds `Content-Security-Policy` header values from a typed,
//! immutable mapping of fetch directives to source lists:
//! - **Permissive by construction**: unknown directives are dropped, duplicate
//!   sources are merged, and no policy operation can fail
//! - **Copy-on-derive**: every change returns a new [`Policy`]; an issued
//!   policy never changes underneath its holders
//! - **Explicit transport**: headers leave the crate only through a
//!   [`HeaderSink`] passed by the caller
//!
//! # Core Types
//!
//! - [`SourceList`]: Ordered, duplicate-free source expressions
//! - [`Policy`]: Directive-to-source mapping plus policy-wide options
//! - [`PolicyOptions`]: Auto-self seeding, report-only mode, vocabulary
//! - [`PolicyBuilder`]: Chained construction of a policy
//! - [`HeaderSink`]: Boundary trait for emitting the header
//!
//! # Examples
//!
//! ```
//! use csp_policy::{Policy, VecHeaderSink};
//!
//! let base = Policy::new([
//!     ("default-src", vec!["https://www.google.com"]),
//!     ("script-src", vec!["https://www.google.com"]),
//! ]);
//!
//! // Deriving never touches `base`
//! let page = base
//!     .add_unsafe_inline("script-src")
//!     .add_item_to_src("img-src", "data:");
//!
//! let response = VecHeaderSink::new();
//! page.submit(&response).expect("recording sink accepts");
//!
//! assert_eq!(
//!     response.last_value("Content-Security-Policy").as_deref(),
//!     Some(
//!         "default-src 'self' https://www.google.com; \
//!          script-src 'self' https://www.google.com 'unsafe-inline'; \
//!          img-src 'self' data:"
//!     )
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod directive;
mod error;
mod header;
mod options;
mod policy;
mod sink;
pub mod source;
mod source_list;

pub use builder::PolicyBuilder;
pub use directive::{Directive, Vocabulary};
pub use error::UnknownDirective;
pub use header::HeaderName;
pub use options::PolicyOptions;
pub use policy::Policy;
pub use sink::{HeaderSink, RecordedHeader, SinkError, SinkErrorKind, VecHeaderSink};
pub use source::SourceInput;
pub use source_list::SourceList;

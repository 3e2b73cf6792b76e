//! Key-structure comparison for nested localization documents.
//!
//! `keydiff-core` loads two documents (typically a reference locale and a
//! translation), walks them side by side and reports the keys the
//! translation lacks and the keys only the translation has. Leaf values are
//! never compared.
//!
//! ```
//! use keydiff_core::{Node, RenderConfig, Report};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let en = Node::from_json_str("{\"nav\":{\"home\":\"Home\",\"blog\":\"Blog\"}}")?;
//!     let ar = Node::from_json_str("{\"nav\":{\"home\":\"الرئيسية\",\"faq\":\"الأسئلة\"}}")?;
//!     let diff = en.diff(&ar);
//!     assert_eq!(diff.missing_strings(), ["nav.blog"]);
//!     assert_eq!(diff.extra_strings(), ["nav.faq"]);
//!
//!     let rendered = Report::compare(&en, &ar).render(&RenderConfig::default());
//!     assert!(rendered.contains("M nav.blog"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod diff;
mod error;
mod node;
pub mod report;

pub use diff::{KeyDiff, Path, PathSegment};
pub use error::LoadError;
pub use node::Node;
pub use report::{RenderConfig, Report, DEFAULT_LIMIT};

/// Returns the semantic version of the `keydiff-core` crate.
///
/// ```
/// assert!(!keydiff_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

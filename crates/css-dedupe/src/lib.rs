//! Redundant rule and declaration removal for parsed stylesheets.
//!
//! This crate rewrites a style tree so that nothing in it is made pointless
//! by a later (or, in reverse mode, an earlier) identical occurrence:
//!
//! - **Declarations**: duplicate `property: value` pairs across rules that
//!   share a selector
//! - **Rules**: rules left empty, and rules identical to a sibling
//! - **At-rules**: `@media`, `@supports`, `@charset` and friends identical to
//!   a sibling once their own contents are deduplicated
//!
//! All comparisons are literal. Selectors, values and at-rule params are
//! never normalized, and nodes in different blocks are never compared.
//!
//! # Example
//!
//! ```
//! use css_dedupe::prelude::*;
//!
//! let mut sheet = Stylesheet::from_css("h1{color:#000}h2{color:#fff}h1{color:#000}")?;
//! sheet.dedupe(&DedupeOptions::default());
//!
//! assert_eq!(sheet.to_string(), "h2{color:#fff}h1{color:#000}");
//! # Ok::<(), css_dedupe::Error>(())
//! ```

pub mod dedupe;
pub mod parser;
pub mod tree;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::dedupe::{
        DedupeOptions, DedupeReport, RemovalDirection, deduplicate, deduplicate_with_report,
    };
    pub use crate::parser::parse_stylesheet;
    pub use crate::tree::{Comment, Declaration, Group, Node, Rule, Stylesheet};
}

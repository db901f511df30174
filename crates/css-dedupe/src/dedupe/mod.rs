//! Redundancy elimination over a style tree.
//!
//! Three passes run bottom-up, container by container:
//!
//! 1. Declaration collapse prunes duplicate declarations across sibling
//!    rules sharing a selector.
//! 2. Node collapse removes emptied rules and sibling nodes that are exact
//!    copies of another sibling.
//! 3. Every group's block is processed before its parent, so a group only
//!    takes part in comparisons once its own contents are final.

mod declarations;
mod engine;
mod nodes;
mod options;

pub use engine::{DedupeReport, deduplicate, deduplicate_in_place, deduplicate_with_report};
pub use options::{DedupeOptions, RemovalDirection};

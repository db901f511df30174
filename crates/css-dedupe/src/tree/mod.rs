//! Style tree data model.

mod node;
mod print;
mod stylesheet;

pub use node::{Comment, Declaration, Group, Node, Rule};
pub use stylesheet::Stylesheet;

//! Compact text output for style trees.
//!
//! Surviving nodes are written back without any whitespace between tokens:
//! `h1{color:red;margin:0!important}`, `@media print{...}`, `@charset "utf-8";`.

use std::fmt;

use crate::tree::{Comment, Declaration, Group, Node, Rule, Stylesheet};

/// Write a sequence of sibling nodes.
///
/// A declaration is terminated with `;` unless only comments follow it in
/// the same block.
fn write_nodes(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        write!(f, "{}", node)?;
        if let Node::Declaration(_) = node {
            let more = nodes[i + 1..].iter().any(|next| !next.is_comment());
            if more {
                f.write_str(";")?;
            }
        }
    }
    Ok(())
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.value)?;
        if self.important {
            f.write_str("!important")?;
        }
        for comment in &self.comments {
            write!(f, "/*{}*/", comment)?;
        }
        Ok(())
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/*{}*/", self.text)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.selector)?;
        write_nodes(f, &self.children)?;
        f.write_str("}")
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.params.is_empty() {
            write!(f, " {}", self.params)?;
        }

        match &self.block {
            Some(children) => {
                f.write_str("{")?;
                write_nodes(f, children)?;
                f.write_str("}")
            }
            None => f.write_str(";"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Rule(rule) => fmt::Display::fmt(rule, f),
            Node::Group(group) => fmt::Display::fmt(group, f),
            Node::Declaration(decl) => fmt::Display::fmt(decl, f),
            Node::Comment(comment) => fmt::Display::fmt(comment, f),
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nodes(f, &self.nodes)
    }
}

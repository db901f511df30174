//! Style tree node definitions.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A single `property: value` assignment.
///
/// Equality is byte-exact over the property name, the value text and the
/// importance flag. No case folding or value normalization happens here.
/// Comments written inside the declaration are kept in [`comments`] and
/// are not part of its identity.
///
/// [`comments`]: Declaration::comments
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Property name exactly as written (e.g. `color`, `_color`, `-webkit-transform`).
    pub property: String,
    /// Value text exactly as written, without the `!important` suffix and
    /// without comments.
    pub value: String,
    /// Whether the declaration carries `!important`.
    pub important: bool,
    /// Text of comments found between the property and the end of the value.
    pub comments: Vec<String>,
}

impl Declaration {
    /// Create a normal (non-important) declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
            comments: vec![],
        }
    }

    /// Mark the declaration as `!important`.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    /// Attach a comment written inside the declaration.
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(text.into());
        self
    }

    fn key(&self) -> (&str, &str, bool) {
        (&self.property, &self.value, self.important)
    }
}

impl PartialEq for Declaration {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Declaration {}

impl Hash for Declaration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Declaration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Declaration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A comment. Comments are positional content only and never take part in
/// matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text without the `/*` and `*/` delimiters.
    pub text: String,
}

impl Comment {
    /// Create a comment from its inner text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A selector paired with a declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Selector text exactly as written.
    pub selector: String,
    /// Declarations and comments, in source order.
    pub children: Vec<Node>,
}

impl Rule {
    /// Create a rule from a selector and its block contents.
    pub fn new(selector: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            selector: selector.into(),
            children,
        }
    }

    /// Create a rule holding only the given declarations.
    pub fn with_declarations(
        selector: impl Into<String>,
        declarations: impl IntoIterator<Item = Declaration>,
    ) -> Self {
        Self::new(
            selector,
            declarations.into_iter().map(Node::Declaration).collect(),
        )
    }

    /// Iterate over the declarations, skipping comments.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.children.iter().filter_map(Node::as_declaration)
    }

    /// Iterate over the declarations together with their child index.
    pub(crate) fn indexed_declarations(&self) -> impl Iterator<Item = (usize, &Declaration)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, node)| node.as_declaration().map(|decl| (index, decl)))
    }

    /// Check if the rule holds at least one declaration.
    ///
    /// A rule containing only comments counts as empty.
    pub fn has_declarations(&self) -> bool {
        self.declarations().next().is_some()
    }

    /// Check whether two rules are interchangeable: same selector text and
    /// the same multiset of declarations, in any order.
    pub fn matches(&self, other: &Rule) -> bool {
        if self.selector != other.selector {
            return false;
        }

        let mut ours: Vec<&Declaration> = self.declarations().collect();
        let mut theirs: Vec<&Declaration> = other.declarations().collect();
        if ours.len() != theirs.len() {
            return false;
        }

        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

/// A named, parameterized at-rule such as `@media print { ... }` or
/// `@charset "utf-8";`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// At-rule name without the `@` (e.g. `media`, `-webkit-keyframes`).
    pub name: String,
    /// Prelude text exactly as written, trimmed (e.g. `print`, `"utf-8"`).
    pub params: String,
    /// Block contents, or `None` for a statement at-rule ending in `;`.
    pub block: Option<Vec<Node>>,
}

impl Group {
    /// Create an at-rule with a block.
    pub fn with_block(
        name: impl Into<String>,
        params: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            block: Some(children),
        }
    }

    /// Create a statement at-rule (no block).
    pub fn statement(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            block: None,
        }
    }

    /// Get the block contents, if any.
    pub fn children(&self) -> Option<&[Node]> {
        self.block.as_deref()
    }

    /// Check whether two groups are interchangeable.
    ///
    /// Name and params must be byte-identical and the non-comment children
    /// must match pairwise, in order.
    pub fn matches(&self, other: &Group) -> bool {
        if self.name != other.name || self.params != other.params {
            return false;
        }

        match (&self.block, &other.block) {
            (None, None) => true,
            (Some(ours), Some(theirs)) => {
                let mut ours = ours.iter().filter(|node| !node.is_comment());
                let mut theirs = theirs.iter().filter(|node| !node.is_comment());
                loop {
                    match (ours.next(), theirs.next()) {
                        (None, None) => return true,
                        (Some(a), Some(b)) if a.matches(b) => {}
                        _ => return false,
                    }
                }
            }
            _ => false,
        }
    }
}

/// A node in the style tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A selector with a declaration block.
    Rule(Rule),
    /// An at-rule, with or without a block.
    Group(Group),
    /// A declaration directly inside a rule, group or the stylesheet root.
    Declaration(Declaration),
    /// A comment between other nodes.
    Comment(Comment),
}

impl Node {
    /// Check whether two nodes are redundant copies of each other.
    ///
    /// Only nodes of the same kind can match. Comments never match anything.
    pub fn matches(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Rule(a), Node::Rule(b)) => a.matches(b),
            (Node::Group(a), Node::Group(b)) => a.matches(b),
            (Node::Declaration(a), Node::Declaration(b)) => a == b,
            _ => false,
        }
    }

    /// Check if this node is a comment.
    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    /// Get the rule, if this node is one.
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    /// Get the group, if this node is one.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Get the declaration, if this node is one.
    pub fn as_declaration(&self) -> Option<&Declaration> {
        match self {
            Node::Declaration(decl) => Some(decl),
            _ => None,
        }
    }
}

impl From<Rule> for Node {
    fn from(rule: Rule) -> Self {
        Node::Rule(rule)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<Declaration> for Node {
    fn from(decl: Declaration) -> Self {
        Node::Declaration(decl)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Node::Comment(comment)
    }
}

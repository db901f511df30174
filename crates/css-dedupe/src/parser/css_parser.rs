//! CSS syntax parser using the `cssparser` crate.
//!
//! The parser relies on `cssparser` for tokenization and block structure
//! only. Selectors, at-rule params and declaration values are copied from
//! the source as literal slices so that later comparisons see exactly what
//! was written. Comments inside a declaration are cut out of its text and
//! kept on the [`Declaration`].

use cssparser::{
    Delimiter, ParseError as CssParseError, ParseErrorKind, Parser, ParserInput, SourceLocation,
    Token,
};

use crate::Result;
use crate::parser::ParseError;
use crate::tree::{Comment, Declaration, Group, Node, Rule, Stylesheet};

type BlockResult<'i, T> = std::result::Result<T, CssParseError<'i, ParseError>>;

/// What a block may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    /// The stylesheet root or an at-rule block: rules, declarations,
    /// nested at-rules and comments.
    Container,
    /// A rule's declaration block: declarations and comments.
    RuleBody,
}

/// Parse a CSS stylesheet string into a style tree.
///
/// Comments become [`Comment`] nodes in place. At-rules with a block become
/// a [`Group`] with children, at-rules ending in `;` a [`Group`] without a
/// block. Nested rules and at-rules inside a declaration block are skipped
/// with a warning.
///
/// # Errors
///
/// Returns [`Error::Parse`](crate::Error::Parse) when a declaration has no
/// `:` separating property and value.
///
/// # Example
///
/// ```
/// let sheet = css_dedupe::parser::parse_stylesheet("h1 { color: red }")?;
/// assert_eq!(sheet.to_string(), "h1{color:red}");
/// # Ok::<(), css_dedupe::Error>(())
/// ```
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let nodes =
        parse_block_contents(&mut parser, BlockKind::Container).map_err(into_parse_error)?;
    tracing::trace!("Parsed {} top-level nodes", nodes.len());

    Ok(Stylesheet::from_nodes(nodes))
}

fn into_parse_error(err: CssParseError<'_, ParseError>) -> ParseError {
    match err.kind {
        ParseErrorKind::Custom(inner) => inner,
        ParseErrorKind::Basic(kind) => ParseError::at(format!("{:?}", kind), err.location),
    }
}

/// Parse the contents of a block (or the whole stylesheet) until exhausted.
fn parse_block_contents<'i>(
    parser: &mut Parser<'i, '_>,
    kind: BlockKind,
) -> BlockResult<'i, Vec<Node>> {
    let mut nodes: Vec<Node> = vec![];

    loop {
        let start = parser.state();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) | Token::Semicolon => {}

            Token::Comment(text) => nodes.push(Comment::new(text).into()),

            Token::CloseCurlyBracket => {
                tracing::warn!("Ignoring unmatched '}}'");
            }

            Token::AtKeyword(name) => {
                let group = parse_group(parser, name.to_string())?;
                if kind == BlockKind::RuleBody {
                    tracing::warn!("Skipping @{} inside a declaration block", group.name);
                } else {
                    nodes.push(group.into());
                }
            }

            _ => {
                parser.reset(&start);
                if let Some(node) = parse_rule_or_declaration(parser, kind)? {
                    nodes.push(node);
                }
            }
        }
    }

    Ok(nodes)
}

/// Parse an at-rule after its `@name` token.
fn parse_group<'i>(parser: &mut Parser<'i, '_>, name: String) -> BlockResult<'i, Group> {
    let params = consume_prelude(parser).text;

    if !matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        return Ok(Group::statement(name, params));
    }

    let children =
        parser.parse_nested_block(|block| parse_block_contents(block, BlockKind::Container))?;
    Ok(Group::with_block(name, params, children))
}

/// Parse either `selector { ... }` or `property: value`.
///
/// Which one it is only becomes clear at the token that ends the prelude:
/// a curly bracket block makes it a rule, `;` or end of input a declaration.
fn parse_rule_or_declaration<'i>(
    parser: &mut Parser<'i, '_>,
    kind: BlockKind,
) -> BlockResult<'i, Option<Node>> {
    let location = parser.current_source_location();
    let prelude = consume_prelude(parser);

    if !matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        return parse_declaration(prelude, location)
            .map(|decl| decl.map(Node::Declaration))
            .map_err(|e| parser.new_custom_error(e));
    }

    if kind == BlockKind::RuleBody {
        tracing::warn!(
            "Skipping nested rule '{}' inside a declaration block",
            prelude.text
        );
        parser.parse_nested_block(|block| {
            while block.next_including_whitespace_and_comments().is_ok() {}
            Ok::<(), CssParseError<'i, ParseError>>(())
        })?;
        return Ok(None);
    }

    let children =
        parser.parse_nested_block(|block| parse_block_contents(block, BlockKind::RuleBody))?;
    Ok(Some(Rule::new(prelude.text, children).into()))
}

/// Source text up to the next `;` or `{`.
#[derive(Debug)]
struct Prelude {
    /// Literal slice, trimmed.
    text: String,
    /// The same slice with top-level comments cut out, trimmed.
    stripped: String,
    /// Text of the cut-out comments, in source order.
    comments: Vec<String>,
}

/// Consume everything up to the next `;` or `{`.
///
/// Comments nested inside a function or bracket block stay in `stripped`.
fn consume_prelude<'i>(parser: &mut Parser<'i, '_>) -> Prelude {
    let start = parser.position();
    let mut stripped = String::new();
    let mut comments = vec![];

    let consumed: BlockResult<'i, ()> = parser.parse_until_before(
        Delimiter::Semicolon | Delimiter::CurlyBracketBlock,
        |prelude| {
            let mut segment = prelude.position();
            loop {
                let before = prelude.position();
                let comment = match prelude.next_including_whitespace_and_comments() {
                    Ok(Token::Comment(text)) => text.to_string(),
                    Ok(_) => continue,
                    Err(_) => break,
                };
                stripped.push_str(prelude.slice(segment..before));
                comments.push(comment);
                segment = prelude.position();
            }
            stripped.push_str(prelude.slice_from(segment));
            Ok(())
        },
    );
    if let Err(e) = consumed {
        tracing::debug!("Prelude ended early: {:?}", e.kind);
    }

    Prelude {
        text: parser.slice_from(start).trim().to_owned(),
        stripped: stripped.trim().to_owned(),
        comments,
    }
}

/// Split declaration text at the first `:`.
fn parse_declaration(
    prelude: Prelude,
    location: SourceLocation,
) -> std::result::Result<Option<Declaration>, ParseError> {
    let text = prelude.stripped.as_str();
    let Some((property, value)) = text.split_once(':') else {
        return Err(ParseError::at(
            format!("Expected ':' in declaration '{}'", text),
            location,
        ));
    };

    let property = property.trim();
    if property.is_empty() {
        tracing::warn!("Skipping declaration without a property name: '{}'", text);
        return Ok(None);
    }

    let (value, important) = split_important(value.trim());
    let mut decl = Declaration::new(property, value);
    decl.important = important;
    decl.comments = prelude.comments;
    Ok(Some(decl))
}

/// Strip a trailing `!important` (any ASCII case, whitespace allowed around `!`).
fn split_important(value: &str) -> (&str, bool) {
    if let Some(bang) = value.rfind('!') {
        if value[bang + 1..].trim().eq_ignore_ascii_case("important") {
            return (value[..bang].trim_end(), true);
        }
    }
    (value, false)
}

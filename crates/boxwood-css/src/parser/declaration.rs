//! Declaration lists per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! Splits `name: value [!important]; ...` into [`Declaration`]s. Values are
//! left as raw tokens; interpreting them is the job of the property parsers.

use boxwood_common::warning::warn_once;

use crate::tokenizer::{CSSToken, tokenize};

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A CSS declaration (e.g., `margin-left: -5px`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name as written.
    pub name: String,
    /// The value tokens, without surrounding whitespace or `!important`.
    pub value: Vec<CSSToken>,
    /// Whether the declaration has `!important`.
    pub important: bool,
}

/// Parser for a list of declarations such as a style attribute or the
/// contents of a rule block.
pub struct DeclarationParser {
    tokens: Vec<CSSToken>,
    position: usize,
}

impl DeclarationParser {
    /// Create a new parser from a list of tokens.
    #[must_use]
    pub const fn new(tokens: Vec<CSSToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    ///
    /// Malformed entries are skipped up to the next top-level semicolon.
    pub fn parse_declaration_list(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                // "<whitespace-token>" / "<semicolon-token>": "Do nothing."
                Some(CSSToken::Whitespace | CSSToken::Semicolon) => {
                    let _ = self.consume();
                }

                // "<EOF-token>": "Return the list of declarations."
                None | Some(CSSToken::EOF) => return declarations,

                // "<ident-token>"
                // "Initialize a temporary list initially filled with the current
                // input token. As long as the next input token is anything other
                // than a <semicolon-token> or <EOF-token>, consume a component
                // value and append it to the temporary list."
                Some(CSSToken::Ident(_)) => {
                    let entry = self.consume_until_semicolon();
                    if let Some(declaration) = consume_declaration(&entry) {
                        declarations.push(declaration);
                    }
                }

                // "anything else": "This is a parse error. ... As long as the
                // next input token is anything other than a <semicolon-token>
                // or <EOF-token>, consume a component value and throw away the
                // returned value."
                Some(token) => {
                    warn_once("CSS", &format!("skipping declaration starting with {token}"));
                    let _ = self.consume_until_semicolon();
                }
            }
        }
    }

    /// Collect tokens up to (not including) the next semicolon outside of
    /// parentheses, brackets and braces.
    fn consume_until_semicolon(&mut self) -> Vec<CSSToken> {
        let mut entry = Vec::new();
        let mut depth = 0usize;

        while let Some(token) = self.peek() {
            match token {
                CSSToken::EOF => break,
                CSSToken::Semicolon if depth == 0 => break,
                CSSToken::Function(_)
                | CSSToken::LeftParen
                | CSSToken::LeftBracket
                | CSSToken::LeftBrace => depth += 1,
                CSSToken::RightParen | CSSToken::RightBracket | CSSToken::RightBrace => {
                    depth = depth.saturating_sub(1);
                }
                _ => {}
            }
            if let Some(token) = self.consume().cloned() {
                entry.push(token);
            }
        }

        entry
    }

    fn peek(&self) -> Option<&CSSToken> {
        self.tokens.get(self.position)
    }

    fn consume(&mut self) -> Option<&CSSToken> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }
}

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
fn consume_declaration(entry: &[CSSToken]) -> Option<Declaration> {
    let (CSSToken::Ident(name), rest) = entry.split_first()? else {
        return None;
    };

    // "While the next input token is a <whitespace-token>, consume the next
    // input token. If the next input token is anything other than a
    // <colon-token>, this is a parse error. Return nothing."
    let rest = trim_start(rest);
    let Some((CSSToken::Colon, value)) = rest.split_first() else {
        warn_once("CSS", &format!("expected ':' after '{name}'"));
        return None;
    };

    // "If the last two non-<whitespace-token>s in the declaration's value are
    // a <delim-token> with the value "!" followed by an <ident-token> with a
    // value that is an ASCII case-insensitive match for "important", remove
    // them from the declaration's value and set the declaration's important
    // flag to true."
    let (value, important) = split_important(trim(value));

    Some(Declaration {
        name: name.clone(),
        value: value.to_vec(),
        important,
    })
}

fn split_important(value: &[CSSToken]) -> (&[CSSToken], bool) {
    let Some(bang) = value.iter().rposition(|t| *t == CSSToken::Delim('!')) else {
        return (value, false);
    };
    let tail = trim_start(&value[bang + 1..]);
    if tail.len() == 1 && tail[0].is_ident("important") {
        (trim(&value[..bang]), true)
    } else {
        (value, false)
    }
}

fn trim_start(tokens: &[CSSToken]) -> &[CSSToken] {
    let start = tokens
        .iter()
        .position(|t| !t.is_whitespace())
        .unwrap_or(tokens.len());
    &tokens[start..]
}

fn trim(tokens: &[CSSToken]) -> &[CSSToken] {
    let tokens = trim_start(tokens);
    let end = tokens
        .iter()
        .rposition(|t| !t.is_whitespace())
        .map_or(0, |i| i + 1);
    &tokens[..end]
}

/// Parse the text of a declaration list, e.g. a `style` attribute.
#[must_use]
pub fn parse_style_attribute(text: &str) -> Vec<Declaration> {
    DeclarationParser::new(tokenize(text)).parse_declaration_list()
}

//! CSS tokenizer module.

/// CSS token types per [CSS Syntax Level 3 § 4](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod token;
/// CSS tokenizer implementation.
pub mod tokenizer;

pub use token::CSSToken;
pub use tokenizer::CSSTokenizer;

/// Tokenize `input`, dropping the trailing EOF token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<CSSToken> {
    let mut tokenizer = CSSTokenizer::new(input);
    tokenizer.run();
    let mut tokens = tokenizer.into_tokens();
    if tokens.last().is_some_and(CSSToken::is_eof) {
        let _ = tokens.pop();
    }
    tokens
}

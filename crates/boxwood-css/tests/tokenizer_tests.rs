//! Integration tests for the CSS tokenizer and the declaration parser.

use boxwood_css::parser::DeclarationParser;
use boxwood_css::tokenizer::{CSSToken, CSSTokenizer};
use boxwood_css::parse_style_attribute;

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<CSSToken> {
    let mut tokenizer = CSSTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}

#[test]
fn test_whitespace() {
    let tokens = tokenize("   \t\n  ");
    assert_eq!(tokens, vec![CSSToken::Whitespace, CSSToken::EOF]);
}

#[test]
fn test_ident_with_hyphen() {
    let tokens = tokenize("margin-left");
    assert_eq!(tokens, vec![CSSToken::ident("margin-left"), CSSToken::EOF]);
}

#[test]
fn test_vendor_ident() {
    let tokens = tokenize("-webkit-box");
    assert_eq!(tokens[0], CSSToken::ident("-webkit-box"));
}

#[test]
fn test_function() {
    let tokens = tokenize("calc(");
    assert_eq!(tokens[0], CSSToken::Function("calc".to_string()));
}

#[test]
fn test_dimension() {
    let tokens = tokenize("12px");
    assert_eq!(tokens, vec![CSSToken::dimension(12.0, "px"), CSSToken::EOF]);
}

#[test]
fn test_negative_dimension() {
    let tokens = tokenize("-5px");
    assert_eq!(tokens[0], CSSToken::dimension(-5.0, "px"));
}

#[test]
fn test_signed_and_fractional_numbers() {
    assert_eq!(tokenize("+5px")[0], CSSToken::dimension(5.0, "px"));
    assert_eq!(tokenize(".5em")[0], CSSToken::dimension(0.5, "em"));
    assert_eq!(tokenize("-.25%")[0], CSSToken::percentage(-0.25));
}

#[test]
fn test_percentage() {
    let tokens = tokenize("10%");
    assert_eq!(tokens[0], CSSToken::percentage(10.0));
}

#[test]
fn test_number() {
    assert_eq!(tokenize("0")[0], CSSToken::Number(0.0));
    assert_eq!(tokenize("1.5")[0], CSSToken::Number(1.5));
}

#[test]
fn test_minus_followed_by_space_is_delim() {
    let tokens = tokenize("- 10%");
    assert_eq!(
        tokens,
        vec![
            CSSToken::delim('-'),
            CSSToken::Whitespace,
            CSSToken::percentage(10.0),
            CSSToken::EOF,
        ]
    );
}

#[test]
fn test_punctuation() {
    let tokens = tokenize("a:b;");
    assert_eq!(
        tokens,
        vec![
            CSSToken::ident("a"),
            CSSToken::Colon,
            CSSToken::ident("b"),
            CSSToken::Semicolon,
            CSSToken::EOF,
        ]
    );
}

#[test]
fn test_string() {
    let tokens = tokenize("\"hello world\"");
    assert_eq!(tokens[0], CSSToken::String("hello world".to_string()));
}

#[test]
fn test_hash() {
    assert_eq!(tokenize("#fff")[0], CSSToken::Hash("fff".to_string()));
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("/* a */5px/* b */");
    assert_eq!(tokens, vec![CSSToken::dimension(5.0, "px"), CSSToken::EOF]);
}

#[test]
fn test_free_function_drops_eof() {
    assert_eq!(
        boxwood_css::tokenize("auto"),
        vec![CSSToken::ident("auto")]
    );
}

#[test]
fn test_token_display() {
    assert_eq!(CSSToken::dimension(5.0, "px").to_string(), "<dimension:5px>");
}

// ---------------------------------------------------------------------------
// Declaration lists
// ---------------------------------------------------------------------------

#[test]
fn test_declaration_list() {
    let decls = parse_style_attribute("margin-left: -5px; height : 50% ;");
    assert_eq!(decls.len(), 2);
    assert_eq!(decls[0].name, "margin-left");
    assert_eq!(decls[0].value, vec![CSSToken::dimension(-5.0, "px")]);
    assert!(!decls[0].important);
    assert_eq!(decls[1].name, "height");
    assert_eq!(decls[1].value, vec![CSSToken::percentage(50.0)]);
}

#[test]
fn test_declaration_important() {
    let decls = parse_style_attribute("width: 10px !IMPORTANT");
    assert_eq!(decls.len(), 1);
    assert!(decls[0].important);
    assert_eq!(decls[0].value, vec![CSSToken::dimension(10.0, "px")]);
}

#[test]
fn test_declaration_missing_colon_is_skipped() {
    boxwood_common::warning::set_quiet(true);
    let decls = parse_style_attribute("width 10px; height: 1px");
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].name, "height");
}

#[test]
fn test_declaration_not_starting_with_ident_is_skipped() {
    boxwood_common::warning::set_quiet(true);
    let decls = parse_style_attribute("5px: 1px; width: auto");
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].name, "width");
}

#[test]
fn test_declaration_value_keeps_inner_whitespace() {
    let decls = parse_style_attribute("margin:  1px  2px  ");
    assert_eq!(
        decls[0].value,
        vec![
            CSSToken::dimension(1.0, "px"),
            CSSToken::Whitespace,
            CSSToken::dimension(2.0, "px"),
        ]
    );
}

#[test]
fn test_declaration_parser_from_tokens() {
    let mut parser = DeclarationParser::new(tokenize("padding: 0"));
    let decls = parser.parse_declaration_list();
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].value, vec![CSSToken::Number(0.0)]);
}

#[test]
fn test_empty_value() {
    let decls = parse_style_attribute("width:;");
    assert_eq!(decls.len(), 1);
    assert!(decls[0].value.is_empty());
}

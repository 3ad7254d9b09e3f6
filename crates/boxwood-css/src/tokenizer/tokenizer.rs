use super::token::CSSToken;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// CSS tokenizer covering the token kinds that appear in declaration lists.
/// Escapes and `url()` are not special-cased: a backslash is a delim and
/// `url(` is an ordinary function token.
pub struct CSSTokenizer {
    /// The input being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<CSSToken>,
}

impl CSSTokenizer {
    /// Create a new CSS tokenizer with the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input. The last collected token is always EOF.
    pub fn run(&mut self) {
        loop {
            let token = self.consume_token();
            let is_eof = token.is_eof();
            self.tokens.push(token);
            if is_eof {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<CSSToken> {
        self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> CSSToken {
        self.consume_comments();

        let Some(c) = self.consume() else {
            return CSSToken::EOF;
        };

        match c {
            c if is_whitespace(c) => {
                self.consume_whitespace();
                CSSToken::Whitespace
            }

            '"' | '\'' => self.consume_string_token(c),

            '#' => {
                if self.peek().is_some_and(is_ident_code_point) {
                    CSSToken::Hash(self.consume_ident_sequence())
                } else {
                    CSSToken::Delim('#')
                }
            }

            '(' => CSSToken::LeftParen,
            ')' => CSSToken::RightParen,
            ',' => CSSToken::Comma,
            ':' => CSSToken::Colon,
            ';' => CSSToken::Semicolon,
            '[' => CSSToken::LeftBracket,
            ']' => CSSToken::RightBracket,
            '{' => CSSToken::LeftBrace,
            '}' => CSSToken::RightBrace,

            // "U+002B PLUS SIGN (+)" / "U+002E FULL STOP (.)"
            // "If the input stream starts with a number, reconsume the current
            // input code point, consume a numeric token, and return it."
            '+' | '.' => {
                if self.starts_number(c) {
                    self.reconsume();
                    self.consume_numeric_token()
                } else {
                    CSSToken::Delim(c)
                }
            }

            // "U+002D HYPHEN-MINUS (-)"
            '-' => {
                if self.starts_number(c) {
                    self.reconsume();
                    self.consume_numeric_token()
                } else if would_start_ident(Some('-'), self.peek(), self.peek_at(1)) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    CSSToken::Delim('-')
                }
            }

            // "U+0040 COMMERCIAL AT (@)"
            '@' => {
                if would_start_ident(self.peek(), self.peek_at(1), self.peek_at(2)) {
                    CSSToken::AtKeyword(self.consume_ident_sequence())
                } else {
                    CSSToken::Delim('@')
                }
            }

            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }

            c if is_ident_start_code_point(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }

            // "anything else"
            c => CSSToken::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            let _ = self.consume();
            let _ = self.consume();

            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        let _ = self.consume();
                        break;
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            let _ = self.consume();
        }
    }

    /// [§ 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// An unescaped newline ends the string early; the newline is left in
    /// the stream.
    fn consume_string_token(&mut self, ending_code_point: char) -> CSSToken {
        let mut value = String::new();

        loop {
            match self.consume() {
                Some(c) if c == ending_code_point => break,
                None => break,
                Some('\n') => {
                    self.reconsume();
                    break;
                }
                Some('\\') => {
                    if let Some(escaped) = self.consume()
                        && escaped != '\n'
                    {
                        value.push(escaped);
                    }
                }
                Some(c) => value.push(c),
            }
        }

        CSSToken::String(value)
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> CSSToken {
        let value = self.consume_number();

        // "If the next 3 input code points would start an ident sequence..."
        if would_start_ident(self.peek(), self.peek_at(1), self.peek_at(2)) {
            let unit = self.consume_ident_sequence();
            CSSToken::Dimension { value, unit }
        }
        // "Otherwise, if the next input code point is U+0025 PERCENTAGE SIGN (%)..."
        else if self.peek() == Some('%') {
            let _ = self.consume();
            CSSToken::Percentage(value)
        } else {
            CSSToken::Number(value)
        }
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> CSSToken {
        let name = self.consume_ident_sequence();
        if self.peek() == Some('(') {
            let _ = self.consume();
            CSSToken::Function(name)
        } else {
            CSSToken::Ident(name)
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();
        while let Some(c) = self.peek() {
            if !is_ident_code_point(c) {
                break;
            }
            result.push(c);
            let _ = self.consume();
        }
        result
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    ///
    /// The matched text is converted with `str::parse`, so the result never
    /// depends on the locale.
    fn consume_number(&mut self) -> f32 {
        let mut repr = String::new();

        if let Some(sign @ ('+' | '-')) = self.peek() {
            repr.push(sign);
            let _ = self.consume();
        }
        self.consume_digits(&mut repr);

        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            repr.push('.');
            let _ = self.consume();
            self.consume_digits(&mut repr);
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let signed = matches!(self.peek_at(1), Some('+' | '-'))
                && self.peek_at(2).is_some_and(|c| c.is_ascii_digit());
            let unsigned = self.peek_at(1).is_some_and(|c| c.is_ascii_digit());
            if signed || unsigned {
                repr.push('e');
                let _ = self.consume();
                if signed && let Some(sign) = self.consume() {
                    repr.push(sign);
                }
                self.consume_digits(&mut repr);
            }
        }

        repr.parse().unwrap_or(0.0)
    }

    fn consume_digits(&mut self, repr: &mut String) {
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            repr.push(c);
            let _ = self.consume();
        }
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    ///
    /// `first` is the code point just consumed.
    fn starts_number(&self, first: char) -> bool {
        let second = self.peek();
        let third = self.peek_at(1);
        match first {
            '+' | '-' => {
                second.is_some_and(|c| c.is_ascii_digit())
                    || (second == Some('.') && third.is_some_and(|c| c.is_ascii_digit()))
            }
            '.' => second.is_some_and(|c| c.is_ascii_digit()),
            c => c.is_ascii_digit(),
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
fn would_start_ident(first: Option<char>, second: Option<char>, _third: Option<char>) -> bool {
    match first {
        Some('-') => second.is_some_and(|c| c == '-' || is_ident_start_code_point(c)),
        Some(c) => is_ident_start_code_point(c),
        None => false,
    }
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}

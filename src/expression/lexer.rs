//! Tokenizer for shape and deform expressions.

use super::ExpressionError;

/// Token kinds
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    EqEq,
    BangEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Bang,
    Question,
    Colon,

    // Delimiters
    LParen,
    RParen,
    Comma,
    Semicolon,

    Eof,
}

/// A token with its byte offset in the source
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

/// Lexer over one expression source string
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    /// Tokenize the entire source, ending with `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ExpressionError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, ExpressionError> {
        while self.peek().is_some_and(char::is_whitespace) {
            self.chars.next();
        }

        let Some((pos, c)) = self.chars.next() else {
            return Ok(Token { kind: TokenKind::Eof, pos: self.source.len() });
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            '+' => self.with_eq(TokenKind::PlusEq, TokenKind::Plus),
            '-' => self.with_eq(TokenKind::MinusEq, TokenKind::Minus),
            '/' => self.with_eq(TokenKind::SlashEq, TokenKind::Slash),
            '=' => self.with_eq(TokenKind::EqEq, TokenKind::Eq),
            '!' => self.with_eq(TokenKind::BangEq, TokenKind::Bang),
            '<' => self.with_eq(TokenKind::LtEq, TokenKind::Lt),
            '>' => self.with_eq(TokenKind::GtEq, TokenKind::Gt),
            '*' => {
                if self.match_char('*') {
                    TokenKind::Caret
                } else {
                    self.with_eq(TokenKind::StarEq, TokenKind::Star)
                }
            }
            '&' if self.match_char('&') => TokenKind::And,
            '|' if self.match_char('|') => TokenKind::Or,
            c if c.is_ascii_digit() || c == '.' => self.number(pos)?,
            c if c.is_alphabetic() || c == '_' => self.identifier(pos),
            _ => return Err(ExpressionError::UnexpectedChar { ch: c, pos }),
        };

        Ok(Token { kind, pos })
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn with_eq(&mut self, with: TokenKind, without: TokenKind) -> TokenKind {
        if self.match_char('=') { with } else { without }
    }

    fn number(&mut self, start: usize) -> Result<TokenKind, ExpressionError> {
        let mut end = start + 1;
        let mut seen_exp = false;
        while let Some(&(i, c)) = self.chars.peek() {
            let sign_after_exp = (c == '+' || c == '-')
                && seen_exp
                && matches!(self.source[..i].chars().last(), Some('e' | 'E'));
            if c.is_ascii_digit() || c == '.' || sign_after_exp {
                end = i + 1;
                self.chars.next();
            } else if (c == 'e' || c == 'E') && !seen_exp {
                seen_exp = true;
                end = i + 1;
                self.chars.next();
            } else {
                break;
            }
        }
        let text = &self.source[start..end];
        text.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| ExpressionError::InvalidNumber(text.to_string()))
    }

    fn identifier(&mut self, start: usize) -> TokenKind {
        let mut end = start;
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.chars.next();
                end = i;
            } else {
                break;
            }
        }
        let end = end + self.source[end..].chars().next().map_or(0, char::len_utf8);
        TokenKind::Ident(self.source[start..end].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("a += 2 ** b <= c"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::PlusEq,
                TokenKind::Number(2.0),
                TokenKind::Caret,
                TokenKind::Ident("b".into()),
                TokenKind::LtEq,
                TokenKind::Ident("c".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("1.5e2")[0], TokenKind::Number(150.0));
        assert_eq!(kinds("2e-1")[0], TokenKind::Number(0.2));
        assert_eq!(kinds(".25")[0], TokenKind::Number(0.25));
        assert!(matches!(
            Lexer::new("1.2.3").tokenize(),
            Err(ExpressionError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_identifier_with_digits() {
        assert_eq!(kinds("log10(x1)")[0], TokenKind::Ident("log10".into()));
        assert_eq!(kinds("log10(x1)")[2], TokenKind::Ident("x1".into()));
    }

    #[test]
    fn test_bad_char() {
        assert!(matches!(
            Lexer::new("x # y").tokenize(),
            Err(ExpressionError::UnexpectedChar { ch: '#', pos: 2 })
        ));
        assert!(Lexer::new("a & b").tokenize().is_err());
    }
}

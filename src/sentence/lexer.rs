/*!
Hand-rolled lexer for sentence and sequent text.

A small token type, a position-tracking scanner, and no external parsing
crate --- the grammar is small and fixed, so a combinator library would be
more machinery than the job needs.
*/

use crate::errors::ParseError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Ident(String),
    Tilde,
    Amp,
    Pipe,
    Arrow,       // ->
    TurnstileEq, // =>
    TurnstileT,  // |~
    LParen,
    RParen,
    Comma,
    Dot,
    Eof,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Tokenizes `input`, skipping whitespace between tokens.
pub fn lex(input: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = input.as_bytes();
    let mut i = 0usize;
    let mut tokens = Vec::new();

    while i < bytes.len() {
        let c = bytes[i] as char;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let start = i;

        match c {
            '~' => {
                tokens.push(Token { kind: TokenKind::Tilde, position: start });
                i += 1;
            }
            '&' => {
                tokens.push(Token { kind: TokenKind::Amp, position: start });
                i += 1;
            }
            '(' => {
                tokens.push(Token { kind: TokenKind::LParen, position: start });
                i += 1;
            }
            ')' => {
                tokens.push(Token { kind: TokenKind::RParen, position: start });
                i += 1;
            }
            ',' => {
                tokens.push(Token { kind: TokenKind::Comma, position: start });
                i += 1;
            }
            '.' => {
                tokens.push(Token { kind: TokenKind::Dot, position: start });
                i += 1;
            }
            '|' => {
                if bytes.get(i + 1) == Some(&b'~') {
                    tokens.push(Token { kind: TokenKind::TurnstileT, position: start });
                    i += 2;
                } else {
                    tokens.push(Token { kind: TokenKind::Pipe, position: start });
                    i += 1;
                }
            }
            '-' => {
                if bytes.get(i + 1) == Some(&b'>') {
                    tokens.push(Token { kind: TokenKind::Arrow, position: start });
                    i += 2;
                } else {
                    return Err(ParseError::new(
                        format!("unexpected character '{c}'"),
                        start,
                    ));
                }
            }
            '=' => {
                if bytes.get(i + 1) == Some(&b'>') {
                    tokens.push(Token { kind: TokenKind::TurnstileEq, position: start });
                    i += 2;
                } else {
                    return Err(ParseError::new(
                        format!("unexpected character '{c}'"),
                        start,
                    ));
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut j = i + 1;
                while j < bytes.len() {
                    let d = bytes[j] as char;
                    if d.is_ascii_alphanumeric() || d == '_' {
                        j += 1;
                    } else {
                        break;
                    }
                }
                let ident = input[i..j].to_string();
                tokens.push(Token { kind: TokenKind::Ident(ident), position: start });
                i = j;
            }
            other => {
                return Err(ParseError::new(
                    format!("unexpected character '{other}'"),
                    start,
                ));
            }
        }
    }

    tokens.push(Token { kind: TokenKind::Eof, position: bytes.len() });
    Ok(tokens)
}

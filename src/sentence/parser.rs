/*!
Recursive-descent parser over the token stream of [`crate::sentence::lexer`].

Precedence, tightest to loosest: `~` > `&` > `|` > `->`; `->` is
right-associative, `&` and `|` are left-associative. One token of lookahead,
as the grammar never requires more.
*/

use std::collections::BTreeSet;

use super::ast::Sentence;
use super::lexer::{lex, Token, TokenKind};
use crate::errors::ParseError;

/// Whether bare identifiers parse as propositional atoms, or concept/role
/// forms are required. A parameter, not a global --- the same parser logic
/// serves both the base propositional calculus and its restricted-quantifier
/// extension.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Propositional,
    Rq,
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    mode: Mode,
}

impl Parser {
    pub fn new(input: &str, mode: Mode) -> Result<Self, ParseError> {
        let tokens = lex(input)?;
        Ok(Self { tokens, pos: 0, mode })
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn position(&self) -> usize {
        self.peek().position
    }

    fn advance(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if &self.peek().kind == kind {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(
                format!("expected {kind:?}, found {:?}", self.peek().kind),
                self.position(),
            ))
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            other => Err(ParseError::new(
                format!("expected identifier, found {other:?}"),
                self.position(),
            )),
        }
    }

    /// Parses a single sentence and requires the whole input be consumed.
    pub fn parse_sentence_complete(input: &str, mode: Mode) -> Result<Sentence, ParseError> {
        let mut p = Parser::new(input, mode)?;
        let s = p.parse_sentence()?;
        p.expect(&TokenKind::Eof)?;
        Ok(s)
    }

    fn parse_sentence(&mut self) -> Result<Sentence, ParseError> {
        self.parse_impl()
    }

    /// `impl ::= disj ('->' disj)*`, right-associative.
    fn parse_impl(&mut self) -> Result<Sentence, ParseError> {
        let first = self.parse_disj()?;
        if self.peek().kind == TokenKind::Arrow {
            self.advance();
            let rest = self.parse_impl()?;
            Ok(Sentence::implies(first, rest))
        } else {
            Ok(first)
        }
    }

    /// `disj ::= conj ('|' conj)*`, left-associative.
    fn parse_disj(&mut self) -> Result<Sentence, ParseError> {
        let mut left = self.parse_conj()?;
        while self.peek().kind == TokenKind::Pipe {
            self.advance();
            let right = self.parse_conj()?;
            left = Sentence::or(left, right);
        }
        Ok(left)
    }

    /// `conj ::= unary ('&' unary)*`, left-associative.
    fn parse_conj(&mut self) -> Result<Sentence, ParseError> {
        let mut left = self.parse_unary()?;
        while self.peek().kind == TokenKind::Amp {
            self.advance();
            let right = self.parse_unary()?;
            left = Sentence::and(left, right);
        }
        Ok(left)
    }

    /// `unary ::= '~' unary | atom | '(' sentence ')'`
    fn parse_unary(&mut self) -> Result<Sentence, ParseError> {
        match &self.peek().kind {
            TokenKind::Tilde => {
                self.advance();
                let inner = self.parse_unary()?;
                Ok(Sentence::not(inner))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_sentence()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            _ => self.parse_atom(),
        }
    }

    /// ```text
    /// atom ::= IDENT
    ///       |  IDENT '(' IDENT ')'
    ///       |  IDENT '(' IDENT ',' IDENT ')'
    ///       |  'ALL'  IDENT '.' IDENT '(' IDENT ')'
    ///       |  'SOME' IDENT '.' IDENT '(' IDENT ')'
    /// ```
    fn parse_atom(&mut self) -> Result<Sentence, ParseError> {
        let start = self.position();
        let head = self.expect_ident()?;

        if head == "ALL" || head == "SOME" {
            let role = self.expect_ident()?;
            self.expect(&TokenKind::Dot)?;
            let concept = self.expect_ident()?;
            self.expect(&TokenKind::LParen)?;
            let individual = self.expect_ident()?;
            self.expect(&TokenKind::RParen)?;

            if self.mode != Mode::Rq {
                return Err(ParseError::new(
                    "restricted quantifiers require RQ mode".to_string(),
                    start,
                ));
            }

            return if head == "ALL" {
                Ok(Sentence::AllRestrict { role, concept, individual })
            } else {
                Ok(Sentence::SomeRestrict { role, concept, individual })
            };
        }

        if self.peek().kind == TokenKind::LParen {
            self.advance();
            let first = self.expect_ident()?;

            if self.peek().kind == TokenKind::Comma {
                self.advance();
                let second = self.expect_ident()?;
                self.expect(&TokenKind::RParen)?;

                if self.mode != Mode::Rq {
                    return Err(ParseError::new(
                        "role atoms require RQ mode".to_string(),
                        start,
                    ));
                }
                return Ok(Sentence::role(head, first, second));
            }

            self.expect(&TokenKind::RParen)?;

            if self.mode != Mode::Rq {
                return Err(ParseError::new(
                    "concept atoms require RQ mode".to_string(),
                    start,
                ));
            }
            return Ok(Sentence::concept(head, first));
        }

        if self.mode != Mode::Propositional {
            return Err(ParseError::new(
                "bare identifiers are not valid atoms in RQ mode".to_string(),
                start,
            ));
        }
        Ok(Sentence::atom(head))
    }

    /// Comma-separated sentence list; possibly empty, ending at `stop`.
    fn parse_sentence_list(&mut self, stop: &TokenKind) -> Result<BTreeSet<Sentence>, ParseError> {
        let mut set = BTreeSet::new();
        if &self.peek().kind == stop || self.peek().kind == TokenKind::Eof {
            return Ok(set);
        }
        loop {
            let s = self.parse_sentence()?;
            set.insert(s);
            if self.peek().kind == TokenKind::Comma {
                self.advance();
                continue;
            }
            break;
        }
        Ok(set)
    }

    /// `seq ::= sentences? '=>' sentences?`
    pub fn parse_sequent_complete(
        input: &str,
        mode: Mode,
    ) -> Result<(BTreeSet<Sentence>, BTreeSet<Sentence>), ParseError> {
        let mut p = Parser::new(input, mode)?;
        let ante = p.parse_sentence_list(&TokenKind::TurnstileEq)?;
        p.expect(&TokenKind::TurnstileEq)?;
        let succ = p.parse_sentence_list(&TokenKind::Eof)?;
        p.expect(&TokenKind::Eof)?;
        Ok((ante, succ))
    }

    /// `tell ::= sentences? '|~' sentences?`
    pub fn parse_tell_complete(
        input: &str,
        mode: Mode,
    ) -> Result<(BTreeSet<Sentence>, BTreeSet<Sentence>), ParseError> {
        let mut p = Parser::new(input, mode)?;
        let ante = p.parse_sentence_list(&TokenKind::TurnstileT)?;
        p.expect(&TokenKind::TurnstileT)?;
        let succ = p.parse_sentence_list(&TokenKind::Eof)?;
        p.expect(&TokenKind::Eof)?;
        Ok((ante, succ))
    }
}

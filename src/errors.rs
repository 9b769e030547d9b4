/*!
Error types used by the library.

Flat, `Display`-by-hand enums rather than a derive-macro error library: each
kind of failure gets its own small enum, and a thin union (`ReasonerError`)
wraps them at boundaries that can fail for more than one reason.
*/

use std::fmt;

/// Malformed sentence or sequent text, reported with the byte offset at
/// which the parser gave up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at position {}: {}", self.position, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Invariant violation at a material-base boundary.
///
/// Raised synchronously at the call that introduced it; the base is left
/// unchanged (insertion is atomic --- either the whole operation succeeds or
/// nothing is stored).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// A sentence was required to be atomic (a member of the language, a
    /// side of a base consequence, or a schema's consequent) but is not.
    NotAtomic(String),

    /// A schema referenced a role, individual, or concept name that is not
    /// a well-formed identifier.
    MalformedSchema(String),

    /// An atom was supplied in propositional mode with an RQ shape, or vice
    /// versa.
    ModeMismatch(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAtomic(s) => write!(f, "not an atomic sentence: {s}"),
            Self::MalformedSchema(s) => write!(f, "malformed schema: {s}"),
            Self::ModeMismatch(s) => write!(f, "mode mismatch: {s}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A union of the two recoverable failure kinds, used at boundaries (CLI
/// commands, JSON loading) that can fail for either reason.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReasonerError {
    Parse(ParseError),
    Validation(ValidationError),
}

impl fmt::Display for ReasonerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ReasonerError {}

impl From<ParseError> for ReasonerError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ValidationError> for ReasonerError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

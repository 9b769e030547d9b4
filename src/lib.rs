/*!
A backward proof-search reasoner for the Non-Monotonic Multi-Succedent
(NMMS) sequent calculus, with an optional restricted-quantifier (RQ)
extension.

# Layout

- [`sentence`] --- the object-language AST and its parser.
- [`base`] --- the material base and `is_axiom`.
- [`engine`] --- backward proof search, the eight propositional rules, and
  the four restricted-quantifier rules.
- [`config`] --- tunables for a [`engine::Reasoner`].
- [`commitment`] --- a commitment-store convenience layered over a base.
- [`persist`] --- the JSON base persistence format.
- [`errors`] --- `ParseError`, `ValidationError`, and the `ReasonerError` union.

The CLI (`src/cli`) is a thin adapter over this library; it is not part of
the public API.
*/

pub mod base;
pub mod commitment;
pub mod config;
pub mod engine;
pub mod errors;
pub mod persist;
pub mod sentence;

pub use base::MaterialBase;
pub use config::SearchConfig;
pub use engine::{ProofResult, Reasoner};
pub use errors::{ParseError, ReasonerError, ValidationError};
pub use sentence::{Mode, Parser, Sentence};

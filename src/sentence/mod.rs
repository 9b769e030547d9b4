/*!
The sentence AST and its recursive-descent parser.
*/

mod ast;
mod lexer;
mod parser;

pub use ast::Sentence;
pub use parser::{Mode, Parser};

/// A set of sentences, as used on either side of a sequent.
pub type SentenceSet = std::collections::BTreeSet<Sentence>;

/// Renders a sentence set as a comma-separated, lexicographically sorted
/// string --- the canonical form used throughout trace output (see
/// [`crate::engine`], which relies on it staying deterministic).
pub fn render_set(set: &SentenceSet) -> String {
    let mut rendered: Vec<String> = set.iter().map(|s| s.to_string()).collect();
    rendered.sort();
    rendered.join(", ")
}

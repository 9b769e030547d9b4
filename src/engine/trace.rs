/*!
Trace line rendering.

Every trace entry is indented by recursion depth and emitted in prefix
order, so a flat `Vec<String>` reads like a proof tree without needing
one.
*/

use crate::sentence::{render_set, SentenceSet};

pub(crate) fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

pub(crate) fn render_sequent(ante: &SentenceSet, succ: &SentenceSet) -> String {
    format!("{} => {}", render_set(ante), render_set(succ))
}

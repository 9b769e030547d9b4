/*!
Search configuration.

A plain tunables struct threaded through the engine.
*/

/// Tunables for a [`crate::engine::Reasoner`].
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Recursion depth at which a non-axiomatic branch fails with
    /// `"DEPTH LIMIT"`. Default 25.
    pub max_depth: usize,

    /// Whether `[R∃R.C]` may fall back to a fresh canonical witness when no
    /// known witness proves the goal. Default `true`.
    pub rq_allow_fresh_witness: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 25,
            rq_allow_fresh_witness: true,
        }
    }
}

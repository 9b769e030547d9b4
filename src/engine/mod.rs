/*!
The backward proof-search engine.

Root-first, depth-limited backward search with memoization, cycle
detection, and deterministic rule ordering. A [`Reasoner`] is a thin handle
pairing a [`MaterialBase`] with a [`SearchConfig`]; each call to
[`Reasoner::derives`] builds a fresh [`Search`] --- cache, trace, and all ---
and discards it when the call returns.
*/

mod cache;
mod rq;
mod rules;
mod trace;

use cache::{Cache, CacheState};
use serde::Serialize;

use crate::base::MaterialBase;
use crate::config::SearchConfig;
use crate::sentence::{Sentence, SentenceSet};

/// The outcome of a `derives` call.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ProofResult {
    pub derivable: bool,
    pub trace: Vec<String>,
    pub depth_reached: usize,
    pub cache_hits: usize,
}

/// A reasoner is constructed against a base; it owns no state between
/// `derives` calls.
pub struct Reasoner<'b> {
    base: &'b MaterialBase,
    config: SearchConfig,
}

impl<'b> Reasoner<'b> {
    pub fn new(base: &'b MaterialBase) -> Self {
        Self { base, config: SearchConfig::default() }
    }

    pub fn with_config(base: &'b MaterialBase, config: SearchConfig) -> Self {
        Self { base, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Attempts to prove `Γ ⇒ Δ`, returning the full [`ProofResult`].
    pub fn derives(&self, ante: SentenceSet, succ: SentenceSet) -> ProofResult {
        let mut search = Search::new(&self.config);
        let derivable = search.prove(self.base, &ante, &succ, 0);
        ProofResult {
            derivable,
            trace: search.trace,
            depth_reached: search.depth_reached,
            cache_hits: search.cache_hits,
        }
    }

    /// A thin alias over [`Reasoner::derives`] returning only `derivable`.
    pub fn query(&self, ante: SentenceSet, succ: SentenceSet) -> bool {
        self.derives(ante, succ).derivable
    }
}

/// Which side of the sequent a complex sentence was drawn from, and so
/// which half of the rule pairs (L-rules vs. R-rules) applies to it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Ante,
    Succ,
}

/// Mutable state owned by exactly one top-level `derives` call.
pub(crate) struct Search<'c> {
    config: &'c SearchConfig,
    cache: Cache,
    trace: Vec<String>,
    depth_reached: usize,
    cache_hits: usize,
    fresh_witness_warned: bool,
}

impl<'c> Search<'c> {
    fn new(config: &'c SearchConfig) -> Self {
        Self {
            config,
            cache: Cache::new(),
            trace: Vec::new(),
            depth_reached: 0,
            cache_hits: 0,
            fresh_witness_warned: false,
        }
    }

    fn log(&mut self, depth: usize, line: impl AsRef<str>) {
        self.trace.push(format!("{}{}", trace::indent(depth), line.as_ref()));
    }

    /// The core recursive step: axiom check, then cache lookup, then rule
    /// selection in deterministic order.
    pub(crate) fn prove(&mut self, base: &MaterialBase, ante: &SentenceSet, succ: &SentenceSet, depth: usize) -> bool {
        self.depth_reached = self.depth_reached.max(depth);

        // 1. Axiom check first --- independent of the cache and of depth.
        if base.is_axiom(ante, succ) {
            self.log(depth, format!("AXIOM: {}", trace::render_sequent(ante, succ)));
            log::trace!(target: "engine", "axiom at depth {depth}: {}", trace::render_sequent(ante, succ));
            return true;
        }

        let key = (ante.clone(), succ.clone());

        // 2 & 3. Memoization and cycle detection.
        match self.cache.get(&key) {
            Some(CacheState::Provable) => {
                self.cache_hits += 1;
                self.log(depth, format!("CACHED: {}", trace::render_sequent(ante, succ)));
                return true;
            }
            Some(CacheState::Refutable) => {
                self.cache_hits += 1;
                self.log(depth, format!("CACHED: {}", trace::render_sequent(ante, succ)));
                return false;
            }
            Some(CacheState::Pending) => {
                self.log(depth, format!("CYCLE: {}", trace::render_sequent(ante, succ)));
                return false;
            }
            None => {
                self.cache.insert(key.clone(), CacheState::Pending);
            }
        }

        if depth >= self.config.max_depth {
            self.log(depth, "DEPTH LIMIT");
            log::trace!(target: "engine", "depth limit at {}", trace::render_sequent(ante, succ));
            self.cache.insert(key, CacheState::Refutable);
            return false;
        }

        // 4. Rule selection, in deterministic sorted order: Γ's complex
        // sentences first, then Δ's, each sorted by string representation.
        let mut ante_candidates: Vec<&Sentence> = ante.iter().filter(|s| s.is_complex()).collect();
        ante_candidates.sort_by_key(|s| s.to_string());

        let mut succ_candidates: Vec<&Sentence> = succ.iter().filter(|s| s.is_complex()).collect();
        succ_candidates.sort_by_key(|s| s.to_string());

        for sentence in ante_candidates {
            log::trace!(target: "engine", "trying {sentence} in Γ at depth {depth}");
            if self.try_ante_rule(base, ante, succ, sentence, depth) {
                self.cache.insert(key, CacheState::Provable);
                return true;
            }
        }

        for sentence in succ_candidates {
            log::trace!(target: "engine", "trying {sentence} in Δ at depth {depth}");
            if self.try_succ_rule(base, ante, succ, sentence, depth) {
                self.cache.insert(key, CacheState::Provable);
                return true;
            }
        }

        // 5. Exhaustion.
        self.log(depth, format!("FAIL: {}", trace::render_sequent(ante, succ)));
        self.cache.insert(key, CacheState::Refutable);
        false
    }

    /// Dispatches a complex sentence found in Γ to its left rule.
    fn try_ante_rule(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        depth: usize,
    ) -> bool {
        match sentence {
            Sentence::Not(inner) => self.rule_l_not(base, ante, succ, sentence, inner, depth),
            Sentence::And(l, r) => self.rule_l_and(base, ante, succ, sentence, l, r, depth),
            Sentence::Or(l, r) => self.rule_l_or(base, ante, succ, sentence, l, r, depth),
            Sentence::Implies(l, r) => self.rule_l_implies(base, ante, succ, sentence, l, r, depth),
            Sentence::AllRestrict { role, concept, individual } => {
                self.rule_l_all(base, ante, succ, sentence, role, concept, individual, depth)
            }
            Sentence::SomeRestrict { role, concept, individual } => {
                self.rule_l_some(base, ante, succ, sentence, role, concept, individual, depth)
            }
            Sentence::Atom(_) | Sentence::ConceptAtom { .. } | Sentence::RoleAtom { .. } => {
                unreachable!("atoms are filtered out of rule candidates")
            }
        }
    }

    /// Dispatches a complex sentence found in Δ to its right rule.
    fn try_succ_rule(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        depth: usize,
    ) -> bool {
        match sentence {
            Sentence::Not(inner) => self.rule_r_not(base, ante, succ, sentence, inner, depth),
            Sentence::Or(l, r) => self.rule_r_or(base, ante, succ, sentence, l, r, depth),
            Sentence::Implies(l, r) => self.rule_r_implies(base, ante, succ, sentence, l, r, depth),
            Sentence::And(l, r) => self.rule_r_and(base, ante, succ, sentence, l, r, depth),
            Sentence::AllRestrict { role, concept, individual } => {
                self.rule_r_all(base, ante, succ, sentence, role, concept, individual, depth)
            }
            Sentence::SomeRestrict { role, concept, individual } => {
                self.rule_r_some(base, ante, succ, sentence, role, concept, individual, depth)
            }
            Sentence::Atom(_) | Sentence::ConceptAtom { .. } | Sentence::RoleAtom { .. } => {
                unreachable!("atoms are filtered out of rule candidates")
            }
        }
    }
}

/// `set` with `s` removed.
pub(crate) fn without(set: &SentenceSet, s: &Sentence) -> SentenceSet {
    let mut out = set.clone();
    out.remove(s);
    out
}

/// `set` with every member of `items` inserted.
pub(crate) fn with_all(set: &SentenceSet, items: impl IntoIterator<Item = Sentence>) -> SentenceSet {
    let mut out = set.clone();
    out.extend(items);
    out
}

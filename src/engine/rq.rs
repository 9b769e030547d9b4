/*!
The four restricted-quantifier rules.

`[L∀R.C]` and `[L∃R.C]` ground out against *triggers* already present in
the queried Γ; `[R∀R.C]` introduces a fresh eigenvariable; `[R∃R.C]` tries
known witnesses first and falls back to a fresh canonical witness gated by
concept-label subset blocking.
*/

use std::collections::BTreeSet;

use itertools::Itertools;

use super::{with_all, without, Search};
use crate::base::MaterialBase;
use crate::sentence::{Sentence, SentenceSet};

/// `{b : R(individual, b) ∈ ante}`.
fn triggers(ante: &SentenceSet, role: &str, individual: &str) -> BTreeSet<String> {
    ante.iter()
        .filter_map(|s| match s {
            Sentence::RoleAtom { role: r, subject, object } if r == role && subject == individual => {
                Some(object.clone())
            }
            _ => None,
        })
        .collect()
}

/// The concept labels attributed to `individual` in `ante`.
fn concept_labels(ante: &SentenceSet, individual: &str) -> BTreeSet<String> {
    ante.iter()
        .filter_map(|s| match s {
            Sentence::ConceptAtom { concept, individual: i } if i == individual => Some(concept.clone()),
            _ => None,
        })
        .collect()
}

/// Individuals already mentioned by some concept or role atom in `ante`.
fn existing_individuals(ante: &SentenceSet) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for s in ante {
        match s {
            Sentence::ConceptAtom { individual, .. } => {
                out.insert(individual.clone());
            }
            Sentence::RoleAtom { subject, object, .. } => {
                out.insert(subject.clone());
                out.insert(object.clone());
            }
            _ => {}
        }
    }
    out
}

/// Concept-label subset blocking: a fresh witness for `concept` is blocked
/// iff some existing individual already carries that label.
fn is_blocked(ante: &SentenceSet, concept: &str) -> bool {
    existing_individuals(ante)
        .iter()
        .any(|c| concept_labels(ante, c).contains(concept))
}

fn occurs(ante: &SentenceSet, succ: &SentenceSet, name: &str) -> bool {
    ante.iter().chain(succ.iter()).any(|s| mentions(s, name))
}

fn mentions(s: &Sentence, name: &str) -> bool {
    match s {
        Sentence::Atom(n) => n == name,
        Sentence::ConceptAtom { individual, .. } => individual == name,
        Sentence::RoleAtom { subject, object, .. } => subject == name || object == name,
        Sentence::Not(inner) => mentions(inner, name),
        Sentence::And(l, r) | Sentence::Or(l, r) | Sentence::Implies(l, r) => mentions(l, name) || mentions(r, name),
        Sentence::AllRestrict { individual, .. } | Sentence::SomeRestrict { individual, .. } => individual == name,
    }
}

/// The canonical fresh-individual name, numbered past any collision with
/// something already in scope.
fn fresh_name(prefix: &str, role: &str, concept: &str, individual: &str, ante: &SentenceSet, succ: &SentenceSet) -> String {
    let canonical = format!("_{prefix}_{role}_{concept}_{individual}");
    if !occurs(ante, succ, &canonical) {
        return canonical;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{canonical}_{n}");
        if !occurs(ante, succ, &candidate) {
            return candidate;
        }
        n += 1;
    }
}

impl<'c> Search<'c> {
    /// `[L∀R.C]`: adjunction. One subgoal; an empty trigger set is inert and
    /// falls through to the remainder of the sequent.
    pub(super) fn rule_l_all(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        role: &str,
        concept: &str,
        individual: &str,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[L∀R.C] on {sentence}"));
        let trig = triggers(ante, role, individual);
        let labels = trig.iter().map(|b| Sentence::concept(concept.to_string(), b.clone()));
        let new_ante = with_all(&without(ante, sentence), labels);
        self.prove(base, &new_ante, succ, depth + 1)
    }

    /// `[L∃R.C]`: every non-empty subset of the trigger labels must prove
    /// the remainder; an empty trigger set is inert.
    pub(super) fn rule_l_some(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        role: &str,
        concept: &str,
        individual: &str,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[L∃R.C] on {sentence}"));
        let trig = triggers(ante, role, individual);
        let base_ante = without(ante, sentence);

        if trig.is_empty() {
            return self.prove(base, &base_ante, succ, depth + 1);
        }

        let labels: Vec<Sentence> = trig.iter().map(|b| Sentence::concept(concept.to_string(), b.clone())).collect();

        let mut subsets: Vec<Vec<Sentence>> = labels.into_iter().powerset().filter(|s| !s.is_empty()).collect();
        subsets.sort_by_key(|s| (s.len(), s.iter().map(|x| x.to_string()).collect::<Vec<_>>()));

        subsets.into_iter().all(|subset| {
            let new_ante = with_all(&base_ante, subset);
            self.prove(base, &new_ante, succ, depth + 1)
        })
    }

    /// `[R∀R.C]`: a fresh eigenvariable not occurring elsewhere in the
    /// sequent.
    pub(super) fn rule_r_all(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        role: &str,
        concept: &str,
        individual: &str,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[R∀R.C] on {sentence}"));
        let b = fresh_name("e", role, concept, individual, ante, succ);
        let new_ante = with_all(ante, [Sentence::role(role.to_string(), individual.to_string(), b.clone())]);
        let new_succ = with_all(&without(succ, sentence), [Sentence::concept(concept.to_string(), b)]);
        self.prove(base, &new_ante, &new_succ, depth + 1)
    }

    /// `[R∃R.C]`: known witnesses first, then (if enabled and unblocked) a
    /// fresh canonical witness, warning once per invocation when used.
    pub(super) fn rule_r_some(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        role: &str,
        concept: &str,
        individual: &str,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[R∃R.C] on {sentence}"));
        let trig = triggers(ante, role, individual);
        let base_succ = without(succ, sentence);

        for b in &trig {
            let new_succ = with_all(&base_succ, [Sentence::concept(concept.to_string(), b.clone())]);
            if self.prove(base, ante, &new_succ, depth + 1) {
                return true;
            }
        }

        if self.config.rq_allow_fresh_witness {
            let b = fresh_name("w", role, concept, individual, ante, succ);
            if !is_blocked(ante, concept) {
                if !self.fresh_witness_warned {
                    self.fresh_witness_warned = true;
                    self.log(depth, format!("FRESH WITNESS: {b} for {sentence}"));
                    log::warn!(target: "rq", "using fresh witness {b} for {sentence} (blocking is a heuristic, not a guarantee)");
                }
                let new_ante = with_all(ante, [Sentence::role(role.to_string(), individual.to_string(), b.clone())]);
                let new_succ = with_all(&base_succ, [Sentence::concept(concept.to_string(), b)]);
                if self.prove(base, &new_ante, &new_succ, depth + 1) {
                    return true;
                }
            }
        }

        false
    }
}

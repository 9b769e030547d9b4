/*!
The eight Ketonen-style propositional rules.

Each rule removes its active formula from the side it occurs on and
produces either one or three subgoals; the three-subgoal rules' third
premise carries all active formulae from the other two on the same side,
compensating for the absence of structural contraction on sets.
*/

use super::{with_all, without, Search};
use crate::base::MaterialBase;
use crate::sentence::{Sentence, SentenceSet};

impl<'c> Search<'c> {
    /// `[L¬]`: one subgoal, `(Γ\{~A}, Δ∪{A})`.
    pub(super) fn rule_l_not(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        inner: &Sentence,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[L¬] on {sentence}"));
        let new_ante = without(ante, sentence);
        let new_succ = with_all(succ, [inner.clone()]);
        self.prove(base, &new_ante, &new_succ, depth + 1)
    }

    /// `[R¬]`: one subgoal, `(Γ∪{A}, Δ\{~A})`.
    pub(super) fn rule_r_not(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        inner: &Sentence,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[R¬] on {sentence}"));
        let new_ante = with_all(ante, [inner.clone()]);
        let new_succ = without(succ, sentence);
        self.prove(base, &new_ante, &new_succ, depth + 1)
    }

    /// `[L∧]`: one subgoal, `(Γ\{A&B}∪{A,B}, Δ)`. Multiplicative.
    pub(super) fn rule_l_and(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        left: &Sentence,
        right: &Sentence,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[L∧] on {sentence}"));
        let new_ante = with_all(&without(ante, sentence), [left.clone(), right.clone()]);
        self.prove(base, &new_ante, succ, depth + 1)
    }

    /// `[R∨]`: one subgoal, `(Γ, Δ\{A|B}∪{A,B})`.
    pub(super) fn rule_r_or(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        left: &Sentence,
        right: &Sentence,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[R∨] on {sentence}"));
        let new_succ = with_all(&without(succ, sentence), [left.clone(), right.clone()]);
        self.prove(base, ante, &new_succ, depth + 1)
    }

    /// `[R→]`: one subgoal, `(Γ∪{A}, Δ\{A→B}∪{B})`. The DD condition.
    pub(super) fn rule_r_implies(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        left: &Sentence,
        right: &Sentence,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[R→] on {sentence}"));
        let new_ante = with_all(ante, [left.clone()]);
        let new_succ = with_all(&without(succ, sentence), [right.clone()]);
        self.prove(base, &new_ante, &new_succ, depth + 1)
    }

    /// `[R∧]`: three subgoals with a third top sequent carrying both
    /// active formulae.
    pub(super) fn rule_r_and(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        left: &Sentence,
        right: &Sentence,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[R∧] on {sentence}"));
        let base_succ = without(succ, sentence);

        let succ_a = with_all(&base_succ, [left.clone()]);
        let succ_b = with_all(&base_succ, [right.clone()]);
        let succ_ab = with_all(&base_succ, [left.clone(), right.clone()]);

        self.prove(base, ante, &succ_a, depth + 1)
            && self.prove(base, ante, &succ_b, depth + 1)
            && self.prove(base, ante, &succ_ab, depth + 1)
    }

    /// `[L∨]`: three subgoals, the disjunctive mirror of `[R∧]`.
    pub(super) fn rule_l_or(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        left: &Sentence,
        right: &Sentence,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[L∨] on {sentence}"));
        let base_ante = without(ante, sentence);

        let ante_a = with_all(&base_ante, [left.clone()]);
        let ante_b = with_all(&base_ante, [right.clone()]);
        let ante_ab = with_all(&base_ante, [left.clone(), right.clone()]);

        self.prove(base, &ante_a, succ, depth + 1)
            && self.prove(base, &ante_b, succ, depth + 1)
            && self.prove(base, &ante_ab, succ, depth + 1)
    }

    /// `[L→]`: three subgoals.
    pub(super) fn rule_l_implies(
        &mut self,
        base: &MaterialBase,
        ante: &SentenceSet,
        succ: &SentenceSet,
        sentence: &Sentence,
        left: &Sentence,
        right: &Sentence,
        depth: usize,
    ) -> bool {
        self.log(depth, format!("[L→] on {sentence}"));
        let base_ante = without(ante, sentence);

        let premise_1_ante = base_ante.clone();
        let premise_1_succ = with_all(succ, [left.clone()]);

        let premise_2_ante = with_all(&base_ante, [right.clone()]);

        let premise_3_ante = with_all(&base_ante, [right.clone()]);
        let premise_3_succ = with_all(succ, [left.clone()]);

        self.prove(base, &premise_1_ante, &premise_1_succ, depth + 1)
            && self.prove(base, &premise_2_ante, succ, depth + 1)
            && self.prove(base, &premise_3_ante, &premise_3_succ, depth + 1)
    }
}

/*!
RQ schema records, consulted lazily by `is_axiom` at query time.

Neither schema kind is ever grounded against the base's `language` --- both
are matched against the *queried* sequent, which is why the base stores
them as bare patterns rather than pre-computing an extension.
*/

use crate::sentence::{Sentence, SentenceSet};

/// A registered RQ schema, admitting an axiom under a concrete substitution
/// found in the queried sequent.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Schema {
    /// Admits `{R(a,b)} |~ {C(b)}` for any `b` witnessed in the queried Γ.
    Concept {
        role: String,
        individual: String,
        concept: String,
    },

    /// Admits `{R(a,b), C(b)} |~ S` for any `b` witnessed in the queried Γ.
    Inference {
        role: String,
        individual: String,
        concept: String,
        consequent: SentenceSet,
    },
}

impl Schema {
    /// Does this schema admit `(ante, succ)` as an axiom under some
    /// concrete witness drawn from `ante`?
    pub fn admits(&self, ante: &SentenceSet, succ: &SentenceSet) -> bool {
        match self {
            Schema::Concept { role, individual, concept } => {
                if ante.len() != 1 {
                    return false;
                }
                let Some(b) = witness_of(ante, role, individual) else {
                    return false;
                };
                let expected: SentenceSet = [Sentence::concept(concept.clone(), b)].into_iter().collect();
                succ == &expected
            }

            Schema::Inference { role, individual, concept, consequent } => {
                if ante.len() != 2 {
                    return false;
                }
                let Some(b) = witness_of(ante, role, individual) else {
                    return false;
                };
                let expected: SentenceSet = [
                    Sentence::role(role.clone(), individual.clone(), b.clone()),
                    Sentence::concept(concept.clone(), b),
                ]
                .into_iter()
                .collect();
                &expected == ante && succ == consequent
            }
        }
    }
}

/// Finds `b` such that `R(individual, b)` is a member of `ante`.
fn witness_of(ante: &SentenceSet, role: &str, individual: &str) -> Option<String> {
    ante.iter().find_map(|s| match s {
        Sentence::RoleAtom { role: r, subject, object } if r == role && subject == individual => {
            Some(object.clone())
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_schema_admits_exact_match_only() {
        let schema = Schema::Concept {
            role: "hasChild".into(),
            individual: "a".into(),
            concept: "Doctor".into(),
        };

        let ante: SentenceSet = [Sentence::role("hasChild", "a", "b")].into_iter().collect();
        let succ: SentenceSet = [Sentence::concept("Doctor", "b")].into_iter().collect();
        assert!(schema.admits(&ante, &succ));

        let wrong_succ: SentenceSet = [Sentence::concept("Doctor", "c")].into_iter().collect();
        assert!(!schema.admits(&ante, &wrong_succ));

        let extra_ante: SentenceSet = [
            Sentence::role("hasChild", "a", "b"),
            Sentence::atom("extra"),
        ]
        .into_iter()
        .collect();
        assert!(!schema.admits(&extra_ante, &succ));
    }

    #[test]
    fn inference_schema_requires_both_atoms_for_the_same_witness() {
        let schema = Schema::Inference {
            role: "hasChild".into(),
            individual: "a".into(),
            concept: "Doctor".into(),
            consequent: [Sentence::concept("PD", "a")].into_iter().collect(),
        };

        let ante: SentenceSet = [
            Sentence::role("hasChild", "a", "b"),
            Sentence::concept("Doctor", "b"),
        ]
        .into_iter()
        .collect();
        let succ: SentenceSet = [Sentence::concept("PD", "a")].into_iter().collect();
        assert!(schema.admits(&ante, &succ));

        let mismatched_witness: SentenceSet = [
            Sentence::role("hasChild", "a", "b"),
            Sentence::concept("Doctor", "c"),
        ]
        .into_iter()
        .collect();
        assert!(!schema.admits(&mismatched_witness, &succ));
    }
}

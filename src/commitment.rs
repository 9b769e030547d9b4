/*!
The commitment store: a higher-level builder that accepts named assertions
and universal commitments and compiles them into a [`MaterialBase`].
Retracting a label removes its compiled contribution.

Pure bookkeeping over [`MaterialBase`]'s append-only insertion API: rather
than support removal on the base itself, the store keeps the list of
active commitments and recompiles a fresh base from whichever remain
whenever [`CommitmentStore::compile`] is called.
*/

use std::collections::BTreeMap;

use crate::base::MaterialBase;
use crate::errors::ReasonerError;
use crate::sentence::{Mode, SentenceSet};

/// A single named contribution to a compiled base.
#[derive(Clone, Debug)]
pub enum Commitment {
    /// A base consequence `Γ |~ Δ`.
    Assertion { antecedent: SentenceSet, consequent: SentenceSet },

    /// A concept schema.
    ConceptSchema { role: String, individual: String, concept: String },

    /// An inference schema.
    InferenceSchema {
        role: String,
        individual: String,
        concept: String,
        consequent: SentenceSet,
    },
}

/// An ordered, labeled collection of commitments plus the mode they compile
/// against.
#[derive(Clone, Debug)]
pub struct CommitmentStore {
    mode: Mode,
    entries: BTreeMap<String, Commitment>,
}

impl CommitmentStore {
    pub fn new(mode: Mode) -> Self {
        Self { mode, entries: BTreeMap::new() }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Records (or overwrites) a named base consequence.
    pub fn assert(&mut self, label: impl Into<String>, antecedent: SentenceSet, consequent: SentenceSet) {
        self.entries.insert(label.into(), Commitment::Assertion { antecedent, consequent });
    }

    /// Records a named universal commitment compiling to a concept schema.
    pub fn commit_concept_schema(
        &mut self,
        label: impl Into<String>,
        role: impl Into<String>,
        individual: impl Into<String>,
        concept: impl Into<String>,
    ) {
        self.entries.insert(
            label.into(),
            Commitment::ConceptSchema { role: role.into(), individual: individual.into(), concept: concept.into() },
        );
    }

    /// Records a named universal commitment compiling to an inference schema.
    pub fn commit_inference_schema(
        &mut self,
        label: impl Into<String>,
        role: impl Into<String>,
        individual: impl Into<String>,
        concept: impl Into<String>,
        consequent: SentenceSet,
    ) {
        self.entries.insert(
            label.into(),
            Commitment::InferenceSchema {
                role: role.into(),
                individual: individual.into(),
                concept: concept.into(),
                consequent,
            },
        );
    }

    /// Removes a commitment by label. Returns whether one was present.
    pub fn retract(&mut self, label: &str) -> bool {
        self.entries.remove(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Compiles all active commitments into a fresh [`MaterialBase`], in
    /// label order.
    pub fn compile(&self) -> Result<MaterialBase, ReasonerError> {
        let mut base = MaterialBase::new(self.mode);
        for commitment in self.entries.values() {
            match commitment {
                Commitment::Assertion { antecedent, consequent } => {
                    base.add_consequence(antecedent.clone(), consequent.clone())?;
                }
                Commitment::ConceptSchema { role, individual, concept } => {
                    base.add_concept_schema(role.clone(), individual.clone(), concept.clone())?;
                }
                Commitment::InferenceSchema { role, individual, concept, consequent } => {
                    base.add_inference_schema(role.clone(), individual.clone(), concept.clone(), consequent.clone())?;
                }
            }
        }
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::Sentence;

    #[test]
    fn retraction_removes_the_compiled_contribution() {
        let mut store = CommitmentStore::new(Mode::Propositional);
        let a: SentenceSet = [Sentence::atom("A")].into_iter().collect();
        let b: SentenceSet = [Sentence::atom("B")].into_iter().collect();
        store.assert("rain-implies-wet", a.clone(), b.clone());

        let base = store.compile().unwrap();
        assert!(base.is_axiom(&a, &b));

        store.retract("rain-implies-wet");
        let base = store.compile().unwrap();
        assert!(!base.consequences().contains(&(a, b)));
    }

    #[test]
    fn rq_schemas_compile_through_the_store() {
        let mut store = CommitmentStore::new(Mode::Rq);
        store.commit_concept_schema("doctor-children", "hasChild", "a", "Doctor");
        let base = store.compile().unwrap();
        assert_eq!(base.schemas().len(), 1);
    }
}

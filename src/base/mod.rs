/*!
The material base.

Stores the atomic language, explicit base consequences, and (in RQ mode)
lazy schemas, and decides the `is_axiom` predicate the engine consults at
every leaf of the search.
*/

mod schema;
pub use schema::Schema;

use std::collections::BTreeSet;

use crate::errors::ValidationError;
use crate::sentence::{Mode, Sentence, SentenceSet};

/// A pair of atomic-sentence sets declared as a base consequence.
pub type Consequence = (SentenceSet, SentenceSet);

/// The atomic language, base consequences, and (RQ) schemas a reasoner is
/// built against.
///
/// Conceptually append-only: every insertion either fully succeeds or leaves
/// the base exactly as it was, since every invariant is checked before
/// anything is written.
#[derive(Clone, Debug)]
pub struct MaterialBase {
    mode: Mode,
    language: SentenceSet,
    consequences: BTreeSet<Consequence>,
    schemas: BTreeSet<Schema>,
}

impl MaterialBase {
    /// An empty base in the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            language: SentenceSet::new(),
            consequences: BTreeSet::new(),
            schemas: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn language(&self) -> &SentenceSet {
        &self.language
    }

    pub fn consequences(&self) -> &BTreeSet<Consequence> {
        &self.consequences
    }

    pub fn schemas(&self) -> &BTreeSet<Schema> {
        &self.schemas
    }

    /// Checks that `a` is atomic, and that its shape (bare atom vs.
    /// concept/role atom) matches the base's mode.
    fn validate_atom(&self, a: &Sentence) -> Result<(), ValidationError> {
        if !a.is_atom() {
            return Err(ValidationError::NotAtomic(a.to_string()));
        }
        match (self.mode, a) {
            (Mode::Propositional, Sentence::Atom(_)) => Ok(()),
            (Mode::Propositional, _) => Err(ValidationError::ModeMismatch(format!(
                "'{a}' is a concept/role atom but the base is propositional"
            ))),
            (Mode::Rq, Sentence::Atom(_)) => Err(ValidationError::ModeMismatch(format!(
                "'{a}' is a bare atom but the base is in RQ mode"
            ))),
            (Mode::Rq, _) => Ok(()),
        }
    }

    fn validate_atoms<'a>(&self, sentences: impl IntoIterator<Item = &'a Sentence>) -> Result<(), ValidationError> {
        for s in sentences {
            self.validate_atom(s)?;
        }
        Ok(())
    }

    /// Requires `a` to be atomic and mode-consistent; the base is left
    /// unchanged on failure.
    pub fn add_atom(&mut self, a: Sentence) -> Result<(), ValidationError> {
        self.validate_atom(&a)?;
        log::trace!(target: "base", "adding atom {a}");
        self.language.insert(a);
        Ok(())
    }

    /// Requires every member of `ante` and `succ` to be atomic; implicitly
    /// adds those atoms to `language`. The consequence set deduplicates via
    /// set insertion.
    pub fn add_consequence(&mut self, ante: SentenceSet, succ: SentenceSet) -> Result<(), ValidationError> {
        self.validate_atoms(ante.iter())?;
        self.validate_atoms(succ.iter())?;

        log::trace!(
            target: "base",
            "adding consequence {} |~ {}",
            crate::sentence::render_set(&ante),
            crate::sentence::render_set(&succ)
        );

        for a in ante.iter().cloned() {
            self.language.insert(a);
        }
        for a in succ.iter().cloned() {
            self.language.insert(a);
        }
        self.consequences.insert((ante, succ));
        Ok(())
    }

    /// Registers a concept schema, requiring well-formed identifiers for
    /// `role`, `individual`, and `concept`.
    pub fn add_concept_schema(
        &mut self,
        role: impl Into<String>,
        individual: impl Into<String>,
        concept: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let (role, individual, concept) = (role.into(), individual.into(), concept.into());
        for ident in [&role, &individual, &concept] {
            if !is_ident(ident) {
                return Err(ValidationError::MalformedSchema(format!("'{ident}' is not a valid identifier")));
            }
        }
        log::trace!(target: "base", "adding concept schema {role}.{concept} on {individual}");
        self.schemas.insert(Schema::Concept { role, individual, concept });
        Ok(())
    }

    /// Registers an inference schema.
    pub fn add_inference_schema(
        &mut self,
        role: impl Into<String>,
        individual: impl Into<String>,
        concept: impl Into<String>,
        consequent: SentenceSet,
    ) -> Result<(), ValidationError> {
        let (role, individual, concept) = (role.into(), individual.into(), concept.into());
        for ident in [&role, &individual, &concept] {
            if !is_ident(ident) {
                return Err(ValidationError::MalformedSchema(format!("'{ident}' is not a valid identifier")));
            }
        }
        self.validate_atoms(consequent.iter())?;
        log::trace!(target: "base", "adding inference schema {role}.{concept} on {individual}");
        self.schemas.insert(Schema::Inference { role, individual, concept, consequent });
        Ok(())
    }

    /// A sequent is an axiom when its sides share a member, when it exactly
    /// matches a registered base consequence, or (in RQ mode) when a
    /// registered schema admits it under some witness.
    ///
    /// Pure function of the base's current state; does not depend on the
    /// depth of the caller.
    pub fn is_axiom(&self, ante: &SentenceSet, succ: &SentenceSet) -> bool {
        // Containment: the sides share a member.
        if ante.intersection(succ).next().is_some() {
            return true;
        }

        // Explicit base consequence, exact match only.
        if self.consequences.contains(&(ante.clone(), succ.clone())) {
            return true;
        }

        // RQ schema match.
        self.schemas.iter().any(|schema| schema.admits(ante, succ))
    }

    /// The individuals mentioned in `language`, as a projection of atom
    /// shapes recomputed rather than stored.
    pub fn individuals(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for a in &self.language {
            match a {
                Sentence::ConceptAtom { individual, .. } => {
                    out.insert(individual.clone());
                }
                Sentence::RoleAtom { subject, object, .. } => {
                    out.insert(subject.clone());
                    out.insert(object.clone());
                }
                Sentence::Atom(_) => {}
                _ => {}
            }
        }
        out
    }

    pub fn concepts(&self) -> BTreeSet<String> {
        self.language
            .iter()
            .filter_map(|a| match a {
                Sentence::ConceptAtom { concept, .. } => Some(concept.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn roles(&self) -> BTreeSet<String> {
        self.language
            .iter()
            .filter_map(|a| match a {
                Sentence::RoleAtom { role, .. } => Some(role.clone()),
                _ => None,
            })
            .collect()
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`, matching the lexer's `IDENT` rule --- used to
/// validate schema fields that bypass the parser.
pub(crate) fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/*!
The sentence AST.

Sentences are value objects: structurally equal, hashable, and immutable
once built. `Ord` is derived for use as elements of `BTreeSet` (sequent
sides); it is *not* the ordering the search engine uses to pick which
complex sentence to attack next --- that ordering is always recomputed from
[`Sentence::to_string`], so rule selection stays deterministic (see
[`crate::engine`]).
*/

use std::fmt;

/// An object-language sentence.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Sentence {
    /// A bare propositional atom, e.g. `rain`.
    Atom(String),

    /// A restricted-quantifier concept atom, e.g. `Doctor(b)`.
    ConceptAtom { concept: String, individual: String },

    /// A restricted-quantifier role atom, e.g. `hasChild(a,b)`.
    RoleAtom {
        role: String,
        subject: String,
        object: String,
    },

    Not(Box<Sentence>),
    And(Box<Sentence>, Box<Sentence>),
    Or(Box<Sentence>, Box<Sentence>),
    Implies(Box<Sentence>, Box<Sentence>),

    /// `ALL R.C(a)` --- all R-successors of `a` are `C`.
    AllRestrict {
        role: String,
        concept: String,
        individual: String,
    },

    /// `SOME R.C(a)` --- some R-successor of `a` is `C`.
    SomeRestrict {
        role: String,
        concept: String,
        individual: String,
    },
}

impl Sentence {
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    pub fn concept(concept: impl Into<String>, individual: impl Into<String>) -> Self {
        Self::ConceptAtom {
            concept: concept.into(),
            individual: individual.into(),
        }
    }

    pub fn role(role: impl Into<String>, subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self::RoleAtom {
            role: role.into(),
            subject: subject.into(),
            object: object.into(),
        }
    }

    pub fn not(s: Sentence) -> Self {
        Self::Not(Box::new(s))
    }

    pub fn and(l: Sentence, r: Sentence) -> Self {
        Self::And(Box::new(l), Box::new(r))
    }

    pub fn or(l: Sentence, r: Sentence) -> Self {
        Self::Or(Box::new(l), Box::new(r))
    }

    pub fn implies(l: Sentence, r: Sentence) -> Self {
        Self::Implies(Box::new(l), Box::new(r))
    }

    /// An atomic sentence is one of the three atom variants.
    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_) | Self::ConceptAtom { .. } | Self::RoleAtom { .. })
    }

    /// A sentence is complex exactly when it is not atomic.
    pub fn is_complex(&self) -> bool {
        !self.is_atom()
    }

    /// Is this one of the two restricted-quantifier forms?
    pub fn is_quantifier(&self) -> bool {
        matches!(self, Self::AllRestrict { .. } | Self::SomeRestrict { .. })
    }

    /// Binding strength, tightest first, used only for minimal-parens
    /// rendering in [`Display`](fmt::Display) --- unrelated to the engine's
    /// rule-selection ordering.
    fn precedence(&self) -> u8 {
        match self {
            Self::Atom(_)
            | Self::ConceptAtom { .. }
            | Self::RoleAtom { .. }
            | Self::AllRestrict { .. }
            | Self::SomeRestrict { .. }
            | Self::Not(_) => 4,
            Self::And(_, _) => 3,
            Self::Or(_, _) => 2,
            Self::Implies(_, _) => 1,
        }
    }

    fn render(&self, min_prec: u8) -> String {
        let prec = self.precedence();
        let body = match self {
            Self::Atom(name) => name.clone(),
            Self::ConceptAtom { concept, individual } => format!("{concept}({individual})"),
            Self::RoleAtom { role, subject, object } => format!("{role}({subject},{object})"),
            Self::Not(inner) => format!("~{}", inner.render(4)),
            Self::And(l, r) => format!("{} & {}", l.render(3), r.render(4)),
            Self::Or(l, r) => format!("{} | {}", l.render(2), r.render(3)),
            Self::Implies(l, r) => format!("{} -> {}", l.render(2), r.render(1)),
            Self::AllRestrict { role, concept, individual } => {
                format!("ALL {role}.{concept}({individual})")
            }
            Self::SomeRestrict { role, concept, individual } => {
                format!("SOME {role}.{concept}({individual})")
            }
        };
        if prec < min_prec {
            format!("({body})")
        } else {
            body
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_variants_are_atoms() {
        assert!(Sentence::atom("p").is_atom());
        assert!(Sentence::concept("C", "a").is_atom());
        assert!(Sentence::role("R", "a", "b").is_atom());
        assert!(!Sentence::not(Sentence::atom("p")).is_atom());
    }

    #[test]
    fn render_adds_parens_only_when_needed() {
        let a = Sentence::atom("A");
        let b = Sentence::atom("B");
        let c = Sentence::atom("C");

        let not_and = Sentence::not(Sentence::and(a.clone(), b.clone()));
        assert_eq!(not_and.to_string(), "~(A & B)");

        let and_or = Sentence::and(Sentence::or(a.clone(), b.clone()), c.clone());
        assert_eq!(and_or.to_string(), "(A | B) & C");

        let impl_right_assoc = Sentence::implies(a.clone(), Sentence::implies(b.clone(), c.clone()));
        assert_eq!(impl_right_assoc.to_string(), "A -> B -> C");

        let impl_left_needs_parens =
            Sentence::implies(Sentence::implies(a.clone(), b.clone()), c.clone());
        assert_eq!(impl_left_needs_parens.to_string(), "(A -> B) -> C");
    }

    #[test]
    fn quantifier_render() {
        let s = Sentence::AllRestrict {
            role: "hasChild".into(),
            concept: "Doctor".into(),
            individual: "a".into(),
        };
        assert_eq!(s.to_string(), "ALL hasChild.Doctor(a)");
    }
}

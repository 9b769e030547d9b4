use nmms_core::base::MaterialBase;
use nmms_core::commitment::CommitmentStore;
use nmms_core::sentence::{Mode, Sentence, SentenceSet};

fn set(atoms: &[Sentence]) -> SentenceSet {
    atoms.iter().cloned().collect()
}

#[test]
fn ax2_does_not_weaken_or_strengthen() {
    let mut base = MaterialBase::new(Mode::Propositional);
    let rain = set(&[Sentence::atom("rain")]);
    let wet = set(&[Sentence::atom("wet")]);
    base.add_consequence(rain.clone(), wet.clone()).unwrap();

    assert!(base.is_axiom(&rain, &wet));

    let rain_and_covered = set(&[Sentence::atom("rain"), Sentence::atom("covered")]);
    assert!(!base.is_axiom(&rain_and_covered, &wet));

    let empty: SentenceSet = SentenceSet::new();
    assert!(!base.is_axiom(&rain, &empty));
}

#[test]
fn ax3_concept_schema_admits_only_the_exact_schema_shape() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_concept_schema("hasChild", "a", "Doctor").unwrap();

    let ante = set(&[Sentence::role("hasChild", "a", "b")]);
    let succ = set(&[Sentence::concept("Doctor", "b")]);
    assert!(base.is_axiom(&ante, &succ));

    let wrong_concept = set(&[Sentence::concept("Lawyer", "b")]);
    assert!(!base.is_axiom(&ante, &wrong_concept));

    let wrong_witness = set(&[Sentence::role("hasChild", "a", "c")]);
    assert!(!base.is_axiom(&wrong_witness, &succ));
}

#[test]
fn ax3_inference_schema_requires_both_the_role_and_concept_atom() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_inference_schema(
        "hasChild",
        "a",
        "Doctor",
        set(&[Sentence::concept("PD", "a")]),
    )
    .unwrap();

    let full = set(&[Sentence::role("hasChild", "a", "b"), Sentence::concept("Doctor", "b")]);
    let pd = set(&[Sentence::concept("PD", "a")]);
    assert!(base.is_axiom(&full, &pd));

    let role_only = set(&[Sentence::role("hasChild", "a", "b")]);
    assert!(!base.is_axiom(&role_only, &pd));
}

#[test]
fn adding_an_invalid_atom_leaves_the_base_unchanged() {
    let mut base = MaterialBase::new(Mode::Propositional);
    base.add_atom(Sentence::atom("p")).unwrap();
    let before = base.language().clone();

    let complex = Sentence::implies(Sentence::atom("p"), Sentence::atom("q"));
    assert!(base.add_atom(complex).is_err());
    assert_eq!(base.language(), &before);
}

#[test]
fn add_consequence_rejects_a_complex_side_without_mutating_the_base() {
    let mut base = MaterialBase::new(Mode::Propositional);
    let complex = set(&[Sentence::implies(Sentence::atom("p"), Sentence::atom("q"))]);
    let q = set(&[Sentence::atom("q")]);
    assert!(base.add_consequence(complex, q).is_err());
    assert!(base.consequences().is_empty());
    assert!(base.language().is_empty());
}

#[test]
fn malformed_schema_identifiers_are_rejected() {
    let mut base = MaterialBase::new(Mode::Rq);
    assert!(base.add_concept_schema("has child", "a", "Doctor").is_err());
    assert!(base.schemas().is_empty());
}

#[test]
fn commitment_store_compiles_several_kinds_together() {
    let mut store = CommitmentStore::new(Mode::Rq);
    store.assert(
        "known-case",
        set(&[Sentence::role("hasChild", "a", "b"), Sentence::concept("Doctor", "b")]),
        set(&[Sentence::concept("PD", "a")]),
    );
    store.commit_concept_schema("doctor-children", "hasChild", "a", "Doctor");
    store.commit_inference_schema(
        "doctor-children-are-pd",
        "hasChild",
        "a",
        "Doctor",
        set(&[Sentence::concept("PD", "a")]),
    );

    let base = store.compile().unwrap();
    assert_eq!(base.consequences().len(), 1);
    assert_eq!(base.schemas().len(), 2);

    assert!(store.retract("doctor-children"));
    assert!(!store.retract("doctor-children"));

    let base = store.compile().unwrap();
    assert_eq!(base.schemas().len(), 1);
}

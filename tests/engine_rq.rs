use nmms_core::base::MaterialBase;
use nmms_core::engine::Reasoner;
use nmms_core::sentence::{Mode, Sentence, SentenceSet};

fn set(atoms: &[Sentence]) -> SentenceSet {
    atoms.iter().cloned().collect()
}

fn traced(trace: &[String], needle: &str) -> bool {
    trace.iter().any(|line| line.contains(needle))
}

#[test]
fn universal_restriction_grounds_out_against_a_base_consequence() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_consequence(
        set(&[Sentence::role("hasChild", "a", "b"), Sentence::concept("Doctor", "b")]),
        set(&[Sentence::concept("PD", "a")]),
    )
    .unwrap();

    let ante = set(&[
        Sentence::AllRestrict { role: "hasChild".into(), concept: "Doctor".into(), individual: "a".into() },
        Sentence::role("hasChild", "a", "b"),
    ]);
    let succ = set(&[Sentence::concept("PD", "a")]);

    let reasoner = Reasoner::new(&base);
    let result = reasoner.derives(ante, succ);

    assert!(result.derivable);
    assert!(traced(&result.trace, "[L∀R.C]"));
    assert!(traced(&result.trace, "AXIOM:"));
}

#[test]
fn universal_restriction_introduces_a_label_for_every_triggered_witness() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_consequence(
        set(&[
            Sentence::role("hasChild", "a", "b"),
            Sentence::role("hasChild", "a", "c"),
            Sentence::concept("Doctor", "b"),
            Sentence::concept("Doctor", "c"),
        ]),
        set(&[Sentence::concept("PD", "a")]),
    )
    .unwrap();

    let all_children_doctors = Sentence::AllRestrict {
        role: "hasChild".into(),
        concept: "Doctor".into(),
        individual: "a".into(),
    };
    let succ = set(&[Sentence::concept("PD", "a")]);

    let both_witnesses = set(&[
        all_children_doctors.clone(),
        Sentence::role("hasChild", "a", "b"),
        Sentence::role("hasChild", "a", "c"),
    ]);
    let reasoner = Reasoner::new(&base);
    assert!(reasoner.derives(both_witnesses, succ.clone()).derivable);

    // Dropping one triggered witness loses the label the base consequence
    // needs, so the proof no longer goes through.
    let one_witness = set(&[all_children_doctors, Sentence::role("hasChild", "a", "b")]);
    assert!(!reasoner.derives(one_witness, succ).derivable);
}

#[test]
fn a_universal_restriction_with_no_trigger_is_inert() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_consequence(set(&[Sentence::concept("Lawyer", "z")]), set(&[Sentence::concept("Judge", "z")]))
        .unwrap();

    // The quantifier has no `hasChild(a,_)` witness in Γ, so it must be
    // discarded without contributing any label before the remainder ---
    // an explicit base consequence --- can be reached.
    let ante = set(&[
        Sentence::AllRestrict { role: "hasChild".into(), concept: "Doctor".into(), individual: "a".into() },
        Sentence::concept("Lawyer", "z"),
    ]);
    let succ = set(&[Sentence::concept("Judge", "z")]);

    let reasoner = Reasoner::new(&base);
    let result = reasoner.derives(ante, succ);

    assert!(result.derivable);
    assert!(traced(&result.trace, "[L∀R.C]"));
}

#[test]
fn existential_restriction_is_proved_by_a_known_witness() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_consequence(
        set(&[Sentence::role("hasChild", "a", "c"), Sentence::concept("Doctor", "c")]),
        set(&[Sentence::concept("PD", "a")]),
    )
    .unwrap();

    let ante = set(&[Sentence::role("hasChild", "a", "c"), Sentence::concept("Doctor", "c")]);
    let succ = set(&[Sentence::SomeRestrict { role: "hasChild".into(), concept: "Doctor".into(), individual: "a".into() }]);

    let reasoner = Reasoner::new(&base);
    let result = reasoner.derives(ante, succ);

    assert!(result.derivable);
    assert!(traced(&result.trace, "[R∃R.C]"));
}

#[test]
fn universal_introduction_produces_a_fresh_eigenvariable_satisfying_a_schema() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_concept_schema("hasChild", "a", "Doctor").unwrap();

    let succ = set(&[Sentence::AllRestrict { role: "hasChild".into(), concept: "Doctor".into(), individual: "a".into() }]);

    let reasoner = Reasoner::new(&base);
    let result = reasoner.derives(SentenceSet::new(), succ);

    assert!(result.derivable);
    assert!(traced(&result.trace, "[R∀R.C]"));
}

#[test]
fn existential_falls_back_to_a_fresh_witness_when_none_is_known() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_concept_schema("hasChild", "a", "Doctor").unwrap();

    let succ = set(&[Sentence::SomeRestrict { role: "hasChild".into(), concept: "Doctor".into(), individual: "a".into() }]);

    let reasoner = Reasoner::new(&base);
    let result = reasoner.derives(SentenceSet::new(), succ);

    assert!(result.derivable);
    assert!(traced(&result.trace, "[R∃R.C]"));
    assert!(traced(&result.trace, "FRESH WITNESS"));
}

#[test]
fn concept_label_blocking_suppresses_the_fresh_witness_fallback() {
    let base = MaterialBase::new(Mode::Rq);
    let ante = set(&[Sentence::concept("Doctor", "c")]);
    let succ = set(&[Sentence::SomeRestrict { role: "hasChild".into(), concept: "Doctor".into(), individual: "a".into() }]);

    let reasoner = Reasoner::new(&base);
    let result = reasoner.derives(ante, succ);

    assert!(!result.derivable);
    assert!(!traced(&result.trace, "FRESH WITNESS"));
}

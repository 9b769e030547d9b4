use nmms_core::base::MaterialBase;
use nmms_core::engine::Reasoner;
use nmms_core::persist::{from_json, to_json};
use nmms_core::sentence::{Mode, Sentence, SentenceSet};

fn set(atoms: &[Sentence]) -> SentenceSet {
    atoms.iter().cloned().collect()
}

#[test]
fn a_saved_and_reloaded_propositional_base_derives_the_same_things() {
    let mut base = MaterialBase::new(Mode::Propositional);
    base.add_consequence(set(&[Sentence::atom("rain")]), set(&[Sentence::atom("wet")])).unwrap();
    base.add_consequence(
        set(&[Sentence::atom("rain"), Sentence::atom("covered")]),
        set(&[Sentence::atom("dry")]),
    )
    .unwrap();

    let json = to_json(&base).unwrap();
    let reloaded = from_json(Mode::Propositional, &json).unwrap();

    for (ante, succ) in [
        (set(&[Sentence::atom("rain")]), set(&[Sentence::atom("wet")])),
        (set(&[Sentence::atom("rain"), Sentence::atom("covered")]), set(&[Sentence::atom("dry")])),
        (set(&[Sentence::atom("rain")]), set(&[Sentence::atom("dry")])),
    ] {
        let before = Reasoner::new(&base).query(ante.clone(), succ.clone());
        let after = Reasoner::new(&reloaded).query(ante, succ);
        assert_eq!(before, after);
    }
}

#[test]
fn a_saved_and_reloaded_rq_base_keeps_its_schemas_usable() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_concept_schema("hasChild", "a", "Doctor").unwrap();
    base.add_inference_schema(
        "hasChild",
        "a",
        "Doctor",
        set(&[Sentence::concept("PD", "a")]),
    )
    .unwrap();

    let json = to_json(&base).unwrap();
    let reloaded = from_json(Mode::Rq, &json).unwrap();

    let ante = set(&[Sentence::role("hasChild", "a", "b"), Sentence::concept("Doctor", "b")]);
    let succ = set(&[Sentence::concept("PD", "a")]);

    assert!(Reasoner::new(&reloaded).query(ante, succ));
}

#[test]
fn the_json_shape_matches_the_documented_schema() {
    let mut base = MaterialBase::new(Mode::Propositional);
    base.add_consequence(set(&[Sentence::atom("A")]), set(&[Sentence::atom("B")])).unwrap();

    let json = to_json(&base).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("language").is_some());
    assert!(value.get("consequences").is_some());
    let consequence = &value["consequences"][0];
    assert!(consequence.get("antecedent").is_some());
    assert!(consequence.get("consequent").is_some());
}

#[test]
fn loading_rejects_a_consequence_side_that_is_not_atomic() {
    let text = r#"{
        "language": [],
        "consequences": [ { "antecedent": ["A -> B"], "consequent": ["C"] } ]
    }"#;
    assert!(from_json(Mode::Propositional, text).is_err());
}

#[test]
fn loading_into_the_wrong_mode_is_rejected() {
    let mut base = MaterialBase::new(Mode::Rq);
    base.add_atom(Sentence::concept("Doctor", "a")).unwrap();
    let json = to_json(&base).unwrap();

    assert!(from_json(Mode::Propositional, &json).is_err());
}

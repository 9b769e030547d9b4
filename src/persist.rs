/*!
The JSON base persistence format.

```text
{
  "language":     [atom_string, ...],
  "consequences": [ { "antecedent": [atom, ...], "consequent": [atom, ...] }, ... ],
  "schemas": [
      { "kind": "concept",   "role": R, "individual": a, "concept": C },
      { "kind": "inference", "role": R, "individual": a, "concept": C,
        "consequent": [atom, ...] }
  ]
}
```

Loading re-validates: every atom string must parse as an atomic sentence
in the base's mode; consequence sides must be atoms; duplicates collapse
via the base's own set-based storage.
*/

use serde::{Deserialize, Serialize};

use crate::base::{MaterialBase, Schema};
use crate::errors::{ReasonerError, ValidationError};
use crate::sentence::{Mode, Parser, Sentence, SentenceSet};

#[derive(Serialize, Deserialize)]
struct ConsequenceDto {
    antecedent: Vec<String>,
    consequent: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum SchemaDto {
    Concept { role: String, individual: String, concept: String },
    Inference { role: String, individual: String, concept: String, consequent: Vec<String> },
}

#[derive(Serialize, Deserialize)]
struct BaseDto {
    language: Vec<String>,
    consequences: Vec<ConsequenceDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    schemas: Vec<SchemaDto>,
}

fn parse_atom(mode: Mode, text: &str) -> Result<Sentence, ReasonerError> {
    let s = Parser::parse_sentence_complete(text, mode)?;
    if !s.is_atom() {
        return Err(ValidationError::NotAtomic(text.to_string()).into());
    }
    Ok(s)
}

fn parse_atom_set(mode: Mode, texts: &[String]) -> Result<SentenceSet, ReasonerError> {
    texts.iter().map(|t| parse_atom(mode, t)).collect()
}

/// Serializes `base` to the JSON persistence format.
pub fn to_json(base: &MaterialBase) -> serde_json::Result<String> {
    let language: Vec<String> = base.language().iter().map(|a| a.to_string()).collect();

    let consequences = base
        .consequences()
        .iter()
        .map(|(ante, succ)| ConsequenceDto {
            antecedent: ante.iter().map(|a| a.to_string()).collect(),
            consequent: succ.iter().map(|a| a.to_string()).collect(),
        })
        .collect();

    let schemas = base
        .schemas()
        .iter()
        .map(|schema| match schema {
            Schema::Concept { role, individual, concept } => SchemaDto::Concept {
                role: role.clone(),
                individual: individual.clone(),
                concept: concept.clone(),
            },
            Schema::Inference { role, individual, concept, consequent } => SchemaDto::Inference {
                role: role.clone(),
                individual: individual.clone(),
                concept: concept.clone(),
                consequent: consequent.iter().map(|a| a.to_string()).collect(),
            },
        })
        .collect();

    let dto = BaseDto { language, consequences, schemas };
    serde_json::to_string_pretty(&dto)
}

/// Loads a base from the JSON persistence format, re-validating every atom
/// and consequence against `mode`.
pub fn from_json(mode: Mode, text: &str) -> Result<MaterialBase, ReasonerError> {
    let dto: BaseDto = serde_json::from_str(text).map_err(|e| ValidationError::MalformedSchema(e.to_string()))?;
    let mut base = MaterialBase::new(mode);

    for atom_text in &dto.language {
        base.add_atom(parse_atom(mode, atom_text)?)?;
    }

    for c in &dto.consequences {
        let ante = parse_atom_set(mode, &c.antecedent)?;
        let succ = parse_atom_set(mode, &c.consequent)?;
        base.add_consequence(ante, succ)?;
    }

    for schema in dto.schemas {
        match schema {
            SchemaDto::Concept { role, individual, concept } => {
                base.add_concept_schema(role, individual, concept)?;
            }
            SchemaDto::Inference { role, individual, concept, consequent } => {
                let consequent = parse_atom_set(mode, &consequent)?;
                base.add_inference_schema(role, individual, concept, consequent)?;
            }
        }
    }

    Ok(base)
}

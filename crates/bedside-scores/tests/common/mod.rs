#![allow(dead_code)]

use bedside_core::models::input::{InputValue, Inputs};
use bedside_scores::definition::{Band, CriteriaSpec, Method, ScoreDefinition};
use bedside_scores::{Catalog, ComputationResult, ScoreEngine};

pub fn inputs(entries: &[(&str, InputValue)]) -> Inputs {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

pub fn checked(ids: &[&str]) -> Inputs {
    ids.iter()
        .map(|id| (id.to_string(), InputValue::Flag(true)))
        .collect()
}

pub fn builtin() -> &'static Catalog {
    Catalog::builtin().expect("built-in catalog should validate")
}

pub fn compute(id: &str, inputs: &Inputs) -> ComputationResult {
    ScoreEngine::new(builtin())
        .compute(id, inputs)
        .expect("score should exist")
}

pub fn definition(id: &str, method: Method, bands: Vec<Band>) -> ScoreDefinition {
    ScoreDefinition {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        source: String::new(),
        method,
        bands,
        unit: None,
        editorial: None,
    }
}

pub fn criteria_method(base_offset: f64, criteria: Vec<bedside_scores::definition::Criterion>) -> Method {
    Method::Criteria(CriteriaSpec {
        base_offset,
        criteria,
    })
}

//! Built-in score definitions, grouped by specialty.

mod cardiovascular;
mod classifications;
mod gastroenterology;
mod infectious;
mod laboratory;
mod neurology;
mod obstetrics;
mod physiology;
mod psychiatry;
mod pulmonary;

use crate::definition::{Band, CriteriaSpec, Criterion, Group, InputField, Method, ScoreDefinition};

/// Every definition compiled into this build, in display order.
pub fn builtin_definitions() -> Vec<ScoreDefinition> {
    [
        infectious::definitions(),
        pulmonary::definitions(),
        cardiovascular::definitions(),
        neurology::definitions(),
        gastroenterology::definitions(),
        obstetrics::definitions(),
        psychiatry::definitions(),
        laboratory::definitions(),
        physiology::definitions(),
        classifications::definitions(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

struct Header<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    source: &'a str,
}

fn define(header: Header<'_>, method: Method, bands: Vec<Band>, unit: Option<&str>) -> ScoreDefinition {
    ScoreDefinition {
        id: header.id.to_string(),
        name: header.name.to_string(),
        description: header.description.to_string(),
        source: header.source.to_string(),
        method,
        bands,
        unit: unit.map(str::to_string),
        editorial: None,
    }
}

/// Checklist of fixed-weight criteria given as `(id, label, weight)`.
fn checklist(base_offset: f64, items: &[(&str, &str, f64)]) -> Method {
    Method::Criteria(CriteriaSpec {
        base_offset,
        criteria: items
            .iter()
            .map(|(id, label, weight)| Criterion::fixed(id, label, *weight))
            .collect(),
    })
}

fn groups(groups: Vec<Group>) -> Method {
    Method::Categorical { groups }
}

fn fields(fields: Vec<InputField>) -> Method {
    Method::Formula { fields }
}

fn bands(items: &[(f64, f64, &str, &str)]) -> Vec<Band> {
    items
        .iter()
        .map(|(min, max, label, risk)| Band::new(*min, *max, label, risk))
        .collect()
}

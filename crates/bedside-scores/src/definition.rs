use serde::{Deserialize, Serialize};
use ts_rs::TS;

use bedside_core::models::editorial::EditorialMetadata;

/// The computation strategy a score uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Modality {
    /// Weighted checklist.
    Criteria,
    /// One option chosen per group, points summed.
    Categorical,
    /// Closed-form numeric formula.
    Formula,
    /// Narrative only, no point system.
    Informational,
}

/// A complete score definition as held by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Citation/source text, passed through for display.
    pub source: String,
    pub method: Method,
    /// Interpretation bands in ascending order.
    #[serde(default)]
    pub bands: Vec<Band>,
    pub unit: Option<String>,
    #[serde(default)]
    pub editorial: Option<EditorialMetadata>,
}

impl ScoreDefinition {
    pub fn modality(&self) -> Modality {
        self.method.modality()
    }
}

/// Modality-specific payload, tagged by the modality name.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "modality", content = "payload", rename_all = "snake_case")]
#[ts(export)]
pub enum Method {
    Criteria(CriteriaSpec),
    Categorical { groups: Vec<Group> },
    Formula { fields: Vec<InputField> },
    Informational { text: String },
}

impl Method {
    pub fn modality(&self) -> Modality {
        match self {
            Method::Criteria(_) => Modality::Criteria,
            Method::Categorical { .. } => Modality::Categorical,
            Method::Formula { .. } => Modality::Formula,
            Method::Informational { .. } => Modality::Informational,
        }
    }
}

/// Checklist payload. The total starts at `base_offset`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriteriaSpec {
    #[serde(default)]
    pub base_offset: f64,
    pub criteria: Vec<Criterion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub id: String,
    pub label: String,
    pub kind: CriterionKind,
}

impl Criterion {
    pub fn fixed(id: &str, label: &str, weight: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: CriterionKind::Fixed { weight },
        }
    }

    pub fn derived(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: CriterionKind::Derived,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CriterionKind {
    /// Contributes `weight` when checked. Negative weights subtract.
    Fixed { weight: f64 },
    /// Contributes the raw number the caller entered for this criterion.
    Derived,
}

/// A set of mutually exclusive options; at most one is selected.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Group {
    pub id: String,
    pub label: String,
    pub options: Vec<ScoreOption>,
}

impl Group {
    pub fn new(id: &str, label: &str, options: &[(&str, f64)]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            options: options
                .iter()
                .map(|(label, points)| ScoreOption {
                    label: label.to_string(),
                    points: *points,
                })
                .collect(),
        }
    }

    pub fn min_points(&self) -> f64 {
        self.options.iter().map(|o| o.points).fold(f64::INFINITY, f64::min)
    }

    pub fn max_points(&self) -> f64 {
        self.options
            .iter()
            .map(|o| o.points)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreOption {
    pub label: String,
    pub points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Number,
    Toggle,
}

/// A named input consumed by a formula.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InputField {
    pub id: String,
    pub label: String,
    pub unit: Option<String>,
    pub kind: FieldKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl InputField {
    pub fn number(id: &str, label: &str, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            unit: Some(unit.to_string()),
            kind: FieldKind::Number,
            min: None,
            max: None,
        }
    }

    pub fn toggle(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            unit: None,
            kind: FieldKind::Toggle,
            min: None,
            max: None,
        }
    }

    pub fn bounded(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// A closed interval `[min, max]` mapped to a risk label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub risk: String,
}

impl Band {
    pub fn new(min: f64, max: f64, label: &str, risk: &str) -> Self {
        Self {
            min,
            max,
            label: label.to_string(),
            risk: risk.to_string(),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

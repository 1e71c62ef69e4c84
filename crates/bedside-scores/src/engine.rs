//! The score engine: one entry point that turns a score id plus the
//! current inputs into a [`ComputationResult`].
//!
//! Computation is a pure function of the catalog and the inputs. Nothing is
//! cached between calls, so the caller re-runs [`ScoreEngine::compute`] on
//! every input change and treats fields it has not filled in yet as 0.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use bedside_core::models::input::Inputs;

use crate::catalog::Catalog;
use crate::definition::{Band, Method};
use crate::error::EngineError;
use crate::{categorical, criteria, formulas, interpretation};

/// What a computation produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    Value { value: f64 },
    /// Inputs violate a formula's domain. No number or band is given.
    Invalid { reason: String },
    /// Narrative-only score.
    Informational { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComputationResult {
    pub score_id: String,
    pub outcome: Outcome,
    pub unit: Option<String>,
    pub band: Option<Band>,
}

impl ComputationResult {
    pub fn value(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Value { value } => Some(value),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.outcome, Outcome::Invalid { .. })
    }

    /// A valid number that falls outside every band.
    pub fn is_undetermined(&self) -> bool {
        self.value().is_some() && self.band.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> ScoreEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn compute(&self, id: &str, inputs: &Inputs) -> Result<ComputationResult, EngineError> {
        let definition = self
            .catalog
            .lookup(id)
            .ok_or_else(|| EngineError::DefinitionNotFound(id.to_string()))?;

        let total = match &definition.method {
            Method::Criteria(spec) => criteria::total(spec, inputs),
            Method::Categorical { groups } => categorical::total(groups, inputs),
            Method::Formula { fields } => {
                let formula = formulas::lookup(id)
                    .ok_or_else(|| EngineError::FormulaNotRegistered(id.to_string()))?;
                match formulas::evaluate(formula, fields, inputs) {
                    Ok(value) => value,
                    Err(violation) => {
                        tracing::debug!(score = id, reason = %violation, "formula domain violation");
                        return Ok(ComputationResult {
                            score_id: definition.id.clone(),
                            outcome: Outcome::Invalid {
                                reason: violation.reason,
                            },
                            unit: definition.unit.clone(),
                            band: None,
                        });
                    }
                }
            }
            Method::Informational { text } => {
                return Ok(ComputationResult {
                    score_id: definition.id.clone(),
                    outcome: Outcome::Informational { text: text.clone() },
                    unit: None,
                    band: None,
                });
            }
        };

        let band = interpretation::resolve(total, &definition.bands).cloned();
        tracing::debug!(
            score = id,
            modality = ?definition.modality(),
            value = total,
            band = band.as_ref().map(|b| b.label.as_str()),
            "score computed"
        );

        Ok(ComputationResult {
            score_id: definition.id.clone(),
            outcome: Outcome::Value { value: total },
            unit: definition.unit.clone(),
            band,
        })
    }
}

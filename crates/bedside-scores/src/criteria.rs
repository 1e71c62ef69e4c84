//! Weighted-checklist accumulation.

use bedside_core::models::input::{self, Inputs};

use crate::definition::{CriteriaSpec, CriterionKind};

/// `base_offset + Σ checked fixed weights + Σ derived raw values`.
///
/// Recomputed from the full input state on every call, so unchecking a
/// criterion restores the previous total exactly.
pub fn total(spec: &CriteriaSpec, inputs: &Inputs) -> f64 {
    spec.criteria
        .iter()
        .map(|criterion| match criterion.kind {
            CriterionKind::Fixed { weight } if input::flag(inputs, &criterion.id) => weight,
            CriterionKind::Fixed { .. } => 0.0,
            CriterionKind::Derived => input::number(inputs, &criterion.id),
        })
        .fold(spec.base_offset, |acc, points| acc + points)
}

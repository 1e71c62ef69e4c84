use bedside_core::models::input::{number, Inputs};

use super::ratio;
use crate::error::DomainViolation;

/// Body mass index from weight (kg) and height (cm).
pub(super) fn bmi(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let weight = number(inputs, "weight");
    let height_m = number(inputs, "height") / 100.0;
    ratio(weight, height_m * height_m, "Height")
}

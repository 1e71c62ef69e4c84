use bedside_core::models::input::{number, Inputs};

use crate::error::DomainViolation;

/// Calcium corrected for albumin (mg/dL, albumin in g/dL).
pub(super) fn corrected_calcium(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let calcium = number(inputs, "calcium");
    let albumin = number(inputs, "albumin");
    Ok(calcium + 0.8 * (4.0 - albumin))
}

pub(super) fn anion_gap(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let sodium = number(inputs, "sodium");
    let chloride = number(inputs, "chloride");
    let bicarbonate = number(inputs, "bicarbonate");
    Ok(sodium - (chloride + bicarbonate))
}

/// Sodium corrected for hyperglycaemia (Hillier, 2.4 mEq/L per 100 mg/dL).
pub(super) fn corrected_sodium(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let sodium = number(inputs, "sodium");
    let glucose = number(inputs, "glucose");
    Ok(sodium + 0.024 * (glucose - 100.0))
}

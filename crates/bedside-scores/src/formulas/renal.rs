use bedside_core::models::input::{flag, number, Inputs};

use super::ratio;
use crate::error::DomainViolation;

pub(super) fn bun_creatinine_ratio(inputs: &Inputs) -> Result<f64, DomainViolation> {
    ratio(
        number(inputs, "bun"),
        number(inputs, "creatinine"),
        "Serum creatinine",
    )
}

/// Creatinine clearance (mL/min), ×0.85 for female patients.
pub(super) fn cockcroft_gault(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let age = number(inputs, "age");
    let weight = number(inputs, "weight");
    let creatinine = number(inputs, "creatinine");
    let sex_factor = if flag(inputs, "female") { 0.85 } else { 1.0 };

    let clearance = ratio((140.0 - age) * weight, 72.0 * creatinine, "Serum creatinine")?;
    Ok(clearance * sex_factor)
}

/// CKD-EPI 2021 race-free creatinine equation (mL/min/1.73 m²).
pub(super) fn egfr_ckd_epi_2021(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let creatinine = number(inputs, "creatinine");
    if creatinine <= 0.0 {
        return Err(DomainViolation::new(
            "Serum creatinine must be greater than zero",
        ));
    }
    let age = number(inputs, "age");
    let (kappa, alpha, sex_factor) = if flag(inputs, "female") {
        (0.7, -0.241, 1.012)
    } else {
        (0.9, -0.302, 1.0)
    };

    let x = creatinine / kappa;
    let creatinine_term = if x <= 1.0 {
        x.min(1.0).powf(alpha)
    } else {
        x.max(1.0).powf(-1.200)
    };

    Ok(142.0 * creatinine_term * 0.9938f64.powf(age) * sex_factor)
}

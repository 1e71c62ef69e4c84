use bedside_core::models::input::{flag, number, Inputs};

use crate::error::DomainViolation;

/// MELD (UNOS, pre-sodium). Lab values below 1 are raised to 1 so their
/// logs stay non-negative; creatinine is capped at 4 and forced to 4 for
/// patients dialysed at least twice in the past week.
pub(super) fn meld(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let bilirubin = number(inputs, "bilirubin").max(1.0);
    let inr = number(inputs, "inr").max(1.0);
    let creatinine = if flag(inputs, "dialysis") {
        4.0
    } else {
        number(inputs, "creatinine").clamp(1.0, 4.0)
    };

    let score =
        10.0 * (0.957 * creatinine.ln() + 0.378 * bilirubin.ln() + 1.120 * inr.ln() + 0.643);
    Ok(score.clamp(6.0, 40.0))
}

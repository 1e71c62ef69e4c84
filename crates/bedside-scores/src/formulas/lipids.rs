use bedside_core::models::input::{number, Inputs};

use super::ratio;
use crate::error::DomainViolation;

/// Above this triglyceride level (mg/dL) calculated LDL is unreliable.
const TRIGLYCERIDE_LIMIT: f64 = 400.0;

fn guard_triglycerides(tg: f64, method: &str) -> Result<(), DomainViolation> {
    if tg > TRIGLYCERIDE_LIMIT {
        return Err(DomainViolation::new(format!(
            "{method} is not valid when triglycerides exceed {TRIGLYCERIDE_LIMIT} mg/dL; \
             measure LDL directly"
        )));
    }
    Ok(())
}

/// Friedewald: LDL = TC − HDL − TG/5 (mg/dL).
pub(super) fn friedewald(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let tc = number(inputs, "total_cholesterol");
    let hdl = number(inputs, "hdl");
    let tg = number(inputs, "triglycerides");
    guard_triglycerides(tg, "The Friedewald equation")?;

    Ok(tc - hdl - tg / 5.0)
}

/// LDL with the TG:VLDL factor chosen from the triglyceride stratum
/// instead of the fixed Friedewald 5.
pub(super) fn tg_adjusted(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let tc = number(inputs, "total_cholesterol");
    let hdl = number(inputs, "hdl");
    let tg = number(inputs, "triglycerides");
    guard_triglycerides(tg, "The triglyceride-adjusted estimate")?;

    Ok(tc - hdl - tg / vldl_factor(tg))
}

fn vldl_factor(tg: f64) -> f64 {
    match tg {
        t if t < 50.0 => 3.5,
        t if t < 100.0 => 4.5,
        t if t < 150.0 => 5.0,
        t if t < 200.0 => 5.7,
        t if t < 300.0 => 6.5,
        _ => 7.5,
    }
}

pub(super) fn tc_hdl_ratio(inputs: &Inputs) -> Result<f64, DomainViolation> {
    ratio(
        number(inputs, "total_cholesterol"),
        number(inputs, "hdl"),
        "HDL cholesterol",
    )
}

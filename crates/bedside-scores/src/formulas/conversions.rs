use bedside_core::models::input::{number, Inputs};

use crate::error::DomainViolation;

const GLUCOSE_MGDL_PER_MMOL: f64 = 18.0;
const CREATININE_UMOL_PER_MGDL: f64 = 88.4;
const KG_PER_LB: f64 = 0.453_592_37;

pub(super) fn glucose_mgdl_to_mmol(inputs: &Inputs) -> Result<f64, DomainViolation> {
    Ok(number(inputs, "glucose") / GLUCOSE_MGDL_PER_MMOL)
}

pub(super) fn creatinine_mgdl_to_umol(inputs: &Inputs) -> Result<f64, DomainViolation> {
    Ok(number(inputs, "creatinine") * CREATININE_UMOL_PER_MGDL)
}

pub(super) fn weight_lb_to_kg(inputs: &Inputs) -> Result<f64, DomainViolation> {
    Ok(number(inputs, "weight_lb") * KG_PER_LB)
}

pub(super) fn temperature_f_to_c(inputs: &Inputs) -> Result<f64, DomainViolation> {
    Ok((number(inputs, "temperature_f") - 32.0) * 5.0 / 9.0)
}

use bedside_core::models::input::{number, Inputs};

use super::ratio;
use crate::error::DomainViolation;

pub(super) fn shock_index(inputs: &Inputs) -> Result<f64, DomainViolation> {
    ratio(
        number(inputs, "heart_rate"),
        number(inputs, "systolic_bp"),
        "Systolic blood pressure",
    )
}

pub(super) fn mean_arterial_pressure(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let systolic = number(inputs, "systolic_bp");
    let diastolic = number(inputs, "diastolic_bp");
    Ok((systolic + 2.0 * diastolic) / 3.0)
}

/// PaO₂ (mmHg) over FiO₂ expressed as a fraction.
pub(super) fn pf_ratio(inputs: &Inputs) -> Result<f64, DomainViolation> {
    ratio(number(inputs, "pao2"), number(inputs, "fio2"), "FiO₂")
}

/// Bazett: QTc = QT / √RR, with RR in seconds derived from heart rate.
pub(super) fn qtc_bazett(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let heart_rate = number(inputs, "heart_rate");
    if heart_rate <= 0.0 {
        return Err(DomainViolation::new("Heart rate must be greater than zero"));
    }
    let rr_seconds = 60.0 / heart_rate;
    Ok(number(inputs, "qt") / rr_seconds.sqrt())
}

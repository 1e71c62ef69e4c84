use bedside_core::models::input::{number, Inputs};

use crate::error::DomainViolation;

/// Holliday-Segar daily maintenance (mL/day): 100 mL/kg for the first
/// 10 kg, 50 mL/kg for the next 10 kg, 20 mL/kg beyond 20 kg.
pub(super) fn maintenance_daily(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let weight = number(inputs, "weight");
    Ok(match weight {
        w if w <= 10.0 => 100.0 * w,
        w if w <= 20.0 => 1000.0 + 50.0 * (w - 10.0),
        w => 1500.0 + 20.0 * (w - 20.0),
    })
}

/// The hourly 4-2-1 rule (mL/h).
pub(super) fn maintenance_hourly(inputs: &Inputs) -> Result<f64, DomainViolation> {
    let weight = number(inputs, "weight");
    Ok(match weight {
        w if w <= 10.0 => 4.0 * w,
        w if w <= 20.0 => 40.0 + 2.0 * (w - 10.0),
        w => 60.0 + (w - 20.0),
    })
}

/// Parkland burn resuscitation volume for the first 24 h (mL).
pub(super) fn parkland(inputs: &Inputs) -> Result<f64, DomainViolation> {
    Ok(4.0 * number(inputs, "weight") * number(inputs, "tbsa"))
}

//! Closed-form numeric formulas.
//!
//! Every FORMULA-modality score id maps to exactly one entry in [`FORMULAS`].
//! The catalog refuses to load a formula definition without one, so the
//! table doubles as the list of formulas this build knows how to evaluate.

mod anthropometrics;
mod chemistry;
mod conversions;
mod fluids;
mod hemodynamics;
mod hepatic;
mod lipids;
mod renal;

use bedside_core::models::input::Inputs;

use crate::definition::{FieldKind, InputField};
use crate::error::DomainViolation;

type EvalFn = fn(&Inputs) -> Result<f64, DomainViolation>;

/// A registered formula implementation.
pub struct Formula {
    pub id: &'static str,
    /// Decimal places kept in the returned value.
    pub decimals: u32,
    eval: EvalFn,
}

impl std::fmt::Debug for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formula")
            .field("id", &self.id)
            .field("decimals", &self.decimals)
            .finish()
    }
}

const fn formula(id: &'static str, decimals: u32, eval: EvalFn) -> Formula {
    Formula { id, decimals, eval }
}

static FORMULAS: &[Formula] = &[
    // Lipids
    formula("ldl_friedewald", 0, lipids::friedewald),
    formula("ldl_tg_adjusted", 0, lipids::tg_adjusted),
    formula("tc_hdl_ratio", 1, lipids::tc_hdl_ratio),
    // Renal
    formula("bun_creatinine_ratio", 0, renal::bun_creatinine_ratio),
    formula("cockcroft_gault", 0, renal::cockcroft_gault),
    formula("egfr_ckd_epi_2021", 0, renal::egfr_ckd_epi_2021),
    // Hepatic
    formula("meld", 0, hepatic::meld),
    // Hemodynamics and respiratory
    formula("shock_index", 2, hemodynamics::shock_index),
    formula("mean_arterial_pressure", 0, hemodynamics::mean_arterial_pressure),
    formula("pf_ratio", 0, hemodynamics::pf_ratio),
    formula("qtc_bazett", 0, hemodynamics::qtc_bazett),
    // Chemistry
    formula("corrected_calcium", 1, chemistry::corrected_calcium),
    formula("anion_gap", 0, chemistry::anion_gap),
    formula("corrected_sodium", 1, chemistry::corrected_sodium),
    // Body size and fluids
    formula("bmi", 1, anthropometrics::bmi),
    formula("maintenance_fluids_daily", 0, fluids::maintenance_daily),
    formula("maintenance_fluids_hourly", 0, fluids::maintenance_hourly),
    formula("parkland", 0, fluids::parkland),
    // Unit conversions
    formula("glucose_mgdl_to_mmol", 1, conversions::glucose_mgdl_to_mmol),
    formula("creatinine_mgdl_to_umol", 0, conversions::creatinine_mgdl_to_umol),
    formula("weight_lb_to_kg", 1, conversions::weight_lb_to_kg),
    formula("temperature_f_to_c", 1, conversions::temperature_f_to_c),
];

/// Look up the formula registered under a score id.
pub fn lookup(id: &str) -> Option<&'static Formula> {
    FORMULAS.iter().find(|f| f.id == id)
}

/// Ids of every registered formula, in table order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    FORMULAS.iter().map(|f| f.id)
}

/// Evaluate `formula` against the current inputs.
///
/// Supplied numeric values are checked against their field bounds first.
/// Fields the caller has not filled in are read as 0 and never rejected,
/// so a partially completed form still yields a provisional number.
pub fn evaluate(
    formula: &Formula,
    fields: &[InputField],
    inputs: &Inputs,
) -> Result<f64, DomainViolation> {
    for field in fields.iter().filter(|f| f.kind == FieldKind::Number) {
        if let Some(value) = inputs.get(&field.id) {
            check_bounds(field, value.as_number())?;
        }
    }

    let raw = (formula.eval)(inputs)?;
    // Scaling for rounding can overflow a finite raw value.
    let value = round_to(raw, formula.decimals);
    if !raw.is_finite() || !value.is_finite() {
        return Err(DomainViolation::new(
            "result is not a finite number for these inputs",
        ));
    }
    Ok(value)
}

/// Round to `decimals` places, nearest with ties away from zero on the
/// scaled binary value. A decimal tie with no exact binary form (such as
/// `1.005`) may round down. Never returns `-0.0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn check_bounds(field: &InputField, value: f64) -> Result<(), DomainViolation> {
    let below = field.min.is_some_and(|min| value < min);
    let above = field.max.is_some_and(|max| value > max);
    if !below && !above && !value.is_nan() {
        return Ok(());
    }

    let unit = field
        .unit
        .as_deref()
        .map(|u| format!(" {u}"))
        .unwrap_or_default();
    let reason = match (field.min, field.max) {
        (Some(min), Some(max)) => format!("{} must be between {min} and {max}{unit}", field.label),
        (Some(min), None) => format!("{} must be at least {min}{unit}", field.label),
        (None, Some(max)) => format!("{} must be at most {max}{unit}", field.label),
        (None, None) => format!("{} must be a number", field.label),
    };
    Err(DomainViolation::new(reason))
}

/// `numerator / denominator`, refusing a zero denominator instead of
/// producing infinity or NaN.
fn ratio(numerator: f64, denominator: f64, denominator_label: &str) -> Result<f64, DomainViolation> {
    if denominator == 0.0 {
        return Err(DomainViolation::new(format!(
            "{denominator_label} must not be zero"
        )));
    }
    Ok(numerator / denominator)
}

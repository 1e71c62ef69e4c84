//! Grouped single-select summation.

use bedside_core::models::input::{InputValue, Inputs};

use crate::definition::{Group, ScoreOption};

/// The option currently selected in `group`, if any.
///
/// The caller writes the zero-based ordinal of the chosen option under the
/// group id. Anything that does not name an option is treated as no
/// selection.
pub fn selected<'a>(group: &'a Group, inputs: &Inputs) -> Option<&'a ScoreOption> {
    let ordinal = match inputs.get(&group.id)? {
        InputValue::Number(n) if *n >= 0.0 && n.fract() == 0.0 => *n as usize,
        other => {
            tracing::debug!(group = %group.id, value = ?other, "ignoring non-ordinal selection");
            return None;
        }
    };
    let option = group.options.get(ordinal);
    if option.is_none() {
        tracing::debug!(group = %group.id, ordinal, "selection out of range");
    }
    option
}

/// Sum of selected option points. Unanswered groups contribute 0.
pub fn total(groups: &[Group], inputs: &Inputs) -> f64 {
    groups
        .iter()
        .filter_map(|group| selected(group, inputs))
        .fold(0.0, |acc, option| acc + option.points)
}

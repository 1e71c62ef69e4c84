use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single clinician-entered value: either a checkbox/toggle or a number.
///
/// Deserializes untagged, so JSON `true` becomes [`InputValue::Flag`] and
/// JSON `72.5` becomes [`InputValue::Number`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum InputValue {
    Flag(bool),
    Number(f64),
}

impl InputValue {
    /// Numeric view of the value. Flags read as 1 or 0.
    pub fn as_number(&self) -> f64 {
        match *self {
            InputValue::Flag(true) => 1.0,
            InputValue::Flag(false) => 0.0,
            InputValue::Number(n) => n,
        }
    }

    /// Whether the value marks its field as selected/checked.
    pub fn is_set(&self) -> bool {
        match *self {
            InputValue::Flag(b) => b,
            InputValue::Number(n) => n != 0.0,
        }
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Flag(b)
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

/// Current input state for one score, keyed by field id (criterion id,
/// group id, or formula input id).
pub type Inputs = HashMap<String, InputValue>;

/// Numeric value of a field, with an absent field reading as 0.
pub fn number(inputs: &Inputs, id: &str) -> f64 {
    inputs.get(id).map(InputValue::as_number).unwrap_or(0.0)
}

/// Whether a field is set, with an absent field reading as unset.
pub fn flag(inputs: &Inputs, id: &str) -> bool {
    inputs.get(id).is_some_and(InputValue::is_set)
}

//! Field edits
//!
//! Edits arrive as raw text from the front end. They are coerced, checked
//! against the active [`InputPolicy`] and applied to a copy of the inputs.

use serde::{Deserialize, Serialize};
use shared::{BudgetInputs, InputField};

use crate::error::{PlannerError, PlannerResult};

/// Smallest value the input form offers for numeric fields
pub const FIELD_MINIMUM: f64 = 1.0;

/// How out-of-range numeric edits are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Negative values are refused; zero is accepted
    #[default]
    Reject,
    /// Values below the form minimum are raised to it
    Clamp,
}

impl std::str::FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(InputPolicy::Reject),
            "clamp" => Ok(InputPolicy::Clamp),
            _ => Err(format!("Unknown input policy: {s}")),
        }
    }
}

/// A single edit to one input field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub field: InputField,
    pub value: String,
}

impl FieldEdit {
    pub fn new(field: InputField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// A coerced field value ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Count(u32),
    Amount(f64),
}

/// Parse a raw numeric string; empty and non-finite values are refused
pub fn parse_number(field: InputField, raw: &str) -> PlannerResult<f64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| PlannerError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Coerce raw text into a storable value without range policy
///
/// Used for share-link parameters, which are applied as given once they
/// parse.
pub fn coerce_value(field: InputField, raw: &str) -> PlannerResult<FieldValue> {
    if !field.is_numeric() {
        return Ok(FieldValue::Text(raw.to_string()));
    }
    let number = parse_number(field, raw)?;
    typed_value(field, number, raw)
}

/// Coerce raw text and apply the edit policy
pub fn coerce_edit(edit: &FieldEdit, policy: InputPolicy) -> PlannerResult<FieldValue> {
    let field = edit.field;
    if !field.is_numeric() {
        return Ok(FieldValue::Text(edit.value.clone()));
    }

    let number = parse_number(field, &edit.value)?;
    let number = match policy {
        InputPolicy::Reject if number < 0.0 => {
            return Err(PlannerError::NegativeValue {
                field: field.to_string(),
                value: edit.value.clone(),
            });
        }
        InputPolicy::Reject => number,
        InputPolicy::Clamp => number.max(FIELD_MINIMUM),
    };
    typed_value(field, number, &edit.value)
}

fn typed_value(field: InputField, number: f64, raw: &str) -> PlannerResult<FieldValue> {
    if !field.is_integer() {
        return Ok(FieldValue::Amount(number));
    }
    if number < 0.0 {
        return Err(PlannerError::NegativeValue {
            field: field.to_string(),
            value: raw.to_string(),
        });
    }
    if number.fract() != 0.0 || number > f64::from(u32::MAX) {
        return Err(PlannerError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(FieldValue::Count(number as u32))
}

/// Store a coerced value in its field
pub fn assign(inputs: &mut BudgetInputs, field: InputField, value: FieldValue) {
    match (field, value) {
        (InputField::Team, FieldValue::Text(text)) => inputs.team_name = text,
        (InputField::Players, FieldValue::Count(n)) => inputs.player_amount = n,
        (InputField::Coaches, FieldValue::Count(n)) => inputs.coach_amount = n,
        (InputField::IceCost, FieldValue::Amount(n)) => inputs.ice_cost_per_hour = n,
        (InputField::Hours, FieldValue::Amount(n)) => inputs.total_hours = n,
        // coerce_* always produces the variant matching the field
        (field, value) => unreachable!("{value:?} does not fit field {field}"),
    }
}

/// Apply an edit and return the resulting inputs
///
/// The original inputs are left untouched when the edit is refused.
pub fn apply_edit(inputs: &BudgetInputs, edit: &FieldEdit, policy: InputPolicy) -> PlannerResult<BudgetInputs> {
    let value = coerce_edit(edit, policy)?;
    let mut next = inputs.clone();
    assign(&mut next, edit.field, value);
    Ok(next)
}

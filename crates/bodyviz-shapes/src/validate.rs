//! The field validation rules shared by all descriptor kinds.

// Imports
use crate::color::{Color, ColorLookup};
use crate::ShapeError;
use serde_json::Value;
use tracing::{trace, warn};

/// Field name of the descriptor name.
pub const FIELD_NAME: &str = "name";
/// Field name of the descriptor color.
pub const FIELD_COLOR: &str = "color";
/// Field name of the descriptor kind.
pub const FIELD_TYPE: &str = "type";
/// Field name of the length.
pub const FIELD_LENGTH: &str = "length";
/// Field name of the radius.
pub const FIELD_RADIUS: &str = "radius";

fn rejected(field: &str, reason: String) -> ShapeError {
    warn!("Rejected value for field `{field}`: {reason}");
    ShapeError::invalid_argument(field, reason)
}

/// Numeric check for typed values. Only finite numbers are numeric.
pub fn number(field: &str, value: f64) -> Result<f64, ShapeError> {
    if !value.is_finite() {
        return Err(rejected(
            field,
            format!("expected a finite number, got {value}"),
        ));
    }
    Ok(value)
}

/// Text check for loosely typed values.
pub fn text_value<'a>(field: &str, value: &'a Value) -> Result<&'a str, ShapeError> {
    value
        .as_str()
        .ok_or_else(|| rejected(field, format!("expected text, got {}", type_of(value))))
}

/// Numeric check for loosely typed values.
pub fn number_value(field: &str, value: &Value) -> Result<f64, ShapeError> {
    match value {
        Value::Number(n) => {
            let n = n
                .as_f64()
                .ok_or_else(|| rejected(field, format!("number {n} is not representable")))?;
            number(field, n)
        }
        other => Err(rejected(
            field,
            format!("expected a number, got {}", type_of(other)),
        )),
    }
}

/// Resolve a color name through the lookup, reporting failures as invalid color arguments.
pub fn resolve_color(lookup: &dyn ColorLookup, name: &str) -> Result<Color, ShapeError> {
    let color = lookup
        .lookup(name)
        .map_err(|e| rejected(FIELD_COLOR, e.to_string()))?;
    trace!("Resolved color `{name}` to {color}");
    Ok(color)
}

/// The error for a field the descriptor kind doesn't have.
pub fn unknown_field(kind: &str, field: &str) -> ShapeError {
    rejected(field, format!("`{kind}` has no field `{field}`"))
}

fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

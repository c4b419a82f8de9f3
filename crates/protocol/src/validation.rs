//! Fruit Payload Validation Module
//!
//! This module turns untyped request bodies into a [`FruitInput`] before any
//! business logic sees them. Validation has no side effects and reports every
//! violated rule, not just the first one.

use serde_json::{Map, Value};

use crate::errors::ValidationError;
use crate::fruit::FruitInput;
use crate::Result;

/// Field holding the fruit's display name
pub const NAME_FIELD: &str = "name";

/// Field holding the fruit's price
pub const PRICE_FIELD: &str = "price";

/// Validate an already-parsed JSON value.
///
/// `name` must be a non-empty string and `price` a JSON number greater than
/// zero. Unknown fields are ignored.
pub fn validate_fruit(value: &Value) -> Result<FruitInput> {
    let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let mut reasons = Vec::new();
    let name = check_name(object, &mut reasons);
    let price = check_price(object, &mut reasons);

    match (name, price) {
        (Some(name), Some(price)) => Ok(FruitInput { name, price }),
        _ => Err(ValidationError::InvalidFields { reasons }),
    }
}

/// Validate a raw request body.
///
/// An empty (or whitespace-only) body is treated as `{}`.
pub fn validate_fruit_json(body: &[u8]) -> Result<FruitInput> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return validate_fruit(&Value::Object(Map::new()));
    }

    let value: Value = serde_json::from_slice(body)?;
    validate_fruit(&value)
}

fn check_name(object: &Map<String, Value>, reasons: &mut Vec<String>) -> Option<String> {
    match object.get(NAME_FIELD) {
        None | Some(Value::Null) => {
            reasons.push(format!("\"{NAME_FIELD}\" is required"));
            None
        }
        Some(Value::String(name)) if name.is_empty() => {
            reasons.push(format!("\"{NAME_FIELD}\" must not be empty"));
            None
        }
        Some(Value::String(name)) => Some(name.clone()),
        Some(_) => {
            reasons.push(format!("\"{NAME_FIELD}\" must be a string"));
            None
        }
    }
}

fn check_price(object: &Map<String, Value>, reasons: &mut Vec<String>) -> Option<f64> {
    match object.get(PRICE_FIELD) {
        None | Some(Value::Null) => {
            reasons.push(format!("\"{PRICE_FIELD}\" is required"));
            None
        }
        Some(Value::Number(number)) => match number.as_f64() {
            Some(price) if price > 0.0 => Some(price),
            _ => {
                reasons.push(format!("\"{PRICE_FIELD}\" must be a positive number"));
                None
            }
        },
        Some(_) => {
            reasons.push(format!("\"{PRICE_FIELD}\" must be a number"));
            None
        }
    }
}

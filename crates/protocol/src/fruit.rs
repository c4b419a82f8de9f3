//! Fruit record definitions.
//!
//! These types are produced by the store and serialized verbatim by the HTTP
//! adapters, so their serde shape is the wire format:
//! `{"id": 1, "name": "banana", "price": 3.5}`.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::MalformedIdError;

/// Identifier assigned to a fruit on insert. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FruitId(u64);

impl FruitId {
    /// The id given to the first fruit of an empty store.
    pub const FIRST: FruitId = FruitId(1);

    /// Wrap a raw id, rejecting zero.
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0).then_some(FruitId(raw))
    }

    /// The id that follows this one, or `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(FruitId)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FruitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FruitId {
    type Err = MalformedIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fruit_id(s)
    }
}

/// Parse a path segment as a fruit id.
///
/// Only plain ASCII digits are accepted: `"+1"`, `" 1"`, `"1.0"` and `"-1"`
/// are all rejected even though some of them would satisfy `u64::from_str`.
pub fn parse_fruit_id(raw: &str) -> Result<FruitId, MalformedIdError> {
    if raw.is_empty() {
        return Err(MalformedIdError::Empty);
    }

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedIdError::NotNumeric {
            raw: raw.to_string(),
        });
    }

    let value: u64 = raw.parse().map_err(|_| MalformedIdError::OutOfRange {
        raw: raw.to_string(),
    })?;

    FruitId::new(value).ok_or(MalformedIdError::Zero)
}

/// A validated payload, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FruitInput {
    /// Non-empty display name, unique across the store
    pub name: String,
    /// Strictly positive price
    pub price: f64,
}

/// A stored fruit record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fruit {
    /// Sequential identifier, starting at 1
    pub id: FruitId,
    /// Name as submitted
    pub name: String,
    /// Price as submitted
    pub price: f64,
}

impl Fruit {
    /// Build a record from a validated input and its assigned id.
    pub fn from_input(id: FruitId, input: FruitInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!(parse_fruit_id("1").unwrap().get(), 1);
        assert_eq!(parse_fruit_id("99999999").unwrap().get(), 99_999_999);
        assert_eq!(parse_fruit_id("007").unwrap().get(), 7);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            parse_fruit_id("batata"),
            Err(MalformedIdError::NotNumeric { .. })
        ));
        for raw in ["-1", "+1", "1.5", " 1", "1a"] {
            assert!(parse_fruit_id(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_parse_rejects_zero_empty_and_overflow() {
        assert_eq!(parse_fruit_id("0"), Err(MalformedIdError::Zero));
        assert_eq!(parse_fruit_id(""), Err(MalformedIdError::Empty));
        assert!(matches!(
            parse_fruit_id("99999999999999999999999"),
            Err(MalformedIdError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_fruit_serializes_to_flat_json() {
        let fruit = Fruit::from_input(
            FruitId::FIRST,
            FruitInput {
                name: "banana".to_string(),
                price: 3.5,
            },
        );

        let json = serde_json::to_value(&fruit).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "banana", "price": 3.5 })
        );
    }

    #[test]
    fn test_fruit_id_sequence() {
        assert_eq!(FruitId::FIRST.next(), FruitId::new(2));
        assert!(FruitId::new(0).is_none());
        assert!(FruitId::new(u64::MAX).unwrap().next().is_none());
    }
}

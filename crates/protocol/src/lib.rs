//! Fruitstand record types and payload validation
//!
//! This crate defines the fruit record shared by the store and the HTTP
//! adapters, the validator that turns untyped request bodies into a typed
//! [`FruitInput`], and the parsing rules for fruit identifiers.

pub mod errors;
pub mod fruit;
pub mod stats;
pub mod validation;

pub use errors::{MalformedIdError, ValidationError};
pub use fruit::{parse_fruit_id, Fruit, FruitId, FruitInput};
pub use stats::StoreStats;
pub use validation::{validate_fruit, validate_fruit_json};

/// Result type for payload validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Version of the fruit record wire format, reported by `/health`
pub const PROTOCOL_VERSION: &str = "0.1.0";

//! Shared store statistics.
//!
//! Reported by the repository and surfaced by the health endpoint.

use serde::Serialize;

use crate::fruit::FruitId;

/// Store statistics for monitoring and observability.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StoreStats {
    /// Number of fruits inserted since the last reset
    pub total_fruits: usize,
    /// Highest id issued since the last reset
    pub last_id: Option<FruitId>,
}

//! Fruit Repository Module
//!
//! Wraps the [`RecordStore`] with name uniqueness and lookup-by-id. A
//! successful `create` is the only way records are added, and it either
//! fully commits or leaves the store untouched.

use fruitstand_protocol::{Fruit, FruitId, FruitInput, StoreStats};
use thiserror::Error;
use tracing::debug;

use crate::records::RecordStore;

/// Repository-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Fruit already exists: {name}")]
    Conflict { name: String },

    #[error("Fruit not found: {id}")]
    NotFound { id: FruitId },

    #[error("No fruit ids left to assign")]
    IdsExhausted,
}

/// Access layer over the record store
#[derive(Debug, Default)]
pub struct FruitRepository {
    store: RecordStore,
}

impl FruitRepository {
    /// Create a repository over an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a validated fruit, rejecting duplicate names.
    pub fn create(&mut self, input: FruitInput) -> Result<Fruit, RepositoryError> {
        if self.store.find_by_name(&input.name).is_some() {
            return Err(RepositoryError::Conflict { name: input.name });
        }

        let fruit = self
            .store
            .append(input)
            .ok_or(RepositoryError::IdsExhausted)?;

        debug!(id = %fruit.id, name = %fruit.name, "fruit stored");
        Ok(fruit)
    }

    /// All fruits in insertion order
    pub fn list(&self) -> &[Fruit] {
        self.store.as_slice()
    }

    /// Look up a fruit by an already-parsed id
    pub fn get_by_id(&self, id: FruitId) -> Result<&Fruit, RepositoryError> {
        self.store
            .find_by_id(id)
            .ok_or(RepositoryError::NotFound { id })
    }

    /// Current store statistics
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_fruits: self.store.len(),
            last_id: self.store.iter().last().map(|fruit| fruit.id),
        }
    }

    /// Empty the store. Not part of the HTTP surface.
    pub fn reset(&mut self) {
        debug!(dropped = self.store.len(), "fruit store reset");
        self.store.clear();
    }
}

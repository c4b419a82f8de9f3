//! In-memory fruit record store and repository
//!
//! The [`RecordStore`] owns the ordered records and id assignment; the
//! [`FruitRepository`] layers name uniqueness and lookup-by-id on top.

pub mod records;
pub mod repository;

pub use records::RecordStore;
pub use repository::{FruitRepository, RepositoryError};

//! Record Store Module
//!
//! An ordered, append-only sequence of fruit records. Ids are assigned here
//! and are strictly increasing in insertion order until [`RecordStore::clear`].

use fruitstand_protocol::{Fruit, FruitId, FruitInput};

/// Ordered in-memory collection of fruit records
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Fruit>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next appended record will receive: current max + 1, or 1.
    ///
    /// Returns `None` once the id space is exhausted.
    pub fn next_id(&self) -> Option<FruitId> {
        match self.records.last() {
            Some(last) => last.id.next(),
            None => Some(FruitId::FIRST),
        }
    }

    /// Append a record built from `input`, returning a copy of it.
    ///
    /// Returns `None` without modifying the store if no id is left.
    pub fn append(&mut self, input: FruitInput) -> Option<Fruit> {
        let id = self.next_id()?;
        let fruit = Fruit::from_input(id, input);
        self.records.push(fruit.clone());
        Some(fruit)
    }

    /// Find a record by exact, case-sensitive name
    pub fn find_by_name(&self, name: &str) -> Option<&Fruit> {
        self.records.iter().find(|fruit| fruit.name == name)
    }

    /// Find a record by id
    pub fn find_by_id(&self, id: FruitId) -> Option<&Fruit> {
        // Ids are sorted, so a binary search is enough.
        self.records
            .binary_search_by_key(&id, |fruit| fruit.id)
            .ok()
            .map(|index| &self.records[index])
    }

    /// All records in insertion order
    pub fn as_slice(&self) -> &[Fruit] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fruit> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record. The next append restarts at id 1.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> FruitInput {
        FruitInput {
            name: name.to_string(),
            price: 1.0,
        }
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut store = RecordStore::new();
        assert_eq!(store.next_id(), Some(FruitId::FIRST));

        let first = store.append(input("apple")).unwrap();
        let second = store.append(input("pear")).unwrap();

        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_lookups() {
        let mut store = RecordStore::new();
        store.append(input("apple")).unwrap();
        store.append(input("pear")).unwrap();

        assert_eq!(store.find_by_name("pear").unwrap().id.get(), 2);
        assert!(store.find_by_name("Pear").is_none());
        assert_eq!(
            store.find_by_id(FruitId::FIRST).unwrap().name,
            "apple"
        );
        assert!(store.find_by_id(FruitId::new(3).unwrap()).is_none());
    }

    #[test]
    fn test_clear_restarts_ids() {
        let mut store = RecordStore::new();
        store.append(input("apple")).unwrap();
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.append(input("apple")).unwrap().id, FruitId::FIRST);
    }
}

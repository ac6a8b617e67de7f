use super::{DataStore, Record};
use crate::error::{Result, SisuError};
use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    tables: HashMap<TypeId, Box<dyn Any>>,
    next_ids: HashMap<TypeId, i64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table<R: Record>(&self) -> Option<&BTreeMap<i64, R>> {
        self.tables
            .get(&TypeId::of::<R>())
            .and_then(|t| t.downcast_ref::<BTreeMap<i64, R>>())
    }

    fn table_mut<R: Record>(&mut self) -> Result<&mut BTreeMap<i64, R>> {
        self.tables
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(BTreeMap::<i64, R>::new()))
            .downcast_mut::<BTreeMap<i64, R>>()
            .ok_or_else(|| SisuError::Api(format!("table {} holds another type", R::TABLE)))
    }
}

fn not_found<R: Record>(id: i64) -> SisuError {
    SisuError::NotFound {
        entity: R::SINGULAR,
        id,
    }
}

impl DataStore for InMemoryStore {
    fn list<R: Record>(&self) -> Result<Vec<R>> {
        Ok(self
            .table::<R>()
            .map(|t| t.values().cloned().collect())
            .unwrap_or_default())
    }

    fn find<R: Record>(&self, id: i64) -> Result<R> {
        self.table::<R>()
            .and_then(|t| t.get(&id))
            .cloned()
            .ok_or_else(|| not_found::<R>(id))
    }

    fn insert<R: Record>(&mut self, record: &mut R) -> Result<i64> {
        let next = self.next_ids.entry(TypeId::of::<R>()).or_insert(0);
        *next += 1;
        let id = *next;

        record.set_id(id);
        self.table_mut::<R>()?.insert(id, record.clone());
        Ok(id)
    }

    fn update<R: Record>(&mut self, record: &R) -> Result<()> {
        let table = self.table_mut::<R>()?;
        match table.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(())
            }
            None => Err(not_found::<R>(record.id())),
        }
    }

    fn delete<R: Record>(&mut self, id: i64) -> Result<()> {
        if self.table_mut::<R>()?.remove(&id).is_none() {
            return Err(not_found::<R>(id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Task;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Inserts tasks named "Task 1".."Task N", getting ids 1..N.
        pub fn with_tasks(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut task = Task::named(&format!("Task {}", i + 1));
                self.store.insert(&mut task).unwrap();
            }
            self
        }
    }
}

use std::{
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Instant,
};

use num_format::{Locale, ToFormattedString};

use crate::{
    consts::consts::PersonId,
    model::person::{Person, PersonInput},
    persistence::{snapshot::SnapshotManager, storage::StorageEngine},
};

use super::{
    options::DatabaseOptions,
    store::{PersonStore, StoreError, StoreResult},
    table::{
        query::{NamePredicate, PageRequest},
        table::PersonTable,
    },
};

/// The record store: an in-memory table, optionally snapshotted to storage after every mutation
pub struct Database {
    person_table: PersonTable,
    snapshot_manager: Option<SnapshotManager>,
    // Writers hold it across mutate, persist and rollback, readers share it
    commit_lock: RwLock<()>,
}

impl Database {
    pub fn new(options: DatabaseOptions) -> StoreResult<Self> {
        let snapshot_manager = options
            .storage_engine
            .get_engine()?
            .map(SnapshotManager::new);

        let database = Self {
            person_table: PersonTable::new(),
            snapshot_manager,
            commit_lock: RwLock::new(()),
        };

        if let StorageEngine::File(path) = &options.storage_engine {
            log::info!("Snapshot Location: [{}]", path.display());
        }

        if options.restore {
            database.restore()?;
        }

        Ok(database)
    }

    pub fn new_in_memory() -> Self {
        Self {
            person_table: PersonTable::new(),
            snapshot_manager: None,
            commit_lock: RwLock::new(()),
        }
    }

    fn read_lock(&self) -> StoreResult<RwLockReadGuard<'_, ()>> {
        self.commit_lock
            .read()
            .map_err(|e| StoreError::UnableToAcquireLock(e.to_string()))
    }

    fn write_lock(&self) -> StoreResult<RwLockWriteGuard<'_, ()>> {
        self.commit_lock
            .write()
            .map_err(|e| StoreError::UnableToAcquireLock(e.to_string()))
    }

    fn restore(&self) -> StoreResult<()> {
        let snapshot_manager = match &self.snapshot_manager {
            Some(snapshot_manager) => snapshot_manager,
            None => return Ok(()),
        };

        let now = Instant::now();

        let restored_rows = snapshot_manager.restore_snapshot(&self.person_table)?;

        log::info!(
            "✅ Successful Restore [Duration: {}ms]",
            now.elapsed().as_millis(),
        );

        log::info!(
            "📀 Data               [RowsFromSnapshot: {}]",
            restored_rows.to_formatted_string(&Locale::en)
        );

        Ok(())
    }

    fn persist(&self) -> StoreResult<()> {
        if let Some(snapshot_manager) = &self.snapshot_manager {
            snapshot_manager.create_snapshot(&self.person_table)?;
        }

        Ok(())
    }

    /// Persists the table, undoing the in-memory mutation if that fails
    fn commit<T>(&self, result: T, rollback: impl FnOnce(&PersonTable)) -> StoreResult<T> {
        match self.persist() {
            Ok(()) => Ok(result),
            Err(err) => {
                log::warn!("⚠️  Rolled back: [{}]", err);
                rollback(&self.person_table);
                Err(err)
            }
        }
    }
}

impl PersonStore for Database {
    fn add(&self, input: PersonInput) -> StoreResult<Person> {
        let _guard = self.write_lock()?;

        let person = self.person_table.add(input)?;
        let id = person.id;

        self.commit(person, |table| {
            let _ = table.remove(id);
        })
    }

    fn save(&self, person: Person) -> StoreResult<Person> {
        let _guard = self.write_lock()?;

        let previous = self.person_table.get(person.id);
        let person = self.person_table.save(person)?;
        let id = person.id;

        self.commit(person, |table| match previous {
            Some(previous) => {
                let _ = table.save(previous);
            }
            None => {
                let _ = table.remove(id);
            }
        })
    }

    fn find_by_id(&self, id: PersonId) -> StoreResult<Option<Person>> {
        let _guard = self.read_lock()?;

        Ok(self.person_table.get(id))
    }

    fn find_page(&self, request: &PageRequest) -> StoreResult<Vec<Person>> {
        let _guard = self.read_lock()?;

        self.person_table.list_page(request)
    }

    fn find_by_predicate(&self, predicate: &NamePredicate) -> StoreResult<Vec<Person>> {
        let _guard = self.read_lock()?;

        Ok(self.person_table.list_matching(predicate))
    }

    fn delete_by_id(&self, id: PersonId) -> StoreResult<()> {
        let _guard = self.write_lock()?;

        let removed = self.person_table.remove(id)?;

        self.commit((), |table| {
            let _ = table.save(removed);
        })
    }
}

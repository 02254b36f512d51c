use std::path::PathBuf;

use crate::persistence::storage::StorageEngine;

#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub restore: bool,
    pub storage_engine: StorageEngine,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    /// Defines whether we should attempt to restore the database from its last snapshot on startup
    pub fn set_restore(mut self, restore: bool) -> Self {
        self.restore = restore;
        self
    }

    pub fn set_storage_engine(mut self, storage_engine: StorageEngine) -> Self {
        self.storage_engine = storage_engine;
        self
    }

    /// Shorthand for a file storage engine rooted at `data_directory`
    pub fn set_data_directory(self, data_directory: PathBuf) -> Self {
        self.set_storage_engine(StorageEngine::File(data_directory))
    }
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            storage_engine: StorageEngine::Memory,
            restore: true,
        }
    }
}

#[cfg(test)]
impl DatabaseOptions {
    pub fn new_test_file() -> Self {
        let database_dir: PathBuf = [
            "/",
            "tmp",
            "person-service",
            &uuid::Uuid::new_v4().to_string(),
        ]
        .iter()
        .collect();

        DatabaseOptions::default().set_data_directory(database_dir)
    }
}

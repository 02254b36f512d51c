use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::database::table::table::{PersonTable, TableSnapshot};

use super::storage::{ReadBlobState, Storage, StorageError, StorageResult};

#[derive(Debug)]
enum FileType {
    Snapshot,
}

impl FileType {
    fn as_str(&self) -> &'static str {
        match self {
            FileType::Snapshot => "snapshot.json",
        }
    }
}

pub struct SnapshotManager {
    // Held for the whole read-table-then-write, so a later snapshot can never be overwritten by an older one
    storage: Mutex<Box<dyn Storage + Send + Sync>>,
}

impl SnapshotManager {
    pub fn new(storage: Box<dyn Storage + Send + Sync>) -> Self {
        Self {
            storage: Mutex::new(storage),
        }
    }

    /// Loads the last snapshot into the table, returns the number of rows restored
    #[tracing::instrument(skip(self, table))]
    pub fn restore_snapshot(&self, table: &PersonTable) -> StorageResult<usize> {
        let snapshot: TableSnapshot = self.read_file(FileType::Snapshot)?;

        Ok(table.restore_table(snapshot))
    }

    #[tracing::instrument(skip(self, table))]
    pub fn create_snapshot(&self, table: &PersonTable) -> StorageResult<()> {
        let storage = self
            .storage
            .lock()
            .map_err(|e| StorageError::UnableToWriteBlob(e.to_string()))?;

        let serialized_data = serde_json::to_vec(&table.to_snapshot())
            .map_err(|e| StorageError::UnableToSerialize(e.to_string()))?;

        storage.write_blob(FileType::Snapshot.as_str(), &serialized_data)
    }

    #[tracing::instrument(skip(self))]
    fn read_file<T: DeserializeOwned + Default>(&self, file_type: FileType) -> StorageResult<T> {
        let result = self
            .storage
            .lock()
            .map_err(|e| StorageError::UnableToReadBlob(e.to_string()))?
            .read_blob(file_type.as_str())?;

        match result {
            ReadBlobState::Found(file_contents) => serde_json::from_slice(&file_contents)
                .map_err(|e| StorageError::UnableToDeserialize(e.to_string())),
            ReadBlobState::NotFound => Ok(T::default()),
        }
    }
}

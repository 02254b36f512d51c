use std::path::PathBuf;

use thiserror::Error;

use crate::consts::consts::ErrorString;

pub mod file;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to initialize persistence: {0}")]
    UnableToInitializePersistence(ErrorString),

    #[error("Unable to read blob: {0}")]
    UnableToReadBlob(ErrorString),

    #[error("Unable to write blob: {0}")]
    UnableToWriteBlob(ErrorString),

    #[error("Unable to serialize snapshot: {0}")]
    UnableToSerialize(ErrorString),

    #[error("Unable to deserialize snapshot: {0}")]
    UnableToDeserialize(ErrorString),
}

pub type StorageResult<T> = Result<T, StorageError>;

pub enum ReadBlobState {
    Found(Vec<u8>),
    NotFound,
}

pub fn io_to_generic_error(error: std::io::Error) -> ErrorString {
    format!("{}", error)
}

/// Where the database keeps its data between restarts
#[derive(Debug, Clone, PartialEq)]
pub enum StorageEngine {
    /// Nothing is written, data is lost on shutdown
    Memory,
    /// Snapshot files inside the directory
    File(PathBuf),
}

impl StorageEngine {
    pub fn get_engine(&self) -> StorageResult<Option<Box<dyn Storage + Send + Sync>>> {
        match self {
            StorageEngine::Memory => Ok(None),
            StorageEngine::File(path) => Ok(Some(Box::new(file::FileStorage::new(path.clone())?))),
        }
    }
}

pub trait Storage {
    fn write_blob(&self, path: &str, bytes: &[u8]) -> StorageResult<()>;
    fn read_blob(&self, path: &str) -> StorageResult<ReadBlobState>;
    /// Called on database start-up, should be idempotent
    fn init(&self) -> StorageResult<()>;
}

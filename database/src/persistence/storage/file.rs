use std::{
    fs::{self, File, OpenOptions},
    io::{Read, Write},
    path::PathBuf,
};

use super::{io_to_generic_error, ReadBlobState, Storage, StorageError, StorageResult};

pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        let storage = Self { base_path };

        storage.init()?;

        Ok(storage)
    }

    fn get_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for FileStorage {
    /// Writes next to the target then renames, so a crash mid-write leaves the previous blob intact
    fn write_blob(&self, path: &str, bytes: &[u8]) -> StorageResult<()> {
        let temp_path = self.get_path(&format!("{}.tmp", path));

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StorageError::UnableToWriteBlob(io_to_generic_error(e)))?;

        file.write_all(bytes)
            .map_err(|e| StorageError::UnableToWriteBlob(io_to_generic_error(e)))?;

        file.sync_all()
            .map_err(|e| StorageError::UnableToWriteBlob(io_to_generic_error(e)))?;

        fs::rename(&temp_path, self.get_path(path))
            .map_err(|e| StorageError::UnableToWriteBlob(io_to_generic_error(e)))
    }

    fn read_blob(&self, path: &str) -> StorageResult<ReadBlobState> {
        let mut file = match File::open(self.get_path(path)) {
            Ok(file) => file,
            Err(err) => match err.kind() {
                std::io::ErrorKind::NotFound => return Ok(ReadBlobState::NotFound),
                _ => return Err(StorageError::UnableToReadBlob(io_to_generic_error(err))),
            },
        };

        let mut buf = Vec::new();

        file.read_to_end(&mut buf)
            .map_err(|e| StorageError::UnableToReadBlob(io_to_generic_error(e)))?;

        Ok(ReadBlobState::Found(buf))
    }

    fn init(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.base_path)
            .map_err(|e| StorageError::UnableToInitializePersistence(io_to_generic_error(e)))
    }
}

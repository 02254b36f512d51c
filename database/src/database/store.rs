use std::sync::Arc;

use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    model::person::{Person, PersonInput},
    persistence::storage::StorageError,
};

use super::table::query::{NamePredicate, PageRequest};

#[derive(Error, Debug)]
pub enum StoreError {
    // CRUD - DELETE
    #[error("Cannot delete, record does not exist: {0}")]
    CannotDeleteDoesNotExist(PersonId),

    // Constraints
    #[error("Cannot set field to blank: {0}")]
    NotBlankConstraintViolation(&'static str),

    // Queries
    #[error("Cannot sort by unknown field: {0}")]
    UnknownSortField(String),

    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    // CRUD - CREATE
    #[error("No ids left to assign, sequence is at {0}")]
    IdSequenceExhausted(PersonId),

    // Concurrency
    #[error("Unable to acquire commit lock: {0}")]
    UnableToAcquireLock(String),

    // Persistence
    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// The store's "absent by id" signal
    pub fn missing_id(&self) -> Option<PersonId> {
        match self {
            StoreError::CannotDeleteDoesNotExist(id) => Some(*id),
            _ => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Capabilities the person service needs from a record store. Each call is atomic on its own
pub trait PersonStore {
    /// Persists a new person and assigns its id
    fn add(&self, input: PersonInput) -> StoreResult<Person>;

    /// Writes a person under its existing id
    fn save(&self, person: Person) -> StoreResult<Person>;

    fn find_by_id(&self, id: PersonId) -> StoreResult<Option<Person>>;

    fn find_page(&self, request: &PageRequest) -> StoreResult<Vec<Person>>;

    fn find_by_predicate(&self, predicate: &NamePredicate) -> StoreResult<Vec<Person>>;

    /// Fails with `CannotDeleteDoesNotExist` when there was nothing to delete
    fn delete_by_id(&self, id: PersonId) -> StoreResult<()>;
}

impl<T: PersonStore + ?Sized> PersonStore for Arc<T> {
    fn add(&self, input: PersonInput) -> StoreResult<Person> {
        (**self).add(input)
    }

    fn save(&self, person: Person) -> StoreResult<Person> {
        (**self).save(person)
    }

    fn find_by_id(&self, id: PersonId) -> StoreResult<Option<Person>> {
        (**self).find_by_id(id)
    }

    fn find_page(&self, request: &PageRequest) -> StoreResult<Vec<Person>> {
        (**self).find_page(request)
    }

    fn find_by_predicate(&self, predicate: &NamePredicate) -> StoreResult<Vec<Person>> {
        (**self).find_by_predicate(predicate)
    }

    fn delete_by_id(&self, id: PersonId) -> StoreResult<()> {
        (**self).delete_by_id(id)
    }
}

use database::{
    consts::consts::PersonId,
    database::{store::PersonStore, table::query::PageRequest},
    model::person::{Person, PersonInput},
};

use crate::{
    error::{Failure, Operation, ServiceError, ServiceResult},
    search,
    timer::OperationTimer,
};

/// Entry point for everything the request boundary does with people.
///
/// Every operation makes one call to the store (two for `update`), and every store failure is
/// handed to [`ServiceError::translate`] so callers only ever see classified errors.
pub struct PersonService<S: PersonStore> {
    store: S,
}

impl<S: PersonStore> PersonService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stores a new person, the store assigns the id
    pub fn save(&self, input: PersonInput) -> ServiceResult<Person> {
        let op = Operation::Save;
        let _timer = OperationTimer::start(op);

        self.store
            .add(input)
            .map_err(|err| ServiceError::translate(op, err))
    }

    pub fn find_by_id(&self, id: PersonId) -> ServiceResult<Person> {
        let op = Operation::FindById;
        let _timer = OperationTimer::start(op);

        self.store
            .find_by_id(id)
            .map_err(|err| ServiceError::translate(op, err))?
            .ok_or_else(|| ServiceError::not_found(op, id))
    }

    /// One page of people, sorted ascending by `sort_field` (e.g. `id`, `firstName`).
    /// A page past the end is empty rather than an error
    pub fn find_all(
        &self,
        page: usize,
        page_size: usize,
        sort_field: &str,
    ) -> ServiceResult<Vec<Person>> {
        let op = Operation::FindAll;
        let _timer = OperationTimer::start(op);

        let request = PageRequest::parse(page, page_size, sort_field)
            .map_err(|err| ServiceError::translate(op, err))?;

        self.store
            .find_page(&request)
            .map_err(|err| ServiceError::translate(op, err))
    }

    pub fn find_all_by_name(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> ServiceResult<Vec<Person>> {
        let op = Operation::FindAllByName;
        let _timer = OperationTimer::start(op);

        let predicate = search::name_filter(first_name, last_name);

        self.store
            .find_by_predicate(&predicate)
            .map_err(|err| ServiceError::translate(op, err))
    }

    pub fn delete(&self, id: PersonId) -> ServiceResult<()> {
        let op = Operation::Delete;
        let _timer = OperationTimer::start(op);

        self.store
            .delete_by_id(id)
            .map_err(|err| ServiceError::translate(op, err))
    }

    /// Overwrites the four fields of an existing person, the id is kept
    pub fn update(&self, id: PersonId, input: PersonInput) -> ServiceResult<()> {
        let op = Operation::Update;
        let _timer = OperationTimer::start(op);

        self.replace(op, id, input)
            .map_err(|failure| ServiceError::translate(op, failure))
    }

    fn replace(&self, op: Operation, id: PersonId, input: PersonInput) -> Result<(), Failure> {
        let mut person = self
            .store
            .find_by_id(id)?
            .ok_or_else(|| ServiceError::not_found(op, id))?;

        person.apply(input);

        self.store.save(person)?;

        Ok(())
    }
}

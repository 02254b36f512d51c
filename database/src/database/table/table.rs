use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_skiplist::SkipMap;
use serde::{Deserialize, Serialize};

use crate::{
    consts::consts::PersonId,
    database::store::{StoreError, StoreResult},
    model::person::{Person, PersonInput},
};

use super::query::{self, NamePredicate, PageRequest};

/// Everything needed to rebuild a table, written to disk by the snapshot manager
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct TableSnapshot {
    pub next_id: Option<PersonId>,
    pub rows: Vec<Person>,
}

pub struct PersonTable {
    /// Ordered by id, so plain iteration gives the default ordering
    pub person_rows: SkipMap<PersonId, Person>,
    next_id: AtomicU64,
}

impl PersonTable {
    pub fn new() -> Self {
        Self {
            person_rows: SkipMap::new(),
            next_id: AtomicU64::new(PersonId::new_first_id().to_number()),
        }
    }

    // Each mutation can be broken up into 2 steps
    //  - Verifying validity / constraints (not blank)
    //  - Applying the mutation
    pub fn add(&self, input: PersonInput) -> StoreResult<Person> {
        check_not_blank(&input)?;

        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .map(PersonId)
            .map_err(|next| StoreError::IdSequenceExhausted(PersonId(next)))?;
        let person = Person::from_input(id, input);

        self.person_rows.insert(id, person.clone());

        Ok(person)
    }

    /// Upserts under the person's id. Ids above the sequence push the sequence forward
    pub fn save(&self, person: Person) -> StoreResult<Person> {
        check_not_blank(&person.to_input())?;

        self.next_id
            .fetch_max(person.id.increment().to_number(), Ordering::SeqCst);

        self.person_rows.insert(person.id, person.clone());

        Ok(person)
    }

    pub fn get(&self, id: PersonId) -> Option<Person> {
        self.person_rows.get(&id).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, id: PersonId) -> StoreResult<Person> {
        self.person_rows
            .remove(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::CannotDeleteDoesNotExist(id))
    }

    pub fn list_page(&self, request: &PageRequest) -> StoreResult<Vec<Person>> {
        if request.size == 0 {
            return Err(StoreError::InvalidPageSize);
        }

        Ok(query::page(query::query(self), request))
    }

    pub fn list_matching(&self, predicate: &NamePredicate) -> Vec<Person> {
        query::filter(query::query(self), predicate)
    }

    pub fn len(&self) -> usize {
        self.person_rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.person_rows.is_empty()
    }

    pub fn to_snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            next_id: Some(PersonId(self.next_id.load(Ordering::SeqCst))),
            rows: query::query(self),
        }
    }

    /// Replaces the table contents, returns the number of restored rows
    pub fn restore_table(&self, snapshot: TableSnapshot) -> usize {
        self.person_rows.clear();

        let restored = snapshot.rows.len();

        // The sequence can never be behind the largest stored id
        let largest_next = snapshot
            .rows
            .iter()
            .map(|person| person.id.increment())
            .max()
            .unwrap_or(PersonId::new_first_id());

        let next_id = snapshot
            .next_id
            .map_or(largest_next, |next_id| next_id.max(largest_next));

        for person in snapshot.rows {
            self.person_rows.insert(person.id, person);
        }

        self.next_id.store(next_id.to_number(), Ordering::SeqCst);

        restored
    }
}

impl Default for PersonTable {
    fn default() -> Self {
        Self::new()
    }
}

fn check_not_blank(input: &PersonInput) -> StoreResult<()> {
    let fields = [
        ("firstName", &input.first_name),
        ("lastName", &input.last_name),
        ("favouriteColour", &input.favourite_colour),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(StoreError::NotBlankConstraintViolation(name));
        }
    }

    Ok(())
}

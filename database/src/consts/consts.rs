use std::fmt::Display;

use serde::{Deserialize, Serialize};

// Types
pub type ErrorString = String;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
/// Surrogate key of a person, handed out by the table on the first save and never changed afterwards
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl PersonId {
    pub fn new_first_id() -> PersonId {
        FIRST_PERSON_ID
    }

    pub fn to_number(self) -> u64 {
        self.0
    }

    /// Stops at `u64::MAX`, the table refuses to hand out ids past it
    pub fn increment(&self) -> PersonId {
        PersonId(self.0.saturating_add(1))
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Values
pub const FIRST_PERSON_ID: PersonId = PersonId(1);
pub const DEFAULT_PAGE_SIZE: usize = 10;

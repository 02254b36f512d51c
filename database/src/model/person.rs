use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

/// A stored person. Only the table creates these, so a `Person` always carries an id
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub favourite_colour: String,
}

/// The four writable fields of a person, used both to create a new person and to overwrite an existing one
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PersonInput {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub favourite_colour: String,
}

impl Person {
    pub fn from_input(id: PersonId, input: PersonInput) -> Self {
        Person {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            age: input.age,
            favourite_colour: input.favourite_colour,
        }
    }

    /// Replaces every field except the id
    pub fn apply(&mut self, input: PersonInput) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.age = input.age;
        self.favourite_colour = input.favourite_colour;
    }

    pub fn to_input(&self) -> PersonInput {
        PersonInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            favourite_colour: self.favourite_colour.clone(),
        }
    }
}

impl PersonInput {
    pub fn new(first_name: &str, last_name: &str, age: i32, favourite_colour: &str) -> Self {
        PersonInput {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            favourite_colour: favourite_colour.to_string(),
        }
    }

    pub fn new_test() -> Self {
        PersonInput::new("Saurav", "Singh", 30, "Black")
    }
}

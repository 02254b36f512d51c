use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{
    consts::consts::DEFAULT_PAGE_SIZE,
    database::store::{StoreError, StoreResult},
    model::person::Person,
};

use super::table::PersonTable;

const WILDCARD: &str = "%";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameField {
    FirstName,
    LastName,
}

impl NameField {
    fn value<'a>(&self, person: &'a Person) -> &'a str {
        match self {
            NameField::FirstName => &person.first_name,
            NameField::LastName => &person.last_name,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// `term%`
    Prefix,
    /// `%term%`
    Contains,
}

/// One arm of a name search. A branch without a term never matches, so it drops out of the OR
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchBranch {
    pub field: NameField,
    pub mode: MatchMode,
    /// Always stored lower-cased
    pub term: Option<String>,
}

impl SearchBranch {
    pub fn new(field: NameField, mode: MatchMode, term: Option<&str>) -> Self {
        SearchBranch {
            field,
            mode,
            term: term.map(|t| t.to_lowercase()),
        }
    }

    /// Renders the branch as a LIKE pattern, e.g. `sau%` or `%sau%`
    pub fn pattern(&self) -> Option<String> {
        let term = self.term.as_ref()?;

        let pattern = match self.mode {
            MatchMode::Prefix => format!("{}{}", term, WILDCARD),
            MatchMode::Contains => format!("{}{}{}", WILDCARD, term, WILDCARD),
        };

        Some(pattern)
    }

    pub fn matches(&self, person: &Person) -> bool {
        let term = match &self.term {
            Some(term) => term,
            None => return false,
        };

        let value = self.field.value(person).to_lowercase();

        match self.mode {
            MatchMode::Prefix => value.starts_with(term.as_str()),
            MatchMode::Contains => value.contains(term.as_str()),
        }
    }
}

/// OR of search branches. An empty OR (or one where every branch lacks a term) matches nothing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NamePredicate {
    pub branches: Vec<SearchBranch>,
}

impl NamePredicate {
    pub fn any_of(branches: Vec<SearchBranch>) -> Self {
        NamePredicate { branches }
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.branches.iter().any(|branch| branch.matches(person))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    FirstName,
    LastName,
    Age,
    FavouriteColour,
}

impl SortField {
    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::FirstName => a.first_name.cmp(&b.first_name),
            SortField::LastName => a.last_name.cmp(&b.last_name),
            SortField::Age => a.age.cmp(&b.age),
            SortField::FavouriteColour => a.favourite_colour.cmp(&b.favourite_colour),
        }
    }
}

/// Zero based page index, page size and ascending sort field
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: SortField,
}

impl PageRequest {
    pub fn of(page: usize, size: usize, sort: SortField) -> Self {
        PageRequest { page, size, sort }
    }

    /// Builds a request from the sort field's name, e.g. `firstName`
    pub fn parse(page: usize, size: usize, sort: &str) -> StoreResult<Self> {
        let sort = SortField::from_str(sort)
            .map_err(|_| StoreError::UnknownSortField(sort.to_string()))?;

        Ok(PageRequest::of(page, size, sort))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::of(0, DEFAULT_PAGE_SIZE, SortField::Id)
    }
}

/// All rows in id order
#[tracing::instrument(skip(table))]
pub fn query(table: &PersonTable) -> Vec<Person> {
    table
        .person_rows
        .iter()
        .map(|entry| entry.value().clone())
        .collect()
}

#[tracing::instrument(skip(people))]
pub fn filter(people: Vec<Person>, predicate: &NamePredicate) -> Vec<Person> {
    people
        .into_iter()
        .filter(|person| predicate.matches(person))
        .collect()
}

/// Sorts then slices. Ties keep the incoming (id) order because the sort is stable
#[tracing::instrument(skip(people))]
pub fn page(mut people: Vec<Person>, request: &PageRequest) -> Vec<Person> {
    people.sort_by(|a, b| request.sort.compare(a, b));

    people
        .into_iter()
        .skip(request.page.saturating_mul(request.size))
        .take(request.size)
        .collect()
}

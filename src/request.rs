use database::{consts::consts::DEFAULT_PAGE_SIZE, model::person::PersonInput};
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

pub const FIRST_NAME_EMPTY: &str = "Person first name can't be empty.";
pub const LAST_NAME_EMPTY: &str = "Person last name can't be empty.";
pub const AGE_EMPTY: &str = "Person age can't be empty.";
pub const FAVOURITE_COLOUR_EMPTY: &str = "Person favourite colour can't be empty.";
pub const PAGE_SIZE_ZERO: &str = "Page size must be greater than zero.";

/// Inbound create / update payload. Every field is optional here so that missing ones can be
/// reported together instead of failing on the first
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PersonRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub favourite_colour: Option<String>,
}

impl PersonRequest {
    pub fn validate(self) -> ServiceResult<PersonInput> {
        let mut errors = vec![];

        let first_name = not_blank(self.first_name, FIRST_NAME_EMPTY, &mut errors);
        let last_name = not_blank(self.last_name, LAST_NAME_EMPTY, &mut errors);
        let age = present(self.age, AGE_EMPTY, &mut errors);
        let favourite_colour =
            not_blank(self.favourite_colour, FAVOURITE_COLOUR_EMPTY, &mut errors);

        match (first_name, last_name, age, favourite_colour) {
            (Some(first_name), Some(last_name), Some(age), Some(favourite_colour)) => {
                Ok(PersonInput {
                    first_name,
                    last_name,
                    age,
                    favourite_colour,
                })
            }
            _ => {
                log::warn!("Rejected person request: {:?}", errors);
                Err(ServiceError::Validation(errors))
            }
        }
    }
}

fn present<T>(value: Option<T>, message: &str, errors: &mut Vec<String>) -> Option<T> {
    if value.is_none() {
        errors.push(message.to_string());
    }

    value
}

fn not_blank(value: Option<String>, message: &str, errors: &mut Vec<String>) -> Option<String> {
    present(value.filter(|v| !v.trim().is_empty()), message, errors)
}

/// `?pageNo=0&pageSize=10&sortBy=id`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default)]
    pub page_no: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    "id".to_string()
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_no: 0,
            page_size: default_page_size(),
            sort_by: default_sort_by(),
        }
    }
}

impl PageQuery {
    pub fn validate(&self) -> ServiceResult<()> {
        if self.page_size == 0 {
            return Err(ServiceError::Validation(vec![PAGE_SIZE_ZERO.to_string()]));
        }

        Ok(())
    }
}

/// `?firstName=..&lastName=..`, both optional
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> PersonRequest {
        PersonRequest {
            first_name: Some("Saurav".to_string()),
            last_name: Some("Singh".to_string()),
            age: Some(30),
            favourite_colour: Some("Black".to_string()),
        }
    }

    fn validation_errors(result: ServiceResult<PersonInput>) -> Vec<String> {
        match result {
            Err(ServiceError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn complete_request_becomes_input() {
        assert_eq!(full_request().validate().unwrap(), PersonInput::new_test());
    }

    #[test]
    fn request_uses_snake_case_keys() {
        let request: PersonRequest = serde_json::from_str(
            r#"{"first_name":"Saurav","last_name":"Singh","age":30,"favourite_colour":"Black"}"#,
        )
        .unwrap();

        assert_eq!(request, full_request());
    }

    #[test]
    fn every_missing_field_is_reported_in_order() {
        let errors = validation_errors(PersonRequest::default().validate());

        assert_eq!(
            errors,
            vec![
                FIRST_NAME_EMPTY,
                LAST_NAME_EMPTY,
                AGE_EMPTY,
                FAVOURITE_COLOUR_EMPTY
            ]
        );
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let request = PersonRequest {
            last_name: Some("   ".to_string()),
            ..full_request()
        };

        assert_eq!(validation_errors(request.validate()), vec![LAST_NAME_EMPTY]);
    }

    #[test]
    fn page_query_defaults() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();

        assert_eq!(query, PageQuery::default());
        assert_eq!(query.page_size, 10);
        assert_eq!(query.sort_by, "id");
        assert!(query.validate().is_ok());
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let query = PageQuery {
            page_size: 0,
            ..PageQuery::default()
        };

        assert!(matches!(
            query.validate(),
            Err(ServiceError::Validation(errors)) if errors == vec![PAGE_SIZE_ZERO]
        ));
    }
}

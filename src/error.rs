use database::{consts::consts::PersonId, database::store::StoreError};
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

/// Names the service operation an error came from. Displays as `save`, `findById`, etc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum Operation {
    Save,
    FindById,
    FindAll,
    FindAllByName,
    Delete,
    Update,
}

impl Operation {
    /// Caller facing text for an internal failure, never includes the cause
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Save => "Failed to save person.",
            Operation::FindById => "Failed to find person.",
            Operation::FindAll => "Failed to find all person for page request.",
            Operation::FindAllByName => "Failed to search person.",
            Operation::Delete => "Failed to delete person.",
            Operation::Update => "Failed to update person.",
        }
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Raised by the request boundary only, one message per bad field
    #[error("One or more field is invalid: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("No person found with id {id}")]
    NotFound { op: Operation, id: PersonId },

    #[error("{} {}", .op.failure_message(), .cause)]
    Internal {
        op: Operation,
        #[source]
        cause: StoreError,
    },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Anything that can reach the translator: a raw store failure or an error that is already classified
#[derive(Debug)]
pub enum Failure {
    Store(StoreError),
    Classified(ServiceError),
}

impl From<StoreError> for Failure {
    fn from(err: StoreError) -> Self {
        Failure::Store(err)
    }
}

impl From<ServiceError> for Failure {
    fn from(err: ServiceError) -> Self {
        Failure::Classified(err)
    }
}

impl ServiceError {
    /// Classifies a failure for `op`. Classified errors come back untouched, whatever `op` is
    pub fn translate(op: Operation, failure: impl Into<Failure>) -> ServiceError {
        let cause = match failure.into() {
            Failure::Classified(err) => return err,
            Failure::Store(cause) => cause,
        };

        match cause.missing_id() {
            Some(id) => ServiceError::not_found(op, id),
            None => {
                log::error!("❌ [{}] {}. Cause: {}", op, op.failure_message(), cause);

                ServiceError::Internal { op, cause }
            }
        }
    }

    pub fn not_found(op: Operation, id: PersonId) -> ServiceError {
        log::warn!("[{}] No person found with id {}", op, id);

        ServiceError::NotFound { op, id }
    }

    /// Operation the error is tagged with, validation errors come from the boundary and have none
    pub fn op(&self) -> Option<Operation> {
        match self {
            ServiceError::Validation(_) => None,
            ServiceError::NotFound { op, .. } | ServiceError::Internal { op, .. } => Some(*op),
        }
    }
}

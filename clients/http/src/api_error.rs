use actix_web::{
    error::{BlockingError, JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, ResponseError,
};
use person_service::error::ServiceError;
use serde::Serialize;
use thiserror::Error;

const INVALID_FIELDS: &str = "One or more field is invalid";

/// JSON body of every error response
#[derive(Serialize, Debug)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Body, query or path that could not be parsed at all
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Worker pool failure: {0}")]
    Blocking(String),
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        ApiError::Blocking(err.to_string())
    }
}

impl ApiError {
    fn body(&self) -> ApiErrorBody {
        let status = self.status_code().as_u16();

        match self {
            ApiError::Service(ServiceError::Validation(errors)) => ApiErrorBody {
                status,
                message: INVALID_FIELDS.to_string(),
                source: None,
                errors: errors.clone(),
            },
            ApiError::Service(err @ ServiceError::NotFound { .. }) => ApiErrorBody {
                status,
                message: err.to_string(),
                source: err.op().map(|op| op.to_string()),
                errors: vec![],
            },
            ApiError::Service(ServiceError::Internal { op, .. }) => ApiErrorBody {
                status,
                message: op.failure_message().to_string(),
                source: Some(op.to_string()),
                errors: vec![],
            },
            ApiError::Malformed(message) => ApiErrorBody {
                status,
                message: INVALID_FIELDS.to_string(),
                source: None,
                errors: vec![message.clone()],
            },
            ApiError::Blocking(_) => ApiErrorBody {
                status,
                message: self.to_string(),
                source: None,
                errors: vec![],
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::Validation(_)) | ApiError::Malformed(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Service(ServiceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::Internal { .. }) | ApiError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _: &HttpRequest| {
        ApiError::Malformed(err.to_string()).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _: &HttpRequest| {
        ApiError::Malformed(err.to_string()).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _: &HttpRequest| {
        ApiError::Malformed(err.to_string()).into()
    })
}

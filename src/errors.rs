use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::JsonResponse;

#[derive(Debug)]
pub enum ApiError {
    InvalidIdentifier,
    InvalidSort,
    InvalidOrder,
    InvalidVoteDelta,
    MissingFields(&'static str),
    NotFound(&'static str),
    ReferentialIntegrity,
    AlreadyExists(&'static str),
    InvalidCredentials,
    MissingToken,
    InvalidToken,
    ServerError,
    DatabaseError(sqlx::Error),
}

#[derive(serde::Serialize)]
pub struct ErrorBody {
    msg: String,
}

impl ErrorBody {
    pub fn new(msg: &str) -> ErrorBody {
        ErrorBody {
            msg: msg.to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(value: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &value {
            if db_error.message().contains("FOREIGN KEY constraint failed") {
                return Self::ReferentialIntegrity;
            }
        }
        Self::DatabaseError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl ApiError {
    pub fn to_json_response(&self) -> JsonResponse<ErrorBody> {
        let (status_code, json) = match self {
            ApiError::InvalidIdentifier => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Invalid ID Bad Request"),
            ),
            ApiError::InvalidSort => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Invalid sort_by query"),
            ),
            ApiError::InvalidOrder => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Invalid order query"),
            ),
            ApiError::InvalidVoteDelta => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Bad Request inc_votes must be a number"),
            ),
            ApiError::MissingFields(message) => (StatusCode::BAD_REQUEST, ErrorBody::new(message)),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorBody::new(message)),
            ApiError::ReferentialIntegrity => (StatusCode::NOT_FOUND, ErrorBody::new("Not Found")),
            ApiError::AlreadyExists(message) => (StatusCode::BAD_REQUEST, ErrorBody::new(message)),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("Invalid Credentials"),
            ),
            ApiError::MissingToken => {
                (StatusCode::UNAUTHORIZED, ErrorBody::new("No token provided"))
            }
            ApiError::InvalidToken => (StatusCode::FORBIDDEN, ErrorBody::new("Invalid token!")),
            ApiError::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("Internal Server Error"),
            ),
            ApiError::DatabaseError(e) => {
                eprintln!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal Server Error"),
                )
            }
        };
        (status_code, Json(json))
    }
}

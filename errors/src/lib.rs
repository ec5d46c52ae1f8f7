#[macro_use]
extern crate log;

use actix_web::{
    error::{BlockingError, ResponseError},
    http::StatusCode,
    HttpResponse,
};
use derive_more::Display;
use diesel::result::Error as DBError;
use r2d2::Error as PoolError;
use serde::{Deserialize, Serialize};

pub const GAME_FULL: &str = "Game is full";
const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    BadRequest(String),
    #[display(fmt = "{}", GAME_FULL)]
    GameFull,
    InternalServerError(String),
    NotFound(String),
    PoolError(String),
    BlockingError(String),
}

// Body of every non-2xx response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) | Error::GameFull => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::BadRequest(message) | Error::NotFound(message) => {
                HttpResponse::build(self.status_code()).json(ErrorResponse::from(message))
            }
            Error::GameFull => HttpResponse::BadRequest().json(ErrorResponse::from(GAME_FULL)),
            _ => HttpResponse::InternalServerError()
                .json(ErrorResponse::from(INTERNAL_SERVER_ERROR)),
        }
    }
}

impl From<&str> for ErrorResponse {
    fn from(error: &str) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}

impl From<&String> for ErrorResponse {
    fn from(error: &String) -> Self {
        ErrorResponse {
            error: error.clone(),
        }
    }
}

// Storage failures keep their detail in the log, not in the response body
impl From<DBError> for Error {
    fn from(error: DBError) -> Error {
        match error {
            DBError::NotFound => Error::NotFound("Record not found".into()),
            _ => {
                error!("Database error - {}", error);
                Error::InternalServerError(error.to_string())
            }
        }
    }
}

impl From<PoolError> for Error {
    fn from(error: PoolError) -> Error {
        error!("Failed to get connection - {}", error);
        Error::PoolError(error.to_string())
    }
}

impl From<BlockingError> for Error {
    fn from(error: BlockingError) -> Error {
        error!("Blocking task failed - {}", error);
        Error::BlockingError("Thread blocking error".into())
    }
}

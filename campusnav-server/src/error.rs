use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Startup failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Routing(#[from] campusnav::Error),
}

/// Request failures
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing building id")]
    MissingBuildingId,

    #[error("No route between {from} and {to}")]
    NoRoute { from: String, to: String },

    #[error("Internal error: {0}")]
    InternalError(#[from] campusnav::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingBuildingId => StatusCode::BAD_REQUEST,
            AppError::NoRoute { .. } => StatusCode::NOT_FOUND,
            AppError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

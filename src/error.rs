//! Error handling

use axum::response::IntoResponse;
use tracing::info;

/// definitions for the studio application.
#[derive(Debug)]
pub enum StudioError {
    /// When you didn't do the right thing
    BadRequest,
    /// When a requested resource is not found
    NotFound(String),
    /// When an internal server error occurs
    InternalServerError(String),
}

impl From<axum::http::Error> for StudioError {
    fn from(err: axum::http::Error) -> Self {
        StudioError::InternalServerError(err.to_string())
    }
}

impl IntoResponse for StudioError {
    fn into_response(self) -> axum::response::Response {
        match self {
            StudioError::BadRequest => {
                info!("Bad request received");
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Bad Request"));
                *response.status_mut() = axum::http::StatusCode::BAD_REQUEST;
                response
            }
            StudioError::NotFound(what) => {
                info!("404 {what}");
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Not Found"));
                *response.status_mut() = axum::http::StatusCode::NOT_FOUND;
                response
            }
            StudioError::InternalServerError(message) => {
                tracing::error!("Internal server error: {}", message);
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Internal server error"));
                *response.status_mut() = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
        }
    }
}

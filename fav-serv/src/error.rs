use crate::lookup::LookupError;
use crate::models::ErrorBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::Display;

pub type Result<T> = core::result::Result<T, Error>;

const INTERNAL_ERROR: &str = "An internal server error occurred.";

#[derive(Debug)]
pub enum Error {
    Lookup(LookupError),
    /// The server started without `RIOT_API_KEY`
    MissingApiKey,
    Validation(String),
    FavoriteConflict(String),
    FavoriteNotFound(String),
    Store(fav_db::error::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lookup(e) => Some(e),
            Error::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LookupError> for Error {
    fn from(e: LookupError) -> Self {
        Error::Lookup(e)
    }
}

impl From<fav_db::error::Error> for Error {
    fn from(e: fav_db::error::Error) -> Self {
        match e {
            fav_db::error::Error::Conflict(puuid) => Error::FavoriteConflict(puuid),
            fav_db::error::Error::Validation(msg) => Error::Validation(msg),
            other => Error::Store(other),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Error::Lookup(e) => return e.fmt(f),
            Error::MissingApiKey => "RIOT_API_KEY is not configured on the server.",
            Error::Validation(e) => return e.fmt(f),
            Error::FavoriteConflict(_) => "Player is already in favorites.",
            Error::FavoriteNotFound(_) => "Favorite not found.",
            Error::Store(_) => INTERNAL_ERROR,
        };
        write!(f, "{}", msg)
    }
}

impl Error {
    fn details(&self) -> Option<String> {
        match self {
            Error::Lookup(LookupError::UpstreamFailure { detail, .. }) => Some(detail.clone()),
            Error::FavoriteConflict(puuid) | Error::FavoriteNotFound(puuid) => {
                Some(format!("puuid: {}", puuid))
            }
            _ => None,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Lookup(LookupError::InvalidFormat) => StatusCode::BAD_REQUEST,
            Error::Lookup(LookupError::PlayerNotFound) => StatusCode::NOT_FOUND,
            Error::Lookup(LookupError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            // a 404 past account resolution must not read as "player not found"
            Error::Lookup(LookupError::UpstreamFailure { status, .. }) => status
                .filter(|s| *s != 404)
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            Error::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::FavoriteConflict(_) => StatusCode::CONFLICT,
            Error::FavoriteNotFound(_) => StatusCode::NOT_FOUND,
            Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            Error::Store(e) => tracing::error!("favorites store error: {}", e),
            Error::Lookup(e @ LookupError::UpstreamFailure { .. })
            | Error::Lookup(e @ LookupError::Timeout) => {
                tracing::error!(status = status.as_u16(), "upstream error: {:?}", e)
            }
            _ => {}
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.to_string(),
            details: self.details(),
        })
    }
}

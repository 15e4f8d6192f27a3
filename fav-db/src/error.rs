use std::fmt::Display;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Sqlx(sqlx::Error),
    /// A favorite with this puuid already exists
    Conflict(String),
    Validation(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Sqlx(e) => Some(e),
            _ => None,
        }
    }
}
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Self::Sqlx(err)
    }
}
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Sqlx(e) => write!(f, "Database error: {}", e),
            Error::Conflict(puuid) => write!(f, "Player {} is already a favorite", puuid),
            Error::Validation(e) => write!(f, "{}", e),
        }
    }
}

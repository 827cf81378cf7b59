use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    Validation(String),

    #[error("Riot API error: {status} - {body}")]
    RemoteLookup { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid cluster: {0}")]
    InvalidCluster(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error comes from a call to the Riot API, either a non-success
    /// status or a transport failure.
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, Error::RemoteLookup { .. } | Error::Http(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

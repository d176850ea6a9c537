use thiserror::Error;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "Session token is missing.";
pub const INVALID_PARAMETERS_MESSAGE: &str = "Invalid search parameters.";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Please log in again.";
pub const SERVER_ERROR_MESSAGE: &str = "Failed to submit search. Please try again later.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Terminal failure of a single search submission. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("session token is missing")]
    MissingCredential,
    #[error("search rejected by backend with status {status}")]
    ClientError { status: u16 },
    #[error("search failed on backend with status {status}")]
    ServerError { status: u16 },
    #[error("no response from search backend: {0}")]
    Network(String),
}

impl SubmissionError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 401 => Self::ClientError { status },
            _ => Self::ServerError { status },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ClientError { status } | Self::ServerError { status } => Some(*status),
            Self::MissingCredential | Self::Network(_) => None,
        }
    }

    /// Text shown to the user in the failure toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            Self::ClientError { status: 400 } => INVALID_PARAMETERS_MESSAGE,
            Self::ClientError { status: 401 } => UNAUTHORIZED_MESSAGE,
            Self::ClientError { .. } | Self::ServerError { .. } => SERVER_ERROR_MESSAGE,
            Self::Network(_) => NETWORK_ERROR_MESSAGE,
        }
    }

    pub fn requires_reauth(&self) -> bool {
        matches!(self, Self::ClientError { status: 401 })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown search field '{0}'")]
    UnknownField(String),
    #[error("invalid direction '{0}': expected import or export")]
    InvalidDirection(String),
    #[error("search field '{0}' cannot be edited")]
    ReadOnlyField(&'static str),
}

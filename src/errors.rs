use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Construction-time validation failures. None of these is recoverable
/// locally: a silently wrong identity or API endpoint is a security and
/// availability risk, so the caller must refuse to proceed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("field '{field}' is not a usable absolute URL: {detail}")]
    InvalidUrl {
        field: &'static str,
        detail: String,
    },
    #[error("field '{0}' still contains an unresolved REPLACE_ placeholder")]
    PlaceholderValue(&'static str),
    #[error("scopes must be a non-empty list of non-empty entries including 'openid'")]
    EmptyScopes,
}

impl Error {
    /// The camelCase wire name of the offending field, when the failure
    /// concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match *self {
            Error::MissingField(field) => Some(field),
            Error::InvalidUrl { field, .. } => Some(field),
            Error::PlaceholderValue(field) => Some(field),
            Error::EmptyScopes => None,
        }
    }
}

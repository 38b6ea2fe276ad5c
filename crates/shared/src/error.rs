#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    User(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl Error {
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User(_) | Self::Validate(_))
    }
}

#[macro_export]
macro_rules! user {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::User(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::User(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::User(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        return Err($crate::Error::NotFound(format!($fmt $(, $arg)*)))
    };
}

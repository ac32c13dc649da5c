use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudNameError {
    #[error("Invalid name '{name}'")]
    InvalidName { name: String },

    #[error("Illegal empty string for {field}")]
    EmptyField { field: &'static str },

    #[error("Illegal characters in {field} '{value}' (use alphanumeric characters only)")]
    IllegalCharacters { field: &'static str, value: String },

    #[error("{field} '{value}' uses a reserved push version or labeled variable format")]
    ReservedFormat { field: &'static str, value: String },

    #[error("Invalid label {key} must be one of {expected}")]
    UnknownLabel { key: String, expected: String },

    #[error("Invalid shard: {0}")]
    InvalidShard(String),

    #[error("Grammar error: {0}")]
    Grammar(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type CloudNameResult<T> = Result<T, CloudNameError>;

impl CloudNameError {
    pub fn invalid_name<S: Into<String>>(name: S) -> Self {
        CloudNameError::InvalidName { name: name.into() }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        CloudNameError::Config(message.into())
    }
}

impl From<regex::Error> for CloudNameError {
    fn from(err: regex::Error) -> Self {
        CloudNameError::Grammar(err.to_string())
    }
}

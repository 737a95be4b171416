use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Parameter file error: {0}")]
    ParamFileError(#[from] toml::de::Error),

    #[error("Report formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown exercise: {title}")]
    UnknownExercise { title: String },
}

pub type Result<T> = std::result::Result<T, QueryError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagFieldError {
    #[error("Tag not found: {0}")]
    UnknownTag(String),

    #[error("Reordering is not enabled for this field")]
    NotReorderable,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid delimiter: {0:?} (expected \"enter\", \"tab\", \"space\" or a single character)")]
    InvalidDelimiter(String),

    #[error("Invalid color: {0:?} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, TagFieldError>;

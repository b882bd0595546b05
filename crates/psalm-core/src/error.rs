use std::fmt;

#[derive(Debug)]
pub enum ContentError {
    Toml(toml::de::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Toml(e) => write!(f, "TOML content error: {e}"),
            ContentError::Json(e) => write!(f, "JSON content error: {e}"),
            ContentError::Invalid(msg) => write!(f, "invalid content: {msg}"),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Toml(e) => Some(e),
            ContentError::Json(e) => Some(e),
            ContentError::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ContentError {
    fn from(e: toml::de::Error) -> Self {
        ContentError::Toml(e)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        ContentError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

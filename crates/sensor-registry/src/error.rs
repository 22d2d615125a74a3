use thiserror::Error;

pub type Result<T, E = RegistryError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("snapshot has no gps block")]
    MissingGps,
    #[error("snapshot has no sensors list")]
    MissingSensors,
    #[error("malformed sensor reading at index {index}: {reason}")]
    MalformedReading { index: usize, reason: &'static str },
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("invalid snapshot: {0}")]
    Json(String),
}

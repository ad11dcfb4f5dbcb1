#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown profile `{0}`")]
    UnknownProfile(String),

    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

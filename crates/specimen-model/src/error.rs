use specimen_codec::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid specimen id: {0:?}")]
    InvalidSpecimenId(String),
    #[error("unknown specimen state: {0}")]
    UnknownState(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, ModelError>;

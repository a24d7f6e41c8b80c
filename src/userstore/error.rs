use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What was being decoded when a [`StoreError::Decode`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeTarget {
    /// The record set held by the backing store
    Records,
    /// The `--item` payload given to `add`
    Item,
}

impl fmt::Display for DecodeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeTarget::Records => write!(f, "stored records"),
            DecodeTarget::Item => write!(f, "item"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("--fileName flag has to be specified")]
    MissingFileName,

    #[error("--operation flag has to be specified")]
    MissingOperation,

    #[error("--operation flag does not exist: {0}")]
    UnknownOperation(String),

    #[error("--item flag has to be specified")]
    MissingItem,

    #[error("--id flag has to be specified")]
    MissingId,

    #[error("Item with id {0} not found")]
    NotFound(String),

    #[error("error while decoding {target}: {source}")]
    Decode {
        target: DecodeTarget,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not lock {}: {source}", .path.display())]
    Locked {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn decode(target: DecodeTarget, source: serde_json::Error) -> Self {
        StoreError::Decode { target, source }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

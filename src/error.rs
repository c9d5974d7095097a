use thiserror::Error;

use crate::types::ad::{AdId, PictureId};

#[derive(Error, Debug)]
pub enum AdScoreError {
    #[error("picture not found: {0}")]
    PictureNotFound(PictureId),

    #[error("failed to score ad {ad}: {source}")]
    AdScoring {
        ad: AdId,
        #[source]
        source: Box<AdScoreError>,
    },

    #[error("duplicate picture id in data file: {0}")]
    DuplicatePicture(PictureId),

    #[error("data file not found: {0}")]
    DataFile(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid reference instant: {0}")]
    InvalidReferenceInstant(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdScoreError {
    /// Picture id behind a lookup failure, looking through per-ad wrapping.
    pub fn missing_picture(&self) -> Option<PictureId> {
        match self {
            Self::PictureNotFound(id) => Some(*id),
            Self::AdScoring { source, .. } => source.missing_picture(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdScoreError>;

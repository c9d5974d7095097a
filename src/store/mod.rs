pub mod file;

use crate::error::{AdScoreError, Result};
use crate::types::ad::{Ad, Picture, PictureId};
use std::collections::HashMap;

pub use file::FileStore;

/// Supplies the batch of ads for a scoring pass.
pub trait AdSource {
    fn ads(&self) -> Result<Vec<Ad>>;
}

/// Resolves picture ids referenced by ads.
///
/// Shared read-only across ad scorings, so implementations must be
/// `Send + Sync`. Fails with `AdScoreError::PictureNotFound` when the id is
/// unknown.
pub trait PictureLookup: Send + Sync {
    fn picture_by_id(&self, id: PictureId) -> Result<Picture>;
}

impl PictureLookup for HashMap<PictureId, Picture> {
    fn picture_by_id(&self, id: PictureId) -> Result<Picture> {
        self.get(&id)
            .cloned()
            .ok_or(AdScoreError::PictureNotFound(id))
    }
}

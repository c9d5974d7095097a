use crate::error::Result;
use crate::store::PictureLookup;
use crate::types::ad::PictureId;

const NO_PICTURES_PENALTY: i32 = -10;
const HD_PICTURE_POINTS: i32 = 20;
const SD_PICTURE_POINTS: i32 = 10;

/// Repeated ids are counted once per occurrence.
pub fn photos_score(pictures: &[PictureId], lookup: &dyn PictureLookup) -> Result<i32> {
    if pictures.is_empty() {
        return Ok(NO_PICTURES_PENALTY);
    }

    let mut score = 0;
    for id in pictures {
        let picture = lookup.picture_by_id(*id)?;
        score += if picture.is_high_resolution() {
            HD_PICTURE_POINTS
        } else {
            SD_PICTURE_POINTS
        };
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdScoreError;
    use crate::types::ad::Picture;
    use std::collections::HashMap;

    fn pictures() -> HashMap<PictureId, Picture> {
        [
            Picture::new(1, "http://www.idealista.com/pictures/1", "SD"),
            Picture::new(2, "http://www.idealista.com/pictures/2", "HD"),
            Picture::new(3, "http://www.idealista.com/pictures/3", "hd"),
        ]
        .into_iter()
        .map(|picture| (picture.id, picture))
        .collect()
    }

    #[test]
    fn empty_picture_list_is_penalised() {
        assert_eq!(photos_score(&[], &pictures()).expect("score"), -10);
    }

    #[test]
    fn hd_and_sd_pictures_score_differently() {
        assert_eq!(photos_score(&[1], &pictures()).expect("score"), 10);
        assert_eq!(photos_score(&[2], &pictures()).expect("score"), 20);
        assert_eq!(photos_score(&[1, 2, 3], &pictures()).expect("score"), 50);
    }

    #[test]
    fn duplicate_ids_count_per_occurrence() {
        assert_eq!(photos_score(&[2, 2, 2], &pictures()).expect("score"), 60);
    }

    #[test]
    fn unknown_picture_propagates_not_found() {
        let err = photos_score(&[1, 42], &pictures()).expect_err("lookup should fail");
        assert!(matches!(err, AdScoreError::PictureNotFound(42)));
    }
}

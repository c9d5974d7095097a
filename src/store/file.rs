use crate::error::{AdScoreError, Result};
use crate::store::{AdSource, PictureLookup};
use crate::types::ad::{Ad, Picture, PictureId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DataFile {
    #[serde(default)]
    ads: Vec<Ad>,
    #[serde(default)]
    pictures: Vec<Picture>,
}

/// Ads and pictures loaded from a single JSON data file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    raw: Vec<u8>,
    ads: Vec<Ad>,
    pictures: Vec<Picture>,
    index: HashMap<PictureId, usize>,
}

impl FileStore {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AdScoreError::DataFile(path.display().to_string()));
        }
        let raw = fs::read(path)?;
        let data: DataFile = serde_json::from_slice(&raw)?;

        let mut index = HashMap::with_capacity(data.pictures.len());
        for (position, picture) in data.pictures.iter().enumerate() {
            if index.insert(picture.id, position).is_some() {
                return Err(AdScoreError::DuplicatePicture(picture.id));
            }
        }

        debug!(
            path = %path.display(),
            ads = data.ads.len(),
            pictures = data.pictures.len(),
            "loaded data file"
        );

        Ok(Self {
            path: path.to_path_buf(),
            raw,
            ads: data.ads,
            pictures: data.pictures,
            index,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents exactly as read, used for cache keys.
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Rewrite the data file with `ads`, keeping the picture table as loaded.
    pub fn save_ads(&self, ads: &[Ad]) -> Result<()> {
        let data = DataFile {
            ads: ads.to_vec(),
            pictures: self.pictures.clone(),
        };
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, json).map_err(AdScoreError::Io)?;
        debug!(path = %self.path.display(), ads = ads.len(), "saved ads");
        Ok(())
    }
}

impl AdSource for FileStore {
    fn ads(&self) -> Result<Vec<Ad>> {
        Ok(self.ads.clone())
    }
}

impl PictureLookup for FileStore {
    fn picture_by_id(&self, id: PictureId) -> Result<Picture> {
        self.index
            .get(&id)
            .map(|position| self.pictures[*position].clone())
            .ok_or(AdScoreError::PictureNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ad::Typology;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
{
  "ads": [
    {"id": 1, "typology": "FLAT", "description": "Luminoso", "pictures": [2], "houseSize": 80},
    {"id": 2, "typology": "GARAGE", "pictures": [], "houseSize": 15, "gardenSize": null}
  ],
  "pictures": [
    {"id": 2, "url": "http://www.idealista.com/pictures/2", "quality": "HD"}
  ]
}
"#;

    #[test]
    fn load_reads_ads_and_pictures() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("data.json");
        fs::write(&path, SAMPLE).expect("data file should write");

        let store = FileStore::load(&path).expect("store should load");
        let ads = store.ads().expect("ads should list");
        assert_eq!(ads.len(), 2);
        assert_eq!(ads[1].typology, Typology::Garage);
        assert!(ads[1].description.is_empty());
        assert_eq!(ads[0].house_size, Some(80));

        let picture = store.picture_by_id(2).expect("picture should resolve");
        assert!(picture.is_high_resolution());
    }

    #[test]
    fn picture_lookup_reports_missing_ids() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("data.json");
        fs::write(&path, SAMPLE).expect("data file should write");

        let store = FileStore::load(&path).expect("store should load");
        let err = store.picture_by_id(99).expect_err("lookup should fail");
        assert!(matches!(err, AdScoreError::PictureNotFound(99)));
    }

    #[test]
    fn load_rejects_duplicate_picture_ids() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"{"ads": [], "pictures": [
                {"id": 1, "url": "a", "quality": "SD"},
                {"id": 1, "url": "b", "quality": "HD"}
            ]}"#,
        )
        .expect("data file should write");

        let err = FileStore::load(&path).expect_err("load should fail");
        assert!(matches!(err, AdScoreError::DuplicatePicture(1)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = FileStore::load(&dir.path().join("missing.json")).expect_err("load should fail");
        assert!(err.to_string().contains("data file not found"));
    }

    #[test]
    fn save_ads_keeps_picture_table() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("data.json");
        fs::write(&path, SAMPLE).expect("data file should write");

        let store = FileStore::load(&path).expect("store should load");
        let mut ads = store.ads().expect("ads should list");
        ads[0].score = Some(55);
        store.save_ads(&ads).expect("save should succeed");

        let reloaded = FileStore::load(&path).expect("store should reload");
        assert_eq!(reloaded.ads().expect("ads should list")[0].score, Some(55));
        assert!(reloaded.picture_by_id(2).is_ok());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::scoring::Score;

pub type AdId = u64;
pub type PictureId = u64;

/// Kind of property an ad describes.
///
/// Anything outside the recognised set is kept verbatim in `Other` so it
/// round-trips through the data file unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Typology {
    Flat,
    Chalet,
    Garage,
    Other(String),
}

impl Typology {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Flat => "FLAT",
            Self::Chalet => "CHALET",
            Self::Garage => "GARAGE",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Typology {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "FLAT" => Self::Flat,
            "CHALET" => Self::Chalet,
            "GARAGE" => Self::Garage,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Typology {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Typology> for String {
    fn from(typology: Typology) -> Self {
        match typology {
            Typology::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Typology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: AdId,
    pub typology: Typology,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pictures: Vec<PictureId>,
    #[serde(default)]
    pub house_size: Option<i64>,
    #[serde(default)]
    pub garden_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrelevant_since: Option<NaiveDate>,
}

#[cfg(test)]
impl Ad {
    pub fn new(id: AdId, typology: impl Into<Typology>) -> Self {
        Self {
            id,
            typology: typology.into(),
            description: String::new(),
            pictures: Vec::new(),
            house_size: None,
            garden_size: None,
            score: None,
            irrelevant_since: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_pictures(mut self, pictures: Vec<PictureId>) -> Self {
        self.pictures = pictures;
        self
    }

    pub fn with_house_size(mut self, size: i64) -> Self {
        self.house_size = Some(size);
        self
    }

    pub fn with_garden_size(mut self, size: i64) -> Self {
        self.garden_size = Some(size);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub id: PictureId,
    pub url: String,
    pub quality: String,
}

impl Picture {
    #[cfg(test)]
    pub fn new(id: PictureId, url: impl Into<String>, quality: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            quality: quality.into(),
        }
    }

    pub fn is_high_resolution(&self) -> bool {
        self.quality.eq_ignore_ascii_case("HD")
    }
}

/// Snapshot of an ad after a scoring pass. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredAd {
    pub id: AdId,
    pub typology: Typology,
    pub description: String,
    pub pictures: Vec<PictureId>,
    pub house_size: Option<i64>,
    pub garden_size: Option<i64>,
    pub score: Score,
    pub irrelevant_since: Option<NaiveDate>,
}

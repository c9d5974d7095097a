use crate::clock::{parse_timezone, DEFAULT_TIMEZONE};
use crate::error::AdScoreError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdScoreConfig {
    pub scoring: Option<ScoringConfig>,
    pub cache: Option<CacheConfig>,
}

/// What a scoring pass does with an ad whose picture cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPicturePolicy {
    #[default]
    Abort,
    Skip,
}

impl MissingPicturePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub timezone: Option<String>,
    pub on_missing_picture: Option<MissingPicturePolicy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    pub dir: Option<String>,
}

fn default_cache_enabled() -> bool {
    true
}

pub const DEFAULT_CACHE_DIR: &str = ".adscore/cache";

impl AdScoreConfig {
    pub fn timezone_name(&self) -> &str {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.timezone.as_deref())
            .unwrap_or(DEFAULT_TIMEZONE)
    }

    pub fn timezone(&self) -> Result<Tz, AdScoreError> {
        parse_timezone(self.timezone_name())
    }

    pub fn missing_picture_policy(&self) -> MissingPicturePolicy {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.on_missing_picture)
            .unwrap_or_default()
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.as_ref().map(|cache| cache.enabled).unwrap_or(true)
    }

    pub fn cache_dir(&self) -> &str {
        self.cache
            .as_ref()
            .and_then(|cache| cache.dir.as_deref())
            .unwrap_or(DEFAULT_CACHE_DIR)
    }

    pub fn validate(&self) -> Result<(), AdScoreError> {
        self.timezone()?;

        if self.cache_dir().trim().is_empty() {
            return Err(AdScoreError::ConfigParse(
                "cache.dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

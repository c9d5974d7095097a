pub mod json;
pub mod md;

use crate::error::AdScoreError;
use crate::types::ad::ScoredAd;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    title: &str,
    ads: &[ScoredAd],
    format: OutputFormat,
) -> Result<String, AdScoreError> {
    match format {
        OutputFormat::Json => json::to_json(ads).map_err(AdScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(title, ads)),
    }
}

use crate::types::ad::ScoredAd;

pub fn to_json(ads: &[ScoredAd]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ads)
}

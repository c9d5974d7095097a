use crate::types::ad::ScoredAd;
use crate::types::scoring::RELEVANCE_THRESHOLD;

/// Ads at or above the relevance threshold, best first.
pub fn relevant_view(batch: &[ScoredAd]) -> Vec<ScoredAd> {
    project(batch, |scored| scored.score >= RELEVANCE_THRESHOLD)
}

/// Ads that need improvement, best first.
pub fn quality_view(batch: &[ScoredAd]) -> Vec<ScoredAd> {
    project(batch, |scored| scored.score < RELEVANCE_THRESHOLD)
}

// Stable sort: equal scores keep their input order.
fn project(batch: &[ScoredAd], keep: impl Fn(&ScoredAd) -> bool) -> Vec<ScoredAd> {
    let mut view: Vec<ScoredAd> = batch
        .iter()
        .filter(|&scored| keep(scored))
        .cloned()
        .collect();
    view.sort_by(|a, b| b.score.cmp(&a.score));
    view
}

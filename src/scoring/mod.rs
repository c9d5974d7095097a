pub mod completeness;
pub mod description;
pub mod keywords;
pub mod photos;

use crate::clock::{self, Clock};
use crate::error::{AdScoreError, Result};
use crate::store::PictureLookup;
use crate::types::ad::{Ad, AdId, PictureId, ScoredAd};
use crate::types::config::MissingPicturePolicy;
use crate::types::scoring::ScoreBreakdown;
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Ad left out of a pass because one of its pictures did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedAd {
    pub ad: AdId,
    pub picture: PictureId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassOutcome {
    /// One entry per scored ad, in input order.
    pub scored: Vec<ScoredAd>,
    pub skipped: Vec<SkippedAd>,
}

pub fn score_breakdown(ad: &Ad, lookup: &dyn PictureLookup) -> Result<ScoreBreakdown> {
    let photos = photos::photos_score(&ad.pictures, lookup)?;
    let description = description::description_score(&ad.description, &ad.typology);
    let keywords = keywords::keywords_score(&ad.description);
    let completeness = completeness::completeness_score(ad);
    Ok(ScoreBreakdown::new(
        photos,
        description,
        keywords,
        completeness,
    ))
}

/// Score one ad and write the derived fields back onto it.
///
/// `irrelevant_date` is stamped only when the ad ends below the relevance
/// threshold. A relevant ad keeps whatever `irrelevant_since` it already had;
/// only its snapshot reports none.
pub fn score_ad(
    ad: &mut Ad,
    lookup: &dyn PictureLookup,
    irrelevant_date: NaiveDate,
) -> Result<ScoredAd> {
    let breakdown = score_breakdown(ad, lookup).map_err(|source| AdScoreError::AdScoring {
        ad: ad.id,
        source: Box::new(source),
    })?;
    debug!(
        ad = ad.id,
        typology = %ad.typology,
        photos = breakdown.photos,
        description = breakdown.description,
        keywords = breakdown.keywords,
        completeness = breakdown.completeness,
        total = breakdown.total,
        "scored ad"
    );

    ad.score = Some(breakdown.total);
    let irrelevant_since = if breakdown.is_relevant() {
        None
    } else {
        ad.irrelevant_since = Some(irrelevant_date);
        Some(irrelevant_date)
    };

    Ok(ScoredAd {
        id: ad.id,
        typology: ad.typology.clone(),
        description: ad.description.clone(),
        pictures: ad.pictures.clone(),
        house_size: ad.house_size,
        garden_size: ad.garden_size,
        score: breakdown.total,
        irrelevant_since,
    })
}

/// Run a full scoring pass. The reference instant is read once, so every ad
/// in the batch shares the same irrelevance date.
pub fn score_batch(
    ads: &mut [Ad],
    lookup: &dyn PictureLookup,
    clock: &dyn Clock,
    tz: Tz,
    policy: MissingPicturePolicy,
) -> Result<PassOutcome> {
    let reference = clock.now();
    let irrelevant_date = clock::irrelevant_since(reference, tz)?;
    info!(
        ads = ads.len(),
        reference = %reference.to_rfc3339(),
        timezone = %tz,
        "starting scoring pass"
    );

    let mut outcome = PassOutcome::default();
    for ad in ads.iter_mut() {
        match score_ad(ad, lookup, irrelevant_date) {
            Ok(scored) => outcome.scored.push(scored),
            Err(err) => match (policy, err.missing_picture()) {
                (MissingPicturePolicy::Skip, Some(picture)) => {
                    debug!(ad = ad.id, picture, "skipping ad with unresolved picture");
                    outcome.skipped.push(SkippedAd { ad: ad.id, picture });
                }
                _ => return Err(err),
            },
        }
    }

    info!(
        scored = outcome.scored.len(),
        skipped = outcome.skipped.len(),
        "scoring pass finished"
    );
    Ok(outcome)
}

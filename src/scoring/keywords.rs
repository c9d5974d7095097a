use crate::normalize::{normalize, normalize_all};

pub const KEYWORDS: [&str; 5] = ["Luminoso", "Nuevo", "Céntrico", "Reformado", "Ático"];

const POINTS_PER_OCCURRENCE: i32 = 5;

/// Five points per non-overlapping occurrence of each keyword, uncapped.
pub fn keywords_score(description: &str) -> i32 {
    if description.is_empty() {
        return 0;
    }

    let text = normalize(description);
    normalize_all(&KEYWORDS)
        .iter()
        .map(|keyword| text.matches(keyword.as_str()).count())
        .map(|occurrences| i32::try_from(occurrences).unwrap_or(i32::MAX))
        .fold(0i32, |score, occurrences| {
            score.saturating_add(occurrences.saturating_mul(POINTS_PER_OCCURRENCE))
        })
}

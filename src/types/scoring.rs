pub type Score = u8;

pub const MAX_SCORE: i32 = 100;
pub const RELEVANCE_THRESHOLD: Score = 40;

/// Sub-score contributions for one ad. The total is already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub photos: i32,
    pub description: i32,
    pub keywords: i32,
    pub completeness: i32,
    pub total: Score,
}

impl ScoreBreakdown {
    pub fn new(photos: i32, description: i32, keywords: i32, completeness: i32) -> Self {
        Self {
            photos,
            description,
            keywords,
            completeness,
            total: 0,
        }
        .finalize()
    }

    pub fn raw_sum(&self) -> i32 {
        self.photos
            .saturating_add(self.description)
            .saturating_add(self.keywords)
            .saturating_add(self.completeness)
    }

    fn finalize(mut self) -> Self {
        let clamped = self.raw_sum().clamp(0, MAX_SCORE);
        self.total = Score::try_from(clamped).unwrap_or(Score::MAX);
        self
    }

    pub fn is_relevant(&self) -> bool {
        self.total >= RELEVANCE_THRESHOLD
    }
}

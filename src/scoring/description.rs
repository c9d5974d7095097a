use crate::normalize::{normalize, word_count};
use crate::types::ad::Typology;

const HAS_DESCRIPTION_POINTS: i32 = 5;

pub fn description_score(description: &str, typology: &Typology) -> i32 {
    if description.is_empty() {
        return 0;
    }

    let words = word_count(&normalize(description));
    HAS_DESCRIPTION_POINTS + length_bonus(typology, words)
}

fn length_bonus(typology: &Typology, words: usize) -> i32 {
    match typology {
        Typology::Flat => match words {
            20..=49 => 10,
            50.. => 30,
            _ => 0,
        },
        Typology::Chalet if words > 50 => 20,
        _ => 0,
    }
}

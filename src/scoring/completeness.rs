use crate::types::ad::{Ad, Typology};

const COMPLETENESS_BONUS: i32 = 40;

/// All-or-nothing bonus for ads carrying every field their typology needs.
pub fn completeness_score(ad: &Ad) -> i32 {
    if is_complete(ad) {
        COMPLETENESS_BONUS
    } else {
        0
    }
}

fn is_complete(ad: &Ad) -> bool {
    let has_house_size = ad.house_size.map(|size| size > 0).unwrap_or(false);

    if ad.typology == Typology::Garage {
        return !ad.pictures.is_empty() && has_house_size;
    }
    if ad.description.is_empty() || ad.pictures.is_empty() {
        return false;
    }

    match ad.typology {
        Typology::Flat => has_house_size,
        Typology::Chalet => ad.house_size.is_some() && ad.garden_size.is_some(),
        _ => false,
    }
}

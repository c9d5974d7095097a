use crate::types::ad::ScoredAd;

pub fn to_markdown(title: &str, ads: &[ScoredAd]) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {title}\n\n"));

    if ads.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| id | typology | score | pictures | house | garden | irrelevant since |\n");
    output.push_str("|---:|---|---:|---:|---:|---:|---|\n");
    for ad in ads {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            ad.id,
            ad.typology,
            ad.score,
            ad.pictures.len(),
            optional(ad.house_size),
            optional(ad.garden_size),
            ad.irrelevant_since
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ));
    }

    output
}

fn optional(value: Option<i64>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "-".to_string())
}

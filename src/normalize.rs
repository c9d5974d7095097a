/// Fold accented vowels, `ñ`, `ç` and `ª` to their plain letter and lower-case
/// the rest. Combining diacritics are dropped, so decomposed input folds the
/// same as precomposed input. Normalizing twice gives the same string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        for lower in ch.to_lowercase() {
            if !is_combining_mark(lower) {
                out.push(fold(lower));
            }
        }
    }
    out
}

/// Sequence form of [`normalize`]; preserves order and length.
pub fn normalize_all<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|text| normalize(text.as_ref())).collect()
}

/// Number of maximal runs of alphanumeric characters.
pub fn word_count(text: &str) -> usize {
    text.split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .count()
}

fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}')
}

fn fold(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ä' | 'ª' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

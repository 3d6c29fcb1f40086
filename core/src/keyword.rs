use lazy_static::lazy_static;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref ENGLISH_NOISE: Vec<&'static str> = vec![
        "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
        "be","because","been","before","being","below","between","both","but","by",
        "can","cannot","could",
        "did","do","does","doing","down","during",
        "each","few","for","from","further",
        "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
        "i","if","in","into","is","it","its","itself",
        "me","more","most","my","myself",
        "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
        "same","she","should","so","some","such",
        "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
        "under","until","up","very",
        "was","we","were","what","when","where","which","while","who","whom","why","with","would",
        "you","your","yours","yourself","yourselves"
    ];
}

/// Words excluded from indexing. Stored lower-cased; fixed for the lifetime of a build.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    /// Built-in English stop-word list, used when no noise-word file is supplied.
    pub fn default_english() -> Self {
        ENGLISH_NOISE.iter().copied().collect()
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { words }
    }
}

/// Turns a raw whitespace-delimited token into a keyword.
///
/// Punctuation is stripped from the tail only. What remains must be all letters,
/// otherwise the token is rejected outright. Survivors are lower-cased and checked
/// against the noise words.
pub fn normalize(raw: &str, noise: &NoiseWords) -> Option<String> {
    // fold first: lower-casing may emit combining marks that are not letters
    let folded: String = raw.to_lowercase().nfc().collect();
    let word = folded.trim_end_matches(|c: char| !c.is_alphabetic());
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return None;
    }
    if noise.contains(word) {
        return None;
    }
    Some(word.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_punctuation_only() {
        let noise = NoiseWords::new();
        assert_eq!(normalize("end.,", &noise).as_deref(), Some("end"));
        assert_eq!(normalize("mi,ddle", &noise), None);
        assert_eq!(normalize("Hello?!", &noise).as_deref(), Some("hello"));
    }

    #[test]
    fn rejects_digits_and_empty() {
        let noise = NoiseWords::new();
        assert_eq!(normalize("", &noise), None);
        assert_eq!(normalize("...!", &noise), None);
        assert_eq!(normalize("123abc", &noise), None);
        assert_eq!(normalize("a1b", &noise), None);
        // trailing digits count as trailing non-letters
        assert_eq!(normalize("abc123", &noise).as_deref(), Some("abc"));
    }

    #[test]
    fn noise_words_are_case_insensitive() {
        let noise: NoiseWords = ["The", "a"].into_iter().collect();
        assert_eq!(normalize("The!", &noise), None);
        assert_eq!(normalize("A", &noise), None);
        assert_eq!(normalize("Then", &noise).as_deref(), Some("then"));
    }

    #[test]
    fn lowercase_expansion_is_checked_for_letters() {
        let noise = NoiseWords::new();
        // 'İ' lower-cases to "i\u{307}"; the combining dot is not a letter
        assert_eq!(normalize("İstanbul", &noise), None);
        assert_eq!(normalize("KALDIRIMİ", &noise).as_deref(), Some("kaldirimi"));
    }
}

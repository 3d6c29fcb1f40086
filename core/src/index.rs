use crate::error::Result;
use crate::keyword::{normalize, NoiseWords};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One document's count for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Keyword -> occurrences, each list kept in non-increasing frequency order.
#[derive(Debug, Default, Clone)]
pub struct KeywordIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
    documents: Vec<String>,
}

impl KeywordIndex {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn contains(&self, keyword: &str) -> bool { self.keywords.contains_key(keyword) }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    /// Documents merged so far, in merge order.
    pub fn documents(&self) -> &[String] { &self.documents }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    fn merge(&mut self, keyword: String, occurrence: Occurrence) {
        let occs = self.keywords.entry(keyword).or_default();
        occs.push(occurrence);
        insert_last_occurrence(occs);
    }
}

/// Moves the last element of `occs` into frequency order.
///
/// Everything before the last element must already be non-increasing by frequency.
/// A binary search over that prefix finds the slot; on an exact frequency match the
/// new occurrence goes in front of the probed equal element. Returns the midpoints
/// probed, which is empty for a single-element list.
pub fn insert_last_occurrence(occs: &mut [Occurrence]) -> Vec<usize> {
    debug_assert!(!occs.is_empty(), "no appended occurrence to insert");
    debug_assert!(
        occs[..occs.len() - 1].windows(2).all(|w| w[0].frequency >= w[1].frequency),
        "occurrence prefix is not sorted by frequency"
    );
    let last = occs.len() - 1;
    let target = occs[last].frequency;

    let mut mid_points = Vec::new();
    let (mut lo, mut hi) = (0isize, last as isize - 1);
    let mut mid = 0usize;
    let mut slot = None;
    while lo <= hi {
        mid = ((lo + hi) / 2) as usize;
        mid_points.push(mid);
        let probe = occs[mid].frequency;
        if target == probe {
            slot = Some(mid);
            break;
        }
        if target < probe { lo = mid as isize + 1; } else { hi = mid as isize - 1; }
    }
    let slot = slot.unwrap_or(if target < occs[mid].frequency { mid + 1 } else { mid });

    // single relocation of the tail element
    occs[slot..].rotate_right(1);
    mid_points
}

/// Single-writer builder that owns the index until [`IndexBuilder::finish`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    noise: NoiseWords,
    index: KeywordIndex,
    merged: HashSet<String>,
}

impl IndexBuilder {
    pub fn new(noise: NoiseWords) -> Self {
        Self { noise, index: KeywordIndex::new(), merged: HashSet::new() }
    }

    /// Counts keywords in one document's token stream.
    pub fn load_keywords<I, S>(&self, document: &str, tokens: I) -> HashMap<String, Occurrence>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: HashMap<String, Occurrence> = HashMap::new();
        for token in tokens {
            let Some(word) = normalize(token.as_ref(), &self.noise) else { continue };
            keywords
                .entry(word)
                .and_modify(|occ| occ.frequency += 1)
                .or_insert_with(|| Occurrence::new(document, 1));
        }
        keywords
    }

    /// Merges one document's keyword table into the global index.
    pub fn merge_keywords(&mut self, keywords: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in keywords {
            self.index.merge(keyword, occurrence);
        }
    }

    pub fn add_document<I, S>(&mut self, document: &str, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let first_time = self.merged.insert(document.to_string());
        debug_assert!(first_time, "document {document} merged twice");
        let keywords = self.load_keywords(document, tokens);
        tracing::debug!(document, keywords = keywords.len(), "merging document");
        self.merge_keywords(keywords);
        self.index.documents.push(document.to_string());
    }

    pub fn finish(self) -> KeywordIndex {
        tracing::info!(
            num_docs = self.index.documents.len(),
            num_keywords = self.index.len(),
            "index build complete"
        );
        self.index
    }

    /// Builds an index in one pass. The first source error aborts the build.
    pub fn build<I, D, T, S>(noise: NoiseWords, documents: I) -> Result<KeywordIndex>
    where
        I: IntoIterator<Item = Result<(D, T)>>,
        D: AsRef<str>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new(noise);
        for doc in documents {
            let (document, tokens) = doc?;
            builder.add_document(document.as_ref(), tokens);
        }
        Ok(builder.finish())
    }
}

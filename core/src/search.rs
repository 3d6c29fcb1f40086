use crate::index::{KeywordIndex, Occurrence};

/// Upper bound on the documents returned by [`top5_search`].
pub const MAX_RESULTS: usize = 5;

/// Ranked search for "kw1 or kw2".
///
/// Documents come back in non-increasing frequency order, each at most once, capped
/// at [`MAX_RESULTS`]. Equal frequencies favour `kw1`. Returns `None` when neither
/// keyword is indexed. Keywords are looked up as given, so callers holding raw user
/// input should lower-case it first.
pub fn top5_search(index: &KeywordIndex, kw1: &str, kw2: &str) -> Option<Vec<String>> {
    match (index.get(kw1), index.get(kw2)) {
        (None, None) => None,
        // one list never repeats a document, so no de-duplication here
        (Some(only), None) | (None, Some(only)) => {
            Some(only.iter().take(MAX_RESULTS).map(|occ| occ.document.clone()).collect())
        }
        (Some(first), Some(second)) => Some(RankedMerge::new(first, second).run()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    First,
    Second,
    Done,
}

/// Two cursors over frequency-sorted lists feeding a bounded result buffer.
struct RankedMerge<'a> {
    first: &'a [Occurrence],
    second: &'a [Occurrence],
    i: usize,
    j: usize,
    result: Vec<String>,
}

impl<'a> RankedMerge<'a> {
    fn new(first: &'a [Occurrence], second: &'a [Occurrence]) -> Self {
        Self { first, second, i: 0, j: 0, result: Vec::with_capacity(MAX_RESULTS) }
    }

    fn next_step(&self) -> Step {
        if self.result.len() >= MAX_RESULTS {
            return Step::Done;
        }
        match (self.first.get(self.i), self.second.get(self.j)) {
            (Some(a), Some(b)) if a.frequency >= b.frequency => Step::First,
            (Some(_), Some(_)) => Step::Second,
            (Some(_), None) => Step::First,
            (None, Some(_)) => Step::Second,
            (None, None) => Step::Done,
        }
    }

    fn emit(&mut self, occ: &Occurrence) {
        if !self.result.contains(&occ.document) {
            self.result.push(occ.document.clone());
        }
    }

    fn run(mut self) -> Vec<String> {
        let (first, second) = (self.first, self.second);
        loop {
            match self.next_step() {
                Step::First => {
                    let occ = &first[self.i];
                    self.i += 1;
                    self.emit(occ);
                }
                Step::Second => {
                    let occ = &second[self.j];
                    self.j += 1;
                    self.emit(occ);
                }
                Step::Done => return self.result,
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::frequency::FrequencyTable;
use crate::sentence_trie::honorifics::restore_period;

/// Default number of words returned by the ranking queries
pub const DEFAULT_K: usize = 20;

/// One row of a frequency ranking
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub count: u64,
}

impl RankedWord {
    fn new(word: &str, count: u64) -> Self {
        Self { word: restore_period(word), count }
    }
}

/// Entries by descending count, equal counts in ascending lexical order.
/// The heap is drained lazily so only as many entries as consumed are popped.
fn descending(table: &FrequencyTable) -> impl Iterator<Item = (&str, u64)> {
    let mut heap: BinaryHeap<(u64, Reverse<&str>)> =
        table.iter().map(|(word, count)| (count, Reverse(word))).collect();
    std::iter::from_fn(move || heap.pop().map(|(count, Reverse(word))| (word, count)))
}

/// Entries by ascending (count, token)
fn ascending(table: &FrequencyTable) -> impl Iterator<Item = (&str, u64)> {
    let mut heap: BinaryHeap<Reverse<(u64, &str)>> =
        table.iter().map(|(word, count)| Reverse((count, word))).collect();
    std::iter::from_fn(move || heap.pop().map(|Reverse((count, word))| (word, count)))
}

fn select<'a>(
    entries: impl Iterator<Item = (&'a str, u64)>,
    k: usize,
    skip: impl Fn(&str) -> bool,
) -> Vec<RankedWord> {
    entries
        .filter(|(word, _)| !skip(word))
        .take(k)
        .map(|(word, count)| RankedWord::new(word, count))
        .collect()
}

/// The k most frequent words
pub fn top_k(table: &FrequencyTable, k: usize) -> Vec<RankedWord> {
    select(descending(table), k, |_| false)
}

/// The k most frequent words that are not stop words. A word is also skipped
/// when its all-uppercase rendering is listed.
pub fn top_k_excluding(table: &FrequencyTable, stopwords: &HashSet<String>, k: usize) -> Vec<RankedWord> {
    select(descending(table), k, |word| {
        stopwords.contains(word) || stopwords.contains(word.to_uppercase().as_str())
    })
}

/// The k least frequent words, skipping `excluded` tokens
pub fn bottom_k(table: &FrequencyTable, excluded: &HashSet<String>, k: usize) -> Vec<RankedWord> {
    select(ascending(table), k, |word| excluded.contains(word))
}

/// Chapter numbers survive punctuation stripping as bare tokens; these are
/// the literals "1" through `chapter_count`.
///
/// The range is inclusive. The body keeps every "Chapter N" line, the last one
/// included, so stopping at `chapter_count - 1` would rank the final chapter's
/// number among the rare words.
pub fn chapter_number_tokens(chapter_count: usize) -> HashSet<String> {
    (1..=chapter_count).map(|n| n.to_string()).collect()
}

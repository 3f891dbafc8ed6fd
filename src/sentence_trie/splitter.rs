// Sentence boundary detection over honorific-masked text

use regex_automata::meta::Regex;
use tracing::debug;

use crate::error::Result;

/// A run of terminal punctuation plus any closing quotes or brackets that hug it.
/// Closing glyphs stay with the sentence they close so the next one starts on a word.
const BOUNDARY_PATTERN: &str = "[.!?]+[\"'\u{201D}\u{2019})\\]]*";

pub struct SentenceSplitter {
    boundary: Regex,
}

impl SentenceSplitter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            boundary: Regex::new(BOUNDARY_PATTERN)?,
        })
    }

    /// Split text whose honorifics are already masked. Sentences are trimmed,
    /// empty fragments are dropped and trailing text without a terminal mark
    /// is kept as the final sentence.
    pub fn split<'a>(&self, masked: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut last_end = 0;

        // WHY: a trailing fragment without terminal punctuation is still a sentence
        for mat in self.boundary.find_iter(masked) {
            push_trimmed(&mut sentences, &masked[last_end..mat.end()]);
            last_end = mat.end();
        }
        push_trimmed(&mut sentences, &masked[last_end..]);

        debug!("Split {} bytes into {} sentences", masked.len(), sentences.len());
        sentences
    }
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let sentence = fragment.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

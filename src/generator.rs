use std::collections::HashMap;
use tracing::debug;

use crate::normalizer::CURLY_QUOTES;

/// Default seed token for generated sentences
pub const DEFAULT_SEED: &str = "The";

/// Default number of words in a generated sentence
pub const DEFAULT_LENGTH: usize = 20;

/// Source of uniform indices, injectable so tests can fix the sequence
pub trait RandomSource {
    /// Uniform index in `0..len`; `len` is never zero
    fn index(&mut self, len: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn index(&mut self, len: usize) -> usize {
        self.usize(0..len)
    }
}

/// Every token that immediately follows each token in the text, repeats kept
#[derive(Debug, Default)]
pub struct SuccessorTable {
    successors: HashMap<String, Vec<String>>,
}

impl SuccessorTable {
    pub fn build(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut successors: HashMap<String, Vec<String>> = HashMap::new();
        for pair in tokens.windows(2) {
            successors
                .entry(pair[0].to_string())
                .or_default()
                .push(pair[1].to_string());
        }

        debug!("Built successor table for {} distinct tokens", successors.len());
        Self { successors }
    }

    /// Successors of `token` in text order
    pub fn successors(&self, token: &str) -> &[String] {
        self.successors.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Pick a successor of `token`, weighted by how often it was observed there
    pub fn sample_next<R: RandomSource + ?Sized>(&self, token: &str, rng: &mut R) -> Option<&str> {
        let candidates = self.successors(token);
        if candidates.is_empty() {
            return None;
        }
        candidates.get(rng.index(candidates.len())).map(String::as_str)
    }

    /// Chain up to `length` words starting from `seed` and close the result with a period.
    /// Stops early when the last word never has a successor.
    pub fn generate_sentence<R: RandomSource + ?Sized>(&self, seed: &str, length: usize, rng: &mut R) -> String {
        let mut words: Vec<&str> = vec![seed];
        while words.len() < length {
            let last = words[words.len() - 1];
            match self.sample_next(last, rng) {
                Some(next) => words.push(next),
                None => {
                    debug!("No successor for {:?}, ending after {} words", last, words.len());
                    break;
                }
            }
        }

        let mut sentence = words.join(" ");
        if sentence
            .chars()
            .last()
            .is_some_and(|ch| ch.is_ascii_punctuation() || CURLY_QUOTES.contains(&ch))
        {
            sentence.pop();
        }
        sentence.push('.');
        sentence
    }
}

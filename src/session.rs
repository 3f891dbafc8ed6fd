use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::chapters::{self, ChapterFrequency, ChapterIndex};
use crate::error::{FolioError, Result, MAX_STOPWORDS};
use crate::frequency::FrequencyTable;
use crate::generator::{RandomSource, SuccessorTable};
use crate::normalizer::NormalizedText;
use crate::ranking::{self, RankedWord};
use crate::reader::{ReaderConfig, SourceText, StopWordList, TextSource};
use crate::sentence_trie::SentenceTrie;

/// Where the book and the common-word list come from
#[derive(Debug, Clone)]
pub struct FolioConfig {
    pub book_path: PathBuf,
    /// Optional list of common English words, most common first
    pub stopwords_path: Option<PathBuf>,
    /// How many entries of the list to treat as uninteresting
    pub stopword_count: usize,
    pub reader: ReaderConfig,
}

impl FolioConfig {
    pub fn new(book_path: impl Into<PathBuf>) -> Self {
        Self {
            book_path: book_path.into(),
            stopwords_path: None,
            stopword_count: 300,
            reader: ReaderConfig::default(),
        }
    }
}

/// Headline numbers for the loaded book
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub chapters: usize,
    /// Runs of word characters, so "Netherfield's" counts twice
    pub total_words: usize,
    /// Distinct whitespace tokens after lowercasing
    pub unique_words: usize,
    /// Entries in the reconciled frequency table
    pub distinct_tokens: usize,
    pub sentences: usize,
}

/// Collects the inputs of a `Session`
pub struct SessionBuilder {
    source: SourceText,
    stopwords: Vec<String>,
}

impl SessionBuilder {
    pub fn new(source: SourceText) -> Self {
        Self { source, stopwords: Vec::new() }
    }

    pub fn stopwords(mut self, stopwords: Vec<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Derive every view and index once
    pub fn build(self) -> Result<Session> {
        let start_time = std::time::Instant::now();
        let chapter_count = self.source.chapter_count;
        let text = NormalizedText::new(&self.source.body);

        let apostrophe_chapters = ChapterIndex::locate(&text.apostrophes_only, chapter_count);
        let preserved_chapters = ChapterIndex::locate(&text.punctuation_preserved, chapter_count);

        let frequencies = FrequencyTable::build(&text.apostrophes_only);
        let trie = SentenceTrie::build(&text.punctuation_preserved)?;
        let successors = SuccessorTable::build(&text.without_matching);

        let word_pattern = Regex::new(r"\w+")?;
        let total_words = word_pattern.find_iter(&text.apostrophes_only).count();
        let unique_words = text
            .apostrophes_only
            .to_lowercase()
            .split_whitespace()
            .collect::<HashSet<_>>()
            .len();
        debug!("Counted {} words, {} unique", total_words, unique_words);

        let summary = BookSummary {
            chapters: chapter_count,
            total_words,
            unique_words,
            distinct_tokens: frequencies.len(),
            sentences: trie.len(),
        };

        info!(
            "Session ready in {}ms: {} chapters, {} distinct tokens, {} sentences",
            start_time.elapsed().as_millis(),
            summary.chapters,
            summary.distinct_tokens,
            summary.sentences
        );

        Ok(Session {
            text,
            apostrophe_chapters,
            preserved_chapters,
            frequencies,
            stopwords: self.stopwords.into_iter().collect(),
            // WHY: inclusive of the last chapter, see `chapter_number_tokens`
            chapter_numbers: ranking::chapter_number_tokens(chapter_count),
            trie,
            successors,
            summary,
        })
    }
}

/// Everything derived from one book. Built once and only read afterwards.
pub struct Session {
    text: NormalizedText,
    apostrophe_chapters: ChapterIndex,
    preserved_chapters: ChapterIndex,
    frequencies: FrequencyTable,
    stopwords: HashSet<String>,
    chapter_numbers: HashSet<String>,
    trie: SentenceTrie,
    successors: SuccessorTable,
    summary: BookSummary,
}

impl Session {
    /// Load the book (and the stop-word list, if configured) and build the session
    pub async fn load(config: &FolioConfig) -> Result<Self> {
        if config.stopword_count > MAX_STOPWORDS {
            return Err(FolioError::InvalidRange {
                requested: config.stopword_count,
                max: MAX_STOPWORDS,
            });
        }

        let source = TextSource::new(&config.book_path, config.reader.clone()).load().await?;
        let stopwords = match &config.stopwords_path {
            Some(path) => StopWordList::load(path, config.stopword_count).await?,
            None => Vec::new(),
        };

        SessionBuilder::new(source).stopwords(stopwords).build()
    }

    pub fn summary(&self) -> &BookSummary {
        &self.summary
    }

    pub fn chapter_count(&self) -> usize {
        self.summary.chapters
    }

    pub fn text(&self) -> &NormalizedText {
        &self.text
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn trie(&self) -> &SentenceTrie {
        &self.trie
    }

    pub fn top_words(&self, k: usize) -> Vec<RankedWord> {
        ranking::top_k(&self.frequencies, k)
    }

    /// Most frequent words once the common-word list is filtered out
    pub fn interesting_words(&self, k: usize) -> Vec<RankedWord> {
        ranking::top_k_excluding(&self.frequencies, &self.stopwords, k)
    }

    /// Least frequent words, chapter numbers excluded
    pub fn rare_words(&self, k: usize) -> Vec<RankedWord> {
        ranking::bottom_k(&self.frequencies, &self.chapter_numbers, k)
    }

    /// Case-sensitive count of `token` in each chapter, chapter 1 first
    pub fn occurrences_by_chapter(&self, token: &str) -> Vec<usize> {
        chapters::occurrences_by_chapter(&self.text.apostrophes_only, &self.apostrophe_chapters, token)
    }

    /// `occurrences_by_chapter` paired with the word it counts
    pub fn chapter_frequency(&self, token: &str) -> ChapterFrequency {
        ChapterFrequency {
            word: token.to_string(),
            chapters: self.occurrences_by_chapter(token),
        }
    }

    /// First chapter containing `quote` verbatim
    pub fn find_chapter_of_quote(&self, quote: &str) -> Option<usize> {
        chapters::find_chapter_of_quote(&self.text.punctuation_preserved, &self.preserved_chapters, quote)
    }

    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.trie.autocomplete(prefix)
    }

    pub fn generate_sentence<R: RandomSource + ?Sized>(&self, seed: &str, length: usize, rng: &mut R) -> String {
        self.successors.generate_sentence(seed, length, rng)
    }
}

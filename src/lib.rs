pub mod chapters;
pub mod error;
pub mod frequency;
pub mod generator;
pub mod normalizer;
pub mod ranking;
pub mod reader;
pub mod sentence_trie;
pub mod session;

// Re-export main types for convenient access
pub use chapters::ChapterFrequency;
pub use error::{FolioError, Result};
pub use frequency::FrequencyTable;
pub use generator::{RandomSource, SuccessorTable};
pub use ranking::RankedWord;
pub use reader::{ReaderConfig, SourceText, StopWordList, TextSource};
pub use sentence_trie::SentenceTrie;
pub use session::{BookSummary, FolioConfig, Session, SessionBuilder};

use std::path::{Path, PathBuf};
use memmap2::Mmap;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::chapters::{is_chapter_marker, CHAPTER_HEADING};
use crate::error::{FolioError, Result, MAX_STOPWORDS};

/// Configuration for book loading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Use memory-mapped I/O instead of async buffered reads
    pub use_mmap: bool,
    /// Body stops before the first line containing this text
    pub end_marker: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192, // WHY: 8KB matches the common filesystem read size
            use_mmap: false,
            end_marker: "End of the Project Gutenberg EBook".to_string(),
        }
    }
}

/// Book body between the first chapter marker and the end-of-text marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Lines of the body joined with single spaces, starting at "Chapter 1"
    pub body: String,
    pub chapter_count: usize,
}

/// Line-at-a-time front/back matter trimming shared by both read strategies
struct BodyAssembler<'a> {
    start_marker: String,
    end_marker: &'a str,
    started: bool,
    body: String,
    chapter_count: usize,
    lines_read: u64,
}

impl<'a> BodyAssembler<'a> {
    fn new(end_marker: &'a str) -> Self {
        Self {
            start_marker: format!("{CHAPTER_HEADING} 1"),
            end_marker,
            started: false,
            body: String::new(),
            chapter_count: 0,
            lines_read: 0,
        }
    }

    /// Returns false once the end-of-text marker is reached
    fn feed(&mut self, line: &str) -> bool {
        self.lines_read += 1;
        let line = line.trim_end_matches('\r');

        if !self.started {
            if line != self.start_marker {
                return true;
            }
            self.started = true;
        } else if line.contains(self.end_marker) {
            return false;
        }

        if is_chapter_marker(line) {
            self.chapter_count += 1;
        }
        self.body.push_str(line);
        self.body.push(' ');
        true
    }

    fn finish(self, path: &Path) -> Result<SourceText> {
        if !self.started {
            return Err(FolioError::MalformedSource(format!(
                "no '{}' line found in {}",
                self.start_marker,
                path.display()
            )));
        }

        debug!(
            "Assembled body from {} lines: {} bytes, {} chapters",
            self.lines_read,
            self.body.len(),
            self.chapter_count
        );
        Ok(SourceText {
            body: self.body,
            chapter_count: self.chapter_count,
        })
    }
}

/// Loads a Project Gutenberg book and trims its front and back matter
pub struct TextSource {
    path: PathBuf,
    config: ReaderConfig,
}

impl TextSource {
    pub fn new(path: impl Into<PathBuf>, config: ReaderConfig) -> Self {
        Self { path: path.into(), config }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the book and return the chapter-delimited body
    pub async fn load(&self) -> Result<SourceText> {
        let start_time = std::time::Instant::now();

        // WHY: only a definite "no such file" is SourceNotFound; permission and
        // other stat failures surface as Io
        if !tokio::fs::try_exists(&self.path).await? {
            warn!("Book file is missing: {}", self.path.display());
            return Err(FolioError::SourceNotFound { path: self.path.clone() });
        }

        let source = if self.config.use_mmap {
            self.load_mmap()?
        } else {
            self.load_buffered().await?
        };

        info!(
            "Loaded {}: {} chapters, {} bytes of body in {}ms",
            self.path.display(),
            source.chapter_count,
            source.body.len(),
            start_time.elapsed().as_millis()
        );
        Ok(source)
    }

    async fn load_buffered(&self) -> Result<SourceText> {
        let file = File::open(&self.path).await?;
        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut assembler = BodyAssembler::new(&self.config.end_marker);

        while let Some(line) = lines.next_line().await.map_err(|e| decode_error(&self.path, e))? {
            if !assembler.feed(&line) {
                break;
            }
        }

        assembler.finish(&self.path)
    }

    fn load_mmap(&self) -> Result<SourceText> {
        let file = std::fs::File::open(&self.path)?;
        // SAFETY: the map is read-only and dropped before this function returns
        let mmap = unsafe { Mmap::map(&file)? };
        let text = std::str::from_utf8(&mmap).map_err(|e| not_utf8(&self.path, e))?;

        let mut assembler = BodyAssembler::new(&self.config.end_marker);
        for line in text.lines() {
            if !assembler.feed(line) {
                break;
            }
        }

        assembler.finish(&self.path)
    }
}

/// Both read strategies report undecodable text the same way
fn not_utf8(path: &Path, detail: impl std::fmt::Display) -> FolioError {
    FolioError::MalformedSource(format!("{} is not valid UTF-8: {detail}", path.display()))
}

/// Tokio's line reader signals bad UTF-8 as `InvalidData`
fn decode_error(path: &Path, err: std::io::Error) -> FolioError {
    if err.kind() == std::io::ErrorKind::InvalidData {
        not_utf8(path, err)
    } else {
        err.into()
    }
}

/// Ordered list of common English words, one per line
pub struct StopWordList;

impl StopWordList {
    /// Return the first `n` entries of the list at `path`
    pub async fn load(path: impl AsRef<Path>, n: usize) -> Result<Vec<String>> {
        let path = path.as_ref();
        if n > MAX_STOPWORDS {
            return Err(FolioError::InvalidRange { requested: n, max: MAX_STOPWORDS });
        }

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FolioError::SourceNotFound { path: path.to_path_buf() });
            }
            Err(e) => return Err(decode_error(path, e)),
        };

        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(n)
            .map(str::to_string)
            .collect();

        if words.len() < n {
            warn!("{} holds only {} of the {} requested words", path.display(), words.len(), n);
        }
        debug!("Loaded {} stop words from {}", words.len(), path.display());
        Ok(words)
    }
}

// Integration test utilities and common code
// WHY: one fixture helper shared by every integration test binary

use std::path::{Path, PathBuf};
use std::fs;
use tempfile::TempDir;

pub mod fixtures;

/// Test fixture helper for creating temporary directories with Gutenberg-style files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a text file with given content
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write the sample book and return its path
    pub fn sample_book(&self) -> PathBuf {
        self.create_file("1342-0.txt", fixtures::SAMPLE_BOOK)
    }

    /// Write the sample common-word list and return its path
    pub fn sample_stopwords(&self) -> PathBuf {
        self.create_file("1-1000.txt", fixtures::SAMPLE_STOPWORDS)
    }

    /// Path inside the fixture that is never created
    pub fn missing_path(&self, name: &str) -> PathBuf {
        self.root_path.join(name)
    }
}

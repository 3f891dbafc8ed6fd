// Parallel read-only views of the book body, each tuned for one family of queries

/// Curly double quotes used by the Gutenberg edition in place of '"'
pub const CURLY_QUOTES: [char; 2] = ['\u{201C}', '\u{201D}'];

const EMPHASIS_MARKER: char = '_';

/// The derived text views; the body itself is never modified
#[derive(Debug, Clone)]
pub struct NormalizedText {
    /// Punctuation stripped except '-' and apostrophes (frequency analysis)
    pub apostrophes_only: String,
    /// Punctuation stripped except '-' (unique-word counting)
    pub punctuation_stripped: String,
    /// Only the emphasis marker removed (chapter, quote and sentence lookups)
    pub punctuation_preserved: String,
    /// Quotes and brackets removed, word-final apostrophes dropped (generation)
    pub without_matching: String,
}

impl NormalizedText {
    pub fn new(body: &str) -> Self {
        let punctuation_preserved = body.replace(EMPHASIS_MARKER, "");

        // WHY: emphasis and double quotes go first so a closing "'” " exposes the
        // word-final apostrophe; brackets go last, so "') " keeps it
        let unquoted: String = body
            .chars()
            .filter(|&ch| ch != EMPHASIS_MARKER && !CURLY_QUOTES.contains(&ch))
            .collect();
        let without_matching: String = unquoted
            .replace("' ", " ")
            .chars()
            .filter(|&ch| !matches!(ch, '(' | ')' | '[' | ']'))
            .collect();

        // Em-dash pairs separate words, so they become spaces before stripping
        let dashes_split = body.replace("--", " ");
        let apostrophes_only = strip_punctuation(&dashes_split, true);
        let punctuation_stripped = strip_punctuation(&apostrophes_only, false);

        Self {
            apostrophes_only,
            punctuation_stripped,
            punctuation_preserved,
            without_matching,
        }
    }
}

/// Remove ASCII punctuation and curly quotes, keeping hyphens and optionally apostrophes
pub fn strip_punctuation(text: &str, keep_apostrophes: bool) -> String {
    text.chars()
        .filter(|&ch| !is_stripped(ch, keep_apostrophes))
        .collect()
}

fn is_stripped(ch: char, keep_apostrophes: bool) -> bool {
    match ch {
        '-' => false,
        '\'' => !keep_apostrophes,
        _ => ch.is_ascii_punctuation() || CURLY_QUOTES.contains(&ch),
    }
}

use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::warn;

/// Literal heading that opens every chapter, followed by its number
pub const CHAPTER_HEADING: &str = "Chapter";

/// True for lines of the form "Chapter <digits>"
pub fn is_chapter_marker(line: &str) -> bool {
    line.trim()
        .strip_prefix(CHAPTER_HEADING)
        .and_then(|rest| rest.strip_prefix(' '))
        .is_some_and(|number| !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()))
}

/// Byte spans of each chapter within one text view
///
/// Spans are half-open, contiguous and together cover the whole view:
/// chapter 1 starts at 0, chapter N ends at the end of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterIndex {
    spans: Vec<Range<usize>>,
}

impl ChapterIndex {
    /// Find the "Chapter N" markers of chapters 1..=chapter_count in `text`
    pub fn locate(text: &str, chapter_count: usize) -> Self {
        if chapter_count == 0 {
            return Self { spans: Vec::new() };
        }

        let mut starts: Vec<Option<usize>> = Vec::with_capacity(chapter_count);
        starts.push(Some(0));
        let mut search_from = 0;
        for chapter in 2..=chapter_count {
            let found = find_marker(text, chapter, search_from);
            match found {
                Some(pos) => search_from = pos,
                None => warn!("Marker for chapter {} not found, treating it as empty", chapter),
            }
            starts.push(found);
        }

        // A missing marker collapses onto the start of the following chapter
        let mut bounds = vec![text.len(); chapter_count + 1];
        for i in (0..chapter_count).rev() {
            bounds[i] = starts[i].unwrap_or(bounds[i + 1]);
        }

        let spans = bounds.windows(2).map(|w| w[0]..w[1]).collect();
        Self { spans }
    }

    pub fn chapter_count(&self) -> usize {
        self.spans.len()
    }

    /// Span of a 1-based chapter number
    pub fn span(&self, chapter: usize) -> Option<Range<usize>> {
        chapter.checked_sub(1).and_then(|i| self.spans.get(i)).cloned()
    }

    /// Chapter slices of `text` in chapter order
    pub fn slices<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.spans.iter().map(move |span| &text[span.clone()])
    }
}

fn find_marker(text: &str, chapter: usize, from: usize) -> Option<usize> {
    let marker = format!("{CHAPTER_HEADING} {chapter}");
    let mut search = from;
    while let Some(offset) = text[search..].find(&marker) {
        let pos = search + offset;
        let after = pos + marker.len();
        // WHY: "Chapter 1" is a prefix of "Chapter 12", so a following digit means a different marker
        if !text[after..].starts_with(|c: char| c.is_ascii_digit()) {
            return Some(pos);
        }
        search = after;
    }
    None
}

/// Count exact, case-sensitive matches of `token` in each chapter of `text`
pub fn occurrences_by_chapter(text: &str, index: &ChapterIndex, token: &str) -> Vec<usize> {
    index
        .slices(text)
        .map(|chapter| chapter.split_whitespace().filter(|&word| word == token).count())
        .collect()
}

/// Per-chapter counts of one word, chapter 1 first
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChapterFrequency {
    pub word: String,
    pub chapters: Vec<usize>,
}

impl ChapterFrequency {
    pub fn total(&self) -> usize {
        self.chapters.iter().sum()
    }
}

/// First chapter whose text contains `quote`, or None
pub fn find_chapter_of_quote(text: &str, index: &ChapterIndex, quote: &str) -> Option<usize> {
    index
        .slices(text)
        .position(|chapter| chapter.contains(quote))
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(chapters: usize) -> String {
        (1..=chapters)
            .map(|n| format!("Chapter {n}  Text of part {n}. "))
            .collect()
    }

    #[test]
    fn test_marker_lines() {
        assert!(is_chapter_marker("Chapter 1"));
        assert!(is_chapter_marker("  Chapter 61 "));
        assert!(!is_chapter_marker("Chapter"));
        assert!(!is_chapter_marker("Chapter One"));
        assert!(!is_chapter_marker("In Chapter 3 we saw"));
    }

    #[test]
    fn test_spans_cover_text() {
        let text = book(12);
        let index = ChapterIndex::locate(&text, 12);
        assert_eq!(index.chapter_count(), 12);

        assert_eq!(index.span(1).unwrap().start, 0);
        assert_eq!(index.span(12).unwrap().end, text.len());
        for chapter in 1..12 {
            assert_eq!(index.span(chapter).unwrap().end, index.span(chapter + 1).unwrap().start);
        }

        let rejoined: String = index.slices(&text).collect();
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_chapter_one_does_not_match_chapter_ten() {
        let text = book(12);
        let index = ChapterIndex::locate(&text, 12);
        let tenth = &text[index.span(10).unwrap()];
        assert!(tenth.starts_with("Chapter 10 "));
        assert!(tenth.contains("part 10."));
        assert!(!tenth.contains("part 11."));
    }

    #[test]
    fn test_missing_marker_gives_empty_span() {
        let text = "Chapter 1 one. Chapter 3 three. ";
        let index = ChapterIndex::locate(text, 3);
        assert_eq!(&text[index.span(1).unwrap()], "Chapter 1 one. ");
        assert!(index.span(2).unwrap().is_empty());
        assert_eq!(&text[index.span(3).unwrap()], "Chapter 3 three. ");
    }

    #[test]
    fn test_out_of_range_chapter() {
        let index = ChapterIndex::locate("Chapter 1 only", 1);
        assert!(index.span(0).is_none());
        assert!(index.span(2).is_none());
    }

    #[test]
    fn test_occurrences_by_chapter() {
        let text = "Chapter 1 the cat the hat Chapter 2 The dog Chapter 3 the end ";
        let index = ChapterIndex::locate(text, 3);
        assert_eq!(occurrences_by_chapter(text, &index, "the"), vec![2, 0, 1]);
        assert_eq!(occurrences_by_chapter(text, &index, "The"), vec![0, 1, 0]);
        assert_eq!(occurrences_by_chapter(text, &index, "absent"), vec![0, 0, 0]);
    }

    #[test]
    fn test_chapter_frequency_json_shape() {
        let frequency = ChapterFrequency { word: "Bennet".to_string(), chapters: vec![2, 0, 1] };
        assert_eq!(frequency.total(), 3);

        let json = serde_json::to_value(&frequency).unwrap();
        assert_eq!(json, serde_json::json!({ "word": "Bennet", "chapters": [2, 0, 1] }));
    }

    #[test]
    fn test_find_chapter_of_quote() {
        let text = "Chapter 1 Hello there. Chapter 2 Nothing here. Chapter 3 It is a truth universally acknowledged. ";
        let index = ChapterIndex::locate(text, 3);
        assert_eq!(find_chapter_of_quote(text, &index, "truth universally"), Some(3));
        assert_eq!(find_chapter_of_quote(text, &index, "Hello"), Some(1));
        assert_eq!(find_chapter_of_quote(text, &index, "hello"), None);
        assert_eq!(find_chapter_of_quote(text, &index, "never written"), None);
    }
}

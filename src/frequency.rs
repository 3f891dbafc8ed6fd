use std::collections::HashMap;
use tracing::debug;

/// Token counts after case reconciliation
///
/// Built once from the apostrophe-preserving view. Sentence-initial capitals
/// are folded into their common-word spelling, and all-caps emphasis is folded
/// into the capitalized or lowercase spelling it stands for. Spellings that only
/// ever appear capitalized keep their own entry as proper nouns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Count whitespace-delimited tokens of `text` and reconcile case variants
    pub fn build(text: &str) -> Self {
        Self::from_counts(count_tokens(text))
    }

    /// Reconcile raw counts into a table
    pub fn from_counts(mut counts: HashMap<String, u64>) -> Self {
        reconcile(&mut counts);
        Self { counts }
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

/// Case-sensitive occurrence counts of whitespace-delimited tokens
pub fn count_tokens(text: &str) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Merge case variants in place. Common-word pairs must collapse before the
/// all-caps pass, which relies on a surviving capitalized entry being a proper noun.
pub fn reconcile(counts: &mut HashMap<String, u64>) {
    let paired = merge_capitalized_pairs(counts);
    let shouted = merge_all_caps(counts);
    debug!(
        "Reconciled frequency table: {} capitalized pairs, {} all-caps tokens merged, {} entries left",
        paired,
        shouted,
        counts.len()
    );
}

fn merge_capitalized_pairs(counts: &mut HashMap<String, u64>) -> usize {
    let mut lowercase_initial: Vec<String> = counts
        .keys()
        .filter(|word| word.chars().next().is_some_and(char::is_lowercase))
        .cloned()
        .collect();
    // WHY: HashMap order varies between runs; sorted candidates keep the merged table stable
    lowercase_initial.sort_unstable();

    let mut merged = 0;
    for word in lowercase_initial {
        let capitalized = capitalize(&word);
        if capitalized == word {
            continue;
        }
        if let Some(count) = counts.remove(&capitalized) {
            *counts.entry(word).or_insert(0) += count;
            merged += 1;
        }
    }
    merged
}

fn merge_all_caps(counts: &mut HashMap<String, u64>) -> usize {
    let mut all_caps: Vec<String> = counts.keys().filter(|word| is_all_caps(word)).cloned().collect();
    all_caps.sort_unstable();

    let mut merged = 0;
    for word in all_caps {
        let lowercase = word.to_lowercase();
        let capitalized = capitalize(&lowercase);

        let target = if capitalized != word && counts.contains_key(&capitalized) {
            capitalized
        } else if lowercase != word && counts.contains_key(&lowercase) {
            lowercase
        } else {
            continue;
        };

        if let Some(count) = counts.remove(&word) {
            *counts.entry(target).or_insert(0) += count;
            merged += 1;
        }
    }
    merged
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// At least two characters, some uppercase, none lowercase
fn is_all_caps(word: &str) -> bool {
    word.chars().nth(1).is_some()
        && word.chars().any(char::is_uppercase)
        && !word.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|&(word, count)| (word.to_string(), count)).collect()
    }

    #[test]
    fn test_count_tokens() {
        let counts = count_tokens("the cat  the\that The");
        assert_eq!(counts["the"], 2);
        assert_eq!(counts["The"], 1);
        assert_eq!(counts["cat"], 1);
        assert_eq!(counts.values().sum::<u64>(), 5);
    }

    #[test]
    fn test_sentence_initial_capital_merges() {
        let table = FrequencyTable::from_counts(raw(&[("the", 10), ("The", 3)]));
        assert_eq!(table.get("the"), Some(13));
        assert_eq!(table.get("The"), None);
    }

    #[test]
    fn test_proper_noun_kept() {
        let table = FrequencyTable::from_counts(raw(&[("Elizabeth", 7), ("walked", 2)]));
        assert_eq!(table.get("Elizabeth"), Some(7));
        assert_eq!(table.get("walked"), Some(2));
    }

    #[test]
    fn test_all_caps_prefers_capitalized_form() {
        let table = FrequencyTable::from_counts(raw(&[("Elizabeth", 7), ("ELIZABETH", 2)]));
        assert_eq!(table.get("Elizabeth"), Some(9));
        assert_eq!(table.get("ELIZABETH"), None);
    }

    #[test]
    fn test_all_caps_falls_back_to_lowercase() {
        // "Not" collapses into "not" first, so "NOT" can only land in "not"
        let table = FrequencyTable::from_counts(raw(&[("not", 5), ("Not", 1), ("NOT", 2)]));
        assert_eq!(table.get("not"), Some(8));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unmatched_all_caps_kept() {
        let table = FrequencyTable::from_counts(raw(&[("FINIS", 1), ("I", 4)]));
        assert_eq!(table.get("FINIS"), Some(1));
        assert_eq!(table.get("I"), Some(4));
    }

    #[test]
    fn test_caseless_tokens_untouched() {
        let table = FrequencyTable::from_counts(raw(&[("1814", 2), ("'tis", 1), ("--", 1)]));
        assert_eq!(table.get("1814"), Some(2));
        assert_eq!(table.get("'tis"), Some(1));
        assert_eq!(table.get("--"), Some(1));
    }

    #[test]
    fn test_sum_preserved() {
        let text = "The the THE Darcy DARCY Darcy walked WALKED Walked 1814 OK I";
        let counts = count_tokens(text);
        let before: u64 = counts.values().sum();
        let table = FrequencyTable::from_counts(counts);
        assert_eq!(table.total(), before);
        assert_eq!(before, text.split_whitespace().count() as u64);
    }

    #[test]
    fn test_reconcile_idempotent() {
        let mut once = count_tokens(
            "The the THE Darcy DARCY Darcy walked WALKED Walked Mr MR Lizzy LIZZY NOT Not OK ok's",
        );
        reconcile(&mut once);
        let mut twice = once.clone();
        reconcile(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_build_from_text() {
        let table = FrequencyTable::build("The cat saw the Cat and THE DOG ");
        assert_eq!(table.get("the"), Some(3));
        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get("Cat"), None);
        assert_eq!(table.get("DOG"), Some(1));
        assert_eq!(table.total(), 8);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::build("   ");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("elizabeth"), "Elizabeth");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("1st"), "1st");
    }
}

// Honorific abbreviations whose trailing period is not a sentence boundary

/// Each honorific with the sentinel that stands in for it while splitting.
/// Sentinels use private-use code points so they cannot collide with book text
/// and carry no sentence-terminal punctuation.
pub const HONORIFICS: &[(&str, &str)] = &[
    ("Mrs.", "\u{E000}MRS\u{E001}"),
    ("Mr.", "\u{E000}MR\u{E001}"),
    ("Esq.", "\u{E000}ESQ\u{E001}"),
];

/// Replace every honorific with its sentinel
pub fn mask(text: &str) -> String {
    HONORIFICS
        .iter()
        .fold(text.to_string(), |acc, (honorific, sentinel)| acc.replace(honorific, sentinel))
}

/// Restore the honorifics hidden by `mask`
pub fn unmask(text: &str) -> String {
    HONORIFICS
        .iter()
        .fold(text.to_string(), |acc, (honorific, sentinel)| acc.replace(sentinel, honorific))
}

/// Restore the period that punctuation stripping removed from an honorific token
pub fn restore_period(token: &str) -> String {
    let is_honorific = HONORIFICS
        .iter()
        .any(|(honorific, _)| token.contains(honorific.trim_end_matches('.')));
    if is_honorific {
        format!("{token}.")
    } else {
        token.to_string()
    }
}

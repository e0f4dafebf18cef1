//! Small text helpers shared by the generator and the preview.

/// Marker appended when content is cut.
pub const ELLIPSIS: &str = "...";

/// Keep the first `max_words` whitespace-delimited words, rejoined with
/// single spaces. Appends [`ELLIPSIS`] only when words were dropped.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut out = words
        .iter()
        .take(max_words)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > max_words {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Comma-join the non-empty entries.
pub fn join_present<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Keep at most `max_chars` characters, appending [`ELLIPSIS`] if cut.
pub fn clip_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

//! Flattening of text nodes pulled out of an HTML element.

/// Concatenates text fragments and trims the result
///
/// Inner whitespace is kept as it appears in the document, so
/// `"  Waikiki ", "Sunset  "` becomes `"Waikiki Sunset"`.
pub fn inline_text<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments.into_iter().collect::<String>().trim().to_string()
}

/// Joins text fragments one per line
///
/// Each fragment is trimmed and whitespace-only fragments are dropped, so
/// paragraphs, list items and `<br>` separated runs each end up on their own
/// line with no blank lines between them.
pub fn block_text<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

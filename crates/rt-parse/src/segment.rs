//! VRF stanza segmentation

/// Split raw configuration text into self-contained VRF stanzas.
///
/// The trimmed input is split on the literal `keyword`, empty fragments
/// are discarded, and the keyword is re-prepended to every surviving
/// fragment so each stanza parses standalone. Text containing no keyword
/// at all yields an empty vector.
pub fn split_vrf_blocks(text: &str, keyword: &str) -> Vec<String> {
    text.trim()
        .split(keyword)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{}{}", keyword, fragment))
        .collect()
}

/// First line of a stanza, for error messages
pub(crate) fn stanza_snippet(block: &str) -> String {
    block.lines().next().unwrap_or("").trim().to_string()
}

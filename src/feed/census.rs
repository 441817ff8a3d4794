use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static END_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</[A-Z]*>").unwrap());

/// Count closing tags across the whole feed, keyed by bare tag name.
///
/// The counts pre-size per-type record storage before the line scan begins.
/// Every `</UPPERCASE>` tag is counted, not just notice types; callers must
/// intersect with the known `NoticeType` set before use. Lines without such
/// a tag are expected and ignored.
pub fn tag_census(lines: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for line in lines {
        if let Some(found) = END_TAG_RE.find(line) {
            let name: String = found
                .as_str()
                .chars()
                .filter(char::is_ascii_alphabetic)
                .collect();
            *counts.entry(name).or_insert(0) += 1;
        }
    }
    counts
}

use crate::types::NoticeType;
use regex::Regex;
use std::sync::LazyLock;

/// HTML element names recognized inside field values. Open and close forms of
/// these are stripped before a line's field tag is matched. The list is the
/// one observed in production feeds; it is deliberately not exhaustive.
const HTML_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "address", "applet", "area", "article", "aside", "audio", "b", "base",
    "basefont", "bdi", "bdo", "bgsound", "big", "blink", "blockquote", "body", "br", "button",
    "canvas", "caption", "center", "cite", "code", "col", "colgroup", "command", "content", "data",
    "datalist", "dd", "del", "details", "dfn", "dialog", "dir", "div", "dl", "dt", "element", "em",
    "embed", "fieldset", "figcaption", "figure", "font", "footer", "form", "frame", "frameset",
    "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe",
    "image", "img", "input", "ins", "isindex", "kbd", "keygen", "label", "legend", "li", "link",
    "listing", "main", "map", "mark", "marquee", "math", "menu", "menuitem", "meta", "meter",
    "multicol", "nav", "nextid", "nobr", "noembed", "noframes", "noscript", "object", "ol",
    "optgroup", "option", "output", "p", "param", "picture", "plaintext", "pre", "progress", "q",
    "rb", "rbc", "rp", "rt", "rtc", "ruby", "s", "samp", "script", "section", "select", "shadow",
    "slot", "small", "source", "spacer", "span", "strike", "strong", "style", "sub", "summary",
    "sup", "svg", "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "time",
    "title", "tr", "track", "tt", "u", "ul", "var", "video", "wbr", "xmp",
];

static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = HTML_TAGS
        .iter()
        .map(|tag| format!("(?:</?{tag}>)"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).unwrap()
});

static SUB_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<([a-z]+)>(.*)").unwrap());

static START_TAGS: LazyLock<Vec<(NoticeType, String)>> = LazyLock::new(|| {
    NoticeType::ALL
        .iter()
        .map(|&t| (t, format!("<{}>", t.as_code())))
        .collect()
});

static END_TAGS: LazyLock<Vec<String>> = LazyLock::new(|| {
    NoticeType::ALL
        .iter()
        .map(|t| format!("</{}>", t.as_code()))
        .collect()
});

/// Classification of a single raw feed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Structural marker opening a notice record of the given type.
    TypeOpened(NoticeType),
    /// Structural marker sealing the record of the currently open type.
    TypeClosed,
    /// A field tag with its trailing text, starting a new fragment.
    NewFragment { name: String, text: String },
    /// Tagless cleaned text extending the most recent same-named fragment.
    Continuation(String),
}

/// Classify one raw line. Start tags win over end tags; anything else is
/// field content, cleaned and then split into a new fragment or a
/// continuation of the previous one.
pub fn classify_line(line: &str) -> LineClass {
    for (notice_type, tag) in START_TAGS.iter() {
        if line.contains(tag.as_str()) {
            return LineClass::TypeOpened(*notice_type);
        }
    }
    if END_TAGS.iter().any(|tag| line.contains(tag.as_str())) {
        return LineClass::TypeClosed;
    }

    let cleaned = clean_field_line(line);
    match SUB_TAG_RE.captures(&cleaned) {
        Some(captures) => LineClass::NewFragment {
            name: captures[1].to_string(),
            text: captures[2].trim().to_string(),
        },
        None => LineClass::Continuation(cleaned),
    }
}

/// Normalize a field-content line: lower-case the portion before the first
/// `>` (where a field tag would sit), replace no-break spaces with ordinary
/// spaces, strip recognized HTML tags, and collapse whitespace.
///
/// A line with no `>` at all skips the lower-casing step entirely. This is a
/// legacy quirk of the production feed handling, preserved as-is.
pub fn clean_field_line(line: &str) -> String {
    let normalized = match line.split_once('>') {
        Some((prefix, rest)) => {
            format!("{}>{}", prefix.to_lowercase(), rest.replace('\u{00A0}', " "))
        }
        None => line.replace('\u{00A0}', " "),
    };
    strip_html(&normalized)
}

/// Replace recognized HTML open/close tags with spaces, then collapse runs
/// of whitespace. Idempotent: stripping stripped text changes nothing.
pub fn strip_html(text: &str) -> String {
    let stripped = HTML_TAG_RE.replace_all(text, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

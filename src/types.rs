use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The closed set of FBO notice-type codes. The nightly feed brackets each
/// notice record with `<CODE>` / `</CODE>` structural lines using one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NoticeType {
    Presol,
    Srcsgt,
    Snote,
    Ssale,
    Combine,
    Amdcss,
    Mod,
    Award,
    Ja,
    Fairopp,
    Archive,
    Unarchive,
    Itb,
    Fstd,
    Epsupload,
    Delete,
}

impl NoticeType {
    pub const ALL: [NoticeType; 16] = [
        NoticeType::Presol,
        NoticeType::Srcsgt,
        NoticeType::Snote,
        NoticeType::Ssale,
        NoticeType::Combine,
        NoticeType::Amdcss,
        NoticeType::Mod,
        NoticeType::Award,
        NoticeType::Ja,
        NoticeType::Fairopp,
        NoticeType::Archive,
        NoticeType::Unarchive,
        NoticeType::Itb,
        NoticeType::Fstd,
        NoticeType::Epsupload,
        NoticeType::Delete,
    ];

    pub fn as_code(self) -> &'static str {
        match self {
            NoticeType::Presol => "PRESOL",
            NoticeType::Srcsgt => "SRCSGT",
            NoticeType::Snote => "SNOTE",
            NoticeType::Ssale => "SSALE",
            NoticeType::Combine => "COMBINE",
            NoticeType::Amdcss => "AMDCSS",
            NoticeType::Mod => "MOD",
            NoticeType::Award => "AWARD",
            NoticeType::Ja => "JA",
            NoticeType::Fairopp => "FAIROPP",
            NoticeType::Archive => "ARCHIVE",
            NoticeType::Unarchive => "UNARCHIVE",
            NoticeType::Itb => "ITB",
            NoticeType::Fstd => "FSTD",
            NoticeType::Epsupload => "EPSUPLOAD",
            NoticeType::Delete => "DELETE",
        }
    }

    pub fn from_code(code: &str) -> Option<NoticeType> {
        NoticeType::ALL.iter().copied().find(|t| t.as_code() == code)
    }
}

/// One raw piece of sub-field text, prior to merging. Continuation lines
/// extend the `text` of an existing fragment in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubFieldFragment {
    pub name: String,
    pub text: String,
}

impl SubFieldFragment {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A finalized notice: field name to merged text value.
pub type MergedNotice = BTreeMap<String, String>;

/// The full parse result for one nightly feed. Every `NoticeType` key is
/// present, including types with zero occurrences that night.
pub type FeedOutput = BTreeMap<NoticeType, Vec<MergedNotice>>;

/// Configuration for a multi-date batch ingest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestConfig {
    /// Base URL of the nightly feed; the YYYYMMDD date stamp is appended.
    pub base_url: String,
    /// How many days back from today to ingest (yesterday first).
    pub days_back: u32,
    /// Directory receiving one `fbo_nightly_<date>.json` per date.
    pub out_dir: String,
    /// Maximum fetch attempts per date before the date is declared failed.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Initial retry backoff in milliseconds; doubles per attempt.
    #[serde(default = "default_backoff_ms")]
    pub initial_backoff_ms: u64,
    /// Keep only records carrying a non-empty value for this field.
    #[serde(default)]
    pub required_field: Option<String>,
    /// Keep only records whose lower-cased `agency` field is in this list.
    #[serde(default)]
    pub agencies: Option<Vec<String>>,
    /// NAICS code prefixes; records whose `naics` field matches none are dropped.
    #[serde(default)]
    pub naics: Option<Vec<String>>,
    /// Rename raw field tokens to display names in the written output.
    #[serde(default)]
    pub display_names: bool,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    2000
}

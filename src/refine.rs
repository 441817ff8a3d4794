use crate::types::MergedNotice;

/// Agency names (lower-cased) covering the Department of Defense, the
/// default downstream filter for procurement reporting.
pub const DOD_AGENCIES: &[&str] = &[
    "department of the navy",
    "department of the army",
    "other defense agencies",
    "department of the air force",
];

/// Raw feed field tokens mapped to human-readable display names. Tokens not
/// listed here pass through unchanged.
pub const FIELD_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("subject", "Solicitation Name"),
    ("agency", "Agency"),
    ("office", "Office"),
    ("contact", "Primary POC"),
    ("solnbr", "Solicitation Number"),
    ("ntype", "Notice Type"),
    ("date", "Posted Date"),
    ("respdate", "Response Date"),
    ("setaside", "Set Aside"),
    ("classcod", "Classification Code"),
    ("naics", "NAICS Code"),
    ("url", "Link"),
    ("awdamt", "Award Amount"),
    ("awddate", "Award Date"),
    ("awdnbr", "Award Number"),
    ("awardee", "Awardee"),
    ("desc", "Description"),
    ("email", "Email"),
];

/// Keep only records carrying a non-empty value for `field`.
pub fn retain_with_field(records: &mut Vec<MergedNotice>, field: &str) {
    records.retain(|record| record.get(field).is_some_and(|value| !value.is_empty()));
}

/// Keep only records whose `agency` field, lower-cased, appears in
/// `agencies`. Records without an agency field are dropped.
pub fn retain_by_agency(records: &mut Vec<MergedNotice>, agencies: &[impl AsRef<str>]) {
    records.retain(|record| {
        record.get("agency").is_some_and(|agency| {
            let lowered = agency.to_lowercase();
            agencies
                .iter()
                .any(|candidate| candidate.as_ref().to_lowercase() == lowered)
        })
    });
}

/// Keep only records whose `naics` field starts with one of the given code
/// prefixes (a short prefix acts as a wildcard). Records without a NAICS
/// field are dropped.
pub fn retain_naics_prefix(records: &mut Vec<MergedNotice>, prefixes: &[impl AsRef<str>]) {
    records.retain(|record| {
        record.get("naics").is_some_and(|naics| {
            let digits: String = naics.chars().filter(char::is_ascii_digit).collect();
            prefixes
                .iter()
                .any(|prefix| digits.starts_with(prefix.as_ref()))
        })
    });
}

/// Add a `flag_field` to every record: "Present" when `field` contains
/// `word`, "Absent" otherwise (including when the field is missing).
pub fn flag_contains(records: &mut [MergedNotice], field: &str, word: &str, flag_field: &str) {
    for record in records.iter_mut() {
        let present = record
            .get(field)
            .is_some_and(|value| value.contains(word));
        let flag = if present { "Present" } else { "Absent" };
        record.insert(flag_field.to_string(), flag.to_string());
    }
}

/// Rebuild a record with raw field tokens replaced by display names.
pub fn display_names(record: &MergedNotice) -> MergedNotice {
    record
        .iter()
        .map(|(name, value)| (display_name(name).to_string(), value.clone()))
        .collect()
}

fn display_name(raw: &str) -> &str {
    for &(token, display) in FIELD_DISPLAY_NAMES {
        if token == raw {
            return display;
        }
    }
    raw
}

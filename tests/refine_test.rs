use fbo_ingest::refine::{
    display_names, flag_contains, retain_by_agency, retain_naics_prefix, retain_with_field,
    DOD_AGENCIES,
};
use fbo_ingest::types::MergedNotice;

fn record(fields: &[(&str, &str)]) -> MergedNotice {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn retain_with_field_drops_missing_and_empty() {
    let mut records = vec![
        record(&[("zip", "20001"), ("agency", "a")]),
        record(&[("agency", "b")]),
        record(&[("zip", ""), ("agency", "c")]),
    ];
    retain_with_field(&mut records, "zip");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("agency").map(String::as_str), Some("a"));
}

#[test]
fn retain_by_agency_matches_case_insensitively() {
    let mut records = vec![
        record(&[("agency", "Department of the Navy")]),
        record(&[("agency", "Department of Commerce")]),
        record(&[("subject", "no agency at all")]),
    ];
    retain_by_agency(&mut records, DOD_AGENCIES);
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].get("agency").map(String::as_str),
        Some("Department of the Navy")
    );
}

#[test]
fn retain_naics_prefix_acts_as_wildcard() {
    let mut records = vec![
        record(&[("naics", "334111")]),
        record(&[("naics", "518210")]),
        record(&[("naics", "236220")]),
    ];
    retain_naics_prefix(&mut records, &["3341", "518"]);
    assert_eq!(records.len(), 2);
}

#[test]
fn retain_naics_prefix_ignores_non_digit_noise() {
    // Feed values sometimes carry stray punctuation around the code.
    let mut records = vec![record(&[("naics", " 334111.")])];
    retain_naics_prefix(&mut records, &["334"]);
    assert_eq!(records.len(), 1);
}

#[test]
fn flag_contains_marks_present_and_absent() {
    let mut records = vec![
        record(&[("desc", "on-site training course")]),
        record(&[("desc", "hardware delivery")]),
        record(&[("subject", "no desc")]),
    ];
    flag_contains(&mut records, "desc", "train", "Train in Desc");
    assert_eq!(
        records[0].get("Train in Desc").map(String::as_str),
        Some("Present")
    );
    assert_eq!(
        records[1].get("Train in Desc").map(String::as_str),
        Some("Absent")
    );
    assert_eq!(
        records[2].get("Train in Desc").map(String::as_str),
        Some("Absent")
    );
}

#[test]
fn display_names_renames_known_tokens_and_keeps_unknown() {
    let renamed = display_names(&record(&[
        ("solnbr", "ABC123"),
        ("subject", "Widgets"),
        ("custom", "kept"),
    ]));
    assert_eq!(
        renamed.get("Solicitation Number").map(String::as_str),
        Some("ABC123")
    );
    assert_eq!(
        renamed.get("Solicitation Name").map(String::as_str),
        Some("Widgets")
    );
    assert_eq!(renamed.get("custom").map(String::as_str), Some("kept"));
    assert!(renamed.get("solnbr").is_none());
}

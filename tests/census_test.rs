mod common;

use common::fixture_lines;
use fbo_ingest::feed::census::tag_census;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn counts_notice_type_end_tags() {
    let feed = lines(&["<PRESOL>", "<solnbr>A", "</PRESOL>", "<PRESOL>", "</PRESOL>"]);
    let census = tag_census(&feed);
    assert_eq!(census.get("PRESOL"), Some(&2));
}

#[test]
fn ignores_lines_without_end_tags() {
    let feed = lines(&["<PRESOL>", "<desc>text", "plain continuation", ""]);
    assert!(tag_census(&feed).is_empty());
}

#[test]
fn counts_non_notice_end_tags_too() {
    // The census is generic; the caller intersects with the known set.
    let feed = lines(&["</FOOBAR>", "</FOOBAR>", "</AWARD>"]);
    let census = tag_census(&feed);
    assert_eq!(census.get("FOOBAR"), Some(&2));
    assert_eq!(census.get("AWARD"), Some(&1));
}

#[test]
fn strips_non_alphabetic_characters_from_tag_names() {
    let feed = lines(&["trailing text </MOD> more text"]);
    let census = tag_census(&feed);
    assert_eq!(census.get("MOD"), Some(&1));
}

#[test]
fn counts_fixture_feed() {
    let feed = fixture_lines("nightly_sample.txt");
    let census = tag_census(&feed);
    assert_eq!(census.get("PRESOL"), Some(&2));
    assert_eq!(census.get("AWARD"), Some(&1));
    assert_eq!(census.get("ARCHIVE"), Some(&1));
    assert_eq!(census.get("DELETE"), None);
}

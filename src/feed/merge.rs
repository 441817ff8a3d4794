use crate::types::{FeedOutput, MergedNotice, NoticeType, SubFieldFragment};
use std::collections::HashMap;

/// Merge one record's fragments into a single field map. Fragments sharing a
/// field name are concatenated in encounter order, joined by single spaces;
/// fragment order within a field is never changed.
pub fn merge_record(fragments: &[SubFieldFragment]) -> MergedNotice {
    let mut merged = MergedNotice::new();
    for fragment in fragments {
        match merged.get_mut(&fragment.name) {
            Some(value) => {
                value.push(' ');
                value.push_str(&fragment.text);
            }
            None => {
                merged.insert(fragment.name.clone(), fragment.text.clone());
            }
        }
    }
    merged
}

/// Finalize assembled records into the external output shape: every
/// `NoticeType` key present, each mapping to its merged records in
/// positional order. Types with zero occurrences map to an empty sequence.
pub fn build_output(records: HashMap<NoticeType, Vec<Vec<SubFieldFragment>>>) -> FeedOutput {
    let mut output = FeedOutput::new();
    for notice_type in NoticeType::ALL {
        output.insert(notice_type, Vec::new());
    }
    for (notice_type, type_records) in records {
        let merged = type_records
            .iter()
            .map(|fragments| merge_record(fragments))
            .collect();
        output.insert(notice_type, merged);
    }
    output
}

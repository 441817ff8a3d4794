use crate::error::FeedError;
use crate::feed::classify::LineClass;
use crate::types::{NoticeType, SubFieldFragment};
use std::collections::HashMap;

/// Sequential record-assembly state machine.
///
/// Owns the scan state the feed format requires: the most recently opened
/// notice type, each type's running record index, and the per-record ordered
/// fragment lists. Storage is pre-sized from the tag census; the running
/// index may never reach a record slot the census did not account for.
/// Constructed fresh per parse, one per feed.
pub struct Assembler {
    current_type: Option<NoticeType>,
    last_field: Option<String>,
    next_index: HashMap<NoticeType, usize>,
    records: HashMap<NoticeType, Vec<Vec<SubFieldFragment>>>,
}

impl Assembler {
    /// Build an assembler with per-type capacity taken from the tag census.
    /// Census entries outside the known `NoticeType` set are ignored here;
    /// types absent from the census get zero capacity.
    pub fn with_census(census: &HashMap<String, usize>) -> Self {
        let mut next_index = HashMap::new();
        let mut records = HashMap::new();
        for notice_type in NoticeType::ALL {
            let capacity = census.get(notice_type.as_code()).copied().unwrap_or(0);
            next_index.insert(notice_type, 0);
            records.insert(notice_type, vec![Vec::new(); capacity]);
        }
        Self {
            current_type: None,
            last_field: None,
            next_index,
            records,
        }
    }

    /// Feed one classified line into the state machine.
    pub fn apply(&mut self, class: LineClass) -> Result<(), FeedError> {
        match class {
            LineClass::TypeOpened(notice_type) => {
                self.current_type = Some(notice_type);
                Ok(())
            }
            LineClass::TypeClosed => self.close_record(),
            LineClass::NewFragment { name, text } => self.push_fragment(name, text),
            LineClass::Continuation(text) => self.extend_last_fragment(&text),
        }
    }

    fn close_record(&mut self) -> Result<(), FeedError> {
        let notice_type = self.current_type.ok_or_else(|| {
            FeedError::MalformedFeed("notice end tag with no open notice type".to_string())
        })?;
        let capacity = self.records.get(&notice_type).map(Vec::len).unwrap_or(0);
        let index = self.next_index.entry(notice_type).or_insert(0);
        if *index >= capacity {
            return Err(FeedError::MalformedFeed(format!(
                "more {} records closed than the tag census counted ({capacity})",
                notice_type.as_code()
            )));
        }
        *index += 1;
        Ok(())
    }

    fn push_fragment(&mut self, name: String, text: String) -> Result<(), FeedError> {
        let (notice_type, index) = self.open_record_slot("field line")?;
        self.last_field = Some(name.clone());
        self.records
            .get_mut(&notice_type)
            .and_then(|records| records.get_mut(index))
            .ok_or_else(|| {
                FeedError::MalformedFeed(format!(
                    "{} record index {index} exceeds census capacity",
                    notice_type.as_code()
                ))
            })?
            .push(SubFieldFragment::new(name, text));
        Ok(())
    }

    fn extend_last_fragment(&mut self, text: &str) -> Result<(), FeedError> {
        let (notice_type, index) = self.open_record_slot("continuation line")?;
        let last_field = self.last_field.as_deref().ok_or_else(|| {
            FeedError::MalformedFeed("continuation line before any field tag".to_string())
        })?;
        let record = self
            .records
            .get_mut(&notice_type)
            .and_then(|records| records.get_mut(index))
            .ok_or_else(|| {
                FeedError::MalformedFeed(format!(
                    "{} record index {index} exceeds census capacity",
                    notice_type.as_code()
                ))
            })?;
        let fragment = record
            .iter_mut()
            .rev()
            .find(|fragment| fragment.name == last_field)
            .ok_or_else(|| {
                FeedError::MalformedFeed(format!(
                    "continuation line with no prior <{last_field}> fragment on this record"
                ))
            })?;
        fragment.text.push(' ');
        fragment.text.push_str(text);
        Ok(())
    }

    fn open_record_slot(&self, what: &str) -> Result<(NoticeType, usize), FeedError> {
        let notice_type = self.current_type.ok_or_else(|| {
            FeedError::MalformedFeed(format!("{what} with no open notice type"))
        })?;
        let index = self.next_index.get(&notice_type).copied().unwrap_or(0);
        Ok((notice_type, index))
    }

    /// Consume the assembler after the full scan, yielding every pre-sized
    /// record slot per type in positional order. Nothing is mutated after
    /// this point.
    pub fn into_records(self) -> HashMap<NoticeType, Vec<Vec<SubFieldFragment>>> {
        self.records
    }
}

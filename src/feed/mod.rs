use crate::error::FeedError;
use crate::types::FeedOutput;

pub mod assemble;
pub mod census;
pub mod classify;
pub mod merge;

/// Convert one nightly feed, as an ordered line sequence, into structured
/// records. The scan is strictly sequential: classification depends on the
/// most recently opened notice type and most recently seen field name.
pub fn parse_feed(lines: &[String]) -> Result<FeedOutput, FeedError> {
    let census = census::tag_census(lines);
    let mut assembler = assemble::Assembler::with_census(&census);
    for line in lines {
        assembler.apply(classify::classify_line(line))?;
    }
    Ok(merge::build_output(assembler.into_records()))
}

use crate::error::{ParseError, ParseResult};
use crate::expand::{Block, Entry};
use crate::tag::TagTable;

const HEADER_PREFIX: [(&str, u32, &str); 3] = [
    ("BeginString", 8, "STRING"),
    ("BodyLength", 9, "LENGTH"),
    ("MsgType", 35, "STRING"),
];

const TRAILER_SUFFIX: (&str, u32, &str) = ("CheckSum", 10, "STRING");

fn matches_regular(block: &Block, idx: usize, name: &str, value: u32, data_type: &str, tags: &TagTable) -> bool {
    let (entry_name, entry) = &block[idx];
    entry_name == name
        && matches!(entry, Entry::Regular { value: v } if *v == value)
        && tags.get(name).and_then(|t| t.data_type()) == Some(data_type)
}

/// Verifies the header begins with `BeginString`, `BodyLength`, `MsgType`
/// (by name and by tag-record equality), then strips them.
pub fn validate_and_strip_header(block: Block, tags: &TagTable) -> ParseResult<Block> {
    if block.len() < HEADER_PREFIX.len() {
        return Err(ParseError::HeaderTooShort);
    }
    for (i, (name, value, data_type)) in HEADER_PREFIX.iter().enumerate() {
        if !matches_regular(&block, i, name, *value, data_type, tags) {
            return Err(ParseError::InvalidHeader {
                position: i,
                found: block[i].0.clone(),
                expected: name,
            });
        }
    }
    Ok(block.into_iter().skip(HEADER_PREFIX.len()).collect())
}

/// Verifies the trailer is non-empty and ends with `CheckSum`, then strips
/// the trailing `CheckSum` entry. Other trailer entries are retained.
pub fn validate_and_strip_trailer(mut block: Block, tags: &TagTable) -> ParseResult<Block> {
    if block.is_empty() {
        return Err(ParseError::InvalidTrailer);
    }
    let last = block.len() - 1;
    let (name, value, data_type) = TRAILER_SUFFIX;
    if !matches_regular(&block, last, name, value, data_type, tags) {
        return Err(ParseError::InvalidTrailer);
    }
    block.pop();
    Ok(block)
}

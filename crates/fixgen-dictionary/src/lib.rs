//! Semantic analysis for QuickFIX-style FIX dictionaries.
//!
//! Turns a single XML specification into a normalized [`Dictionary`]: a
//! frozen tag table, a dependency-ordered group list, a common block, and a
//! map of messages, all with components inlined, groups expanded exactly
//! once, and DATA/LENGTH pairs folded together. This crate does not parse
//! FIX wire messages — it produces the tables a code generator needs to
//! describe how to.

mod block;
mod component_table;
mod dictionary;
mod error;
mod expand;
mod header_trailer;
mod message_table;
mod ordered_map;
mod prune;
mod tag;
mod xml_loader;

pub use block::{RawBlock, RawEntry};
pub use component_table::ComponentTable;
pub use dictionary::{Dictionary, Message};
pub use error::{ParseError, ParseResult};
pub use expand::{canonical_group_name, Block, Entry};
pub use message_table::{MessageTable, RawMessage};
pub use ordered_map::OrderedMap;
pub use prune::PrunedGroup;
pub use tag::{Tag, TagKind, TagTable, TagValue};
pub use xml_loader::FixVersion;

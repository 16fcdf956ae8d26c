use crate::block::{RawBlock, RawEntry};
use crate::component_table::ComponentTable;
use crate::error::{ParseError, ParseResult};
use crate::ordered_map::OrderedMap;
use crate::tag::{TagKind, TagValue};

const MAX_DEPTH: usize = 10;

/// A fully resolved block entry. Components have been inlined and groups
/// expanded exactly once; `DataLength` tags never survive expansion (they
/// are folded into the `Data` entry that follows them).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Regular { value: TagValue },
    Data { value: TagValue, length_tag_value: TagValue },
    Group { size_tag_name: String, canonical_name: String },
}

pub type Block = Vec<(String, Entry)>;

/// Canonical name of a group expanded under `path`: `parentPath_sizeTagName`,
/// disambiguating groups that share a sizeTag across different scopes.
pub fn canonical_group_name(path: &[String], size_tag_name: &str) -> String {
    if path.is_empty() {
        size_tag_name.to_string()
    } else {
        format!("{}_{}", path.join("_"), size_tag_name)
    }
}

struct Pending {
    length_tag_name: String,
    data_tag_name: String,
    length_tag_value: TagValue,
}

/// Walks raw blocks and produces fully resolved ones. Owns the ambient
/// component table (read-only) and accumulates expanded groups as it goes;
/// the accumulated group map is read back by the pruner afterwards.
pub struct Expander<'a> {
    components: &'a ComponentTable,
    pub groups: OrderedMap<String, Block>,
    visiting: Vec<String>,
}

impl<'a> Expander<'a> {
    pub fn new(components: &'a ComponentTable) -> Self {
        Self {
            components,
            groups: OrderedMap::new(),
            visiting: Vec::new(),
        }
    }

    pub fn expand_block(&mut self, raw: &RawBlock, path: &[String], depth: usize) -> ParseResult<Block> {
        if depth > MAX_DEPTH {
            return Err(ParseError::CycleSuspected(path.join("/")));
        }

        let mut out: Block = Vec::new();
        let mut pending: Option<Pending> = None;

        for (name, entry) in raw {
            match entry {
                RawEntry::Field(tag) => match &tag.kind {
                    TagKind::Regular { .. } => {
                        out.push((name.clone(), Entry::Regular { value: tag.value }));
                    }
                    TagKind::Data { length_tag_value } => match pending.take() {
                        Some(p) if p.data_tag_name == *name => {
                            out.push((
                                name.clone(),
                                Entry::Data {
                                    value: tag.value,
                                    length_tag_value: p.length_tag_value,
                                },
                            ));
                        }
                        Some(p) => {
                            return Err(ParseError::LengthDataMismatch {
                                length_tag: p.length_tag_name,
                                found: name.clone(),
                                expected: p.data_tag_name,
                            })
                        }
                        None => return Err(ParseError::UnexpectedDataTag(name.clone())),
                    },
                    TagKind::DataLength { data_tag_name } => {
                        pending = Some(Pending {
                            length_tag_name: name.clone(),
                            data_tag_name: data_tag_name.clone(),
                            length_tag_value: tag.value,
                        });
                    }
                },
                RawEntry::Component(component_name) => {
                    if let Some(p) = pending.take() {
                        return Err(ParseError::LengthDataMismatch {
                            length_tag: p.length_tag_name,
                            found: format!("<component:{component_name}>"),
                            expected: p.data_tag_name,
                        });
                    }
                    if self.visiting.contains(component_name) {
                        return Err(ParseError::CycleSuspected(component_name.clone()));
                    }
                    let body = self
                        .components
                        .get(component_name)
                        .ok_or_else(|| ParseError::UnknownComponent(component_name.clone()))?
                        .clone();
                    self.visiting.push(component_name.clone());
                    let mut nested_path = path.to_vec();
                    nested_path.push(component_name.clone());
                    let expanded = self.expand_block(&body, &nested_path, depth + 1);
                    self.visiting.pop();
                    out.extend(expanded?);
                }
                RawEntry::Group { size_tag_name, body } => {
                    let canonical = canonical_group_name(path, size_tag_name);
                    if !self.groups.contains_key(&canonical) {
                        let mut nested_path = path.to_vec();
                        nested_path.push(size_tag_name.clone());
                        let expanded_body = self.expand_block(body, &nested_path, depth + 1)?;
                        self.groups.insert(canonical.clone(), expanded_body);
                    }
                    out.push((
                        size_tag_name.clone(),
                        Entry::Group {
                            size_tag_name: size_tag_name.clone(),
                            canonical_name: canonical,
                        },
                    ));
                }
            }
        }

        // A DataLength left pending at block end is preserved verbatim as an
        // ordinary entry. Upstream intent is unclear; behavior kept as-is
        // per the open question in the design notes.
        if let Some(p) = pending {
            out.push((p.length_tag_name, Entry::Regular { value: p.length_tag_value }));
        }

        Ok(out)
    }
}

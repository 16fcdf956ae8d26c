use crate::error::{ParseError, ParseResult};
use crate::ordered_map::OrderedMap;
use roxmltree::Node;

pub type TagValue = u32;

/// The kind of a [`Tag`], closed per the three payload shapes the analyzer
/// ever needs to distinguish. `NumInGroup` fields are deliberately left as
/// plain [`TagKind::Regular`] entries with `data_type == "NUMINGROUP"`; the
/// spec never promotes them to a distinct kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagKind {
    Regular { data_type: String },
    Data { length_tag_value: TagValue },
    DataLength { data_tag_name: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub value: TagValue,
    pub kind: TagKind,
}

impl Tag {
    pub fn is_num_in_group(&self) -> bool {
        matches!(&self.kind, TagKind::Regular { data_type } if data_type == "NUMINGROUP")
    }

    pub fn data_type(&self) -> Option<&str> {
        match &self.kind {
            TagKind::Regular { data_type } => Some(data_type.as_str()),
            _ => None,
        }
    }
}

/// The frozen catalogue of every field declared in `<fields>`. Built once by
/// [`build_tag_table`], then mutated exactly once to promote DATA/LENGTH
/// pairs, then never modified again.
pub type TagTable = OrderedMap<String, Tag>;

/// Reads `fix/fields/field` entries into a name-keyed [`TagTable`], then
/// promotes DATA/LENGTH pairs in place.
pub fn build_tag_table(fields_el: Node) -> ParseResult<TagTable> {
    let mut table = TagTable::new();

    for field_el in fields_el.children().filter(|n| n.has_tag_name("field")) {
        let name = attr(field_el, "name")?;
        let number = attr(field_el, "number")?;
        let data_type = attr(field_el, "type")?;
        let value: TagValue = number
            .parse()
            .map_err(|_| ParseError::InvalidTagNumber(name.to_string()))?;
        table.insert(
            name.to_string(),
            Tag {
                name: name.to_string(),
                value,
                kind: TagKind::Regular {
                    data_type: data_type.to_string(),
                },
            },
        );
    }

    if table.is_empty() {
        return Err(ParseError::NoFields);
    }

    promote_data_length_pairs(&mut table)?;
    Ok(table)
}

/// For every field with `dataType == DATA`, finds its companion length field
/// (by suffixing `Len` then `Length`) and reclassifies both. The first
/// candidate suffix that both exists and has `dataType == LENGTH` wins.
fn promote_data_length_pairs(table: &mut TagTable) -> ParseResult<()> {
    let data_names: Vec<String> = table
        .iter()
        .filter(|(_, tag)| tag.data_type() == Some("DATA"))
        .map(|(name, _)| name.clone())
        .collect();

    for data_name in data_names {
        let length_name = ["Len", "Length"]
            .iter()
            .map(|suffix| format!("{data_name}{suffix}"))
            .find(|candidate| {
                table
                    .get(candidate)
                    .map(|tag| tag.data_type() == Some("LENGTH"))
                    .unwrap_or(false)
            })
            .ok_or_else(|| ParseError::MissingLengthTag(data_name.clone()))?;

        let length_value = table.get(&length_name).unwrap().value;

        promote(table, &data_name, TagKind::Data { length_tag_value: length_value });
        promote(
            table,
            &length_name,
            TagKind::DataLength { data_tag_name: data_name.clone() },
        );
    }

    Ok(())
}

fn promote(table: &mut TagTable, name: &str, kind: TagKind) {
    // `OrderedMap` is append-only by design; promotion is the one sanctioned
    // in-place mutation the lifecycle in the spec allows, so we rebuild the
    // single affected slot directly rather than exposing a general `insert`
    // overwrite on the public API.
    let rebuilt: Vec<(String, Tag)> = table
        .iter()
        .map(|(k, v)| {
            if k == name {
                (
                    k.clone(),
                    Tag {
                        name: v.name.clone(),
                        value: v.value,
                        kind: kind.clone(),
                    },
                )
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect();
    *table = TagTable::new();
    for (k, v) in rebuilt {
        table.insert(k, v);
    }
}

/// Reads a required attribute off an element, failing with `XmlParse` if
/// absent (the schema names `name`/`number`/`type`/etc. as required but the
/// taxonomy has no dedicated kind for a malformed element — it is, by
/// definition, not valid input).
pub(crate) fn attr<'a>(node: Node<'a, '_>, name: &'static str) -> ParseResult<&'a str> {
    node.attribute(name).ok_or_else(|| {
        ParseError::XmlParse(format!(
            "`{}` element is missing required attribute `{name}`",
            node.tag_name().name()
        ))
    })
}

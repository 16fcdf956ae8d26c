use crate::error::{ParseError, ParseResult};
use crate::tag::{attr, Tag, TagTable};
use roxmltree::Node;

/// A raw, unexpanded block entry. Components are left as placeholders here —
/// resolving them is the expander's job, not the reader's.
#[derive(Clone, Debug)]
pub enum RawEntry {
    Field(Tag),
    Component(String),
    Group { size_tag_name: String, body: RawBlock },
}

pub type RawBlock = Vec<(String, RawEntry)>;

/// Converts any XML block (component body, group body, message body, header,
/// trailer) into an ordered sequence of `(name, entry)` pairs. `path` is the
/// current dotted location, used only to build diagnostics.
pub fn read_block(el: Node, path: &[String], tags: &TagTable) -> ParseResult<RawBlock> {
    let path_str = || path.join("/");
    let mut block: RawBlock = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for child in el.children().filter(|n| n.is_element()) {
        let (name, entry) = match child.tag_name().name() {
            "field" => {
                let name = attr(child, "name")?.to_string();
                let tag = tags.get(&name).cloned().ok_or_else(|| ParseError::UnknownNode {
                    path: path_str(),
                    name: name.clone(),
                })?;
                (name, RawEntry::Field(tag))
            }
            "component" => {
                let name = attr(child, "name")?.to_string();
                (name.clone(), RawEntry::Component(name))
            }
            "group" => {
                let size_tag_name = attr(child, "name")?.to_string();
                let size_tag = tags.get(&size_tag_name).ok_or_else(|| ParseError::UnknownNode {
                    path: path_str(),
                    name: size_tag_name.clone(),
                })?;
                if !size_tag.is_num_in_group() {
                    return Err(ParseError::UnknownNode {
                        path: path_str(),
                        name: size_tag_name.clone(),
                    });
                }
                let mut nested_path = path.to_vec();
                nested_path.push(size_tag_name.clone());
                let body = read_block(child, &nested_path, tags)?;
                (
                    size_tag_name.clone(),
                    RawEntry::Group { size_tag_name, body },
                )
            }
            // Unrecognized children (documentation nodes, etc.) are ignored;
            // the schema in scope only recognizes field/component/group.
            _ => continue,
        };

        if !seen.insert(name.clone()) {
            return Err(ParseError::DuplicateTag {
                path: path_str(),
                name,
            });
        }
        block.push((name, entry));
    }

    if block.is_empty() {
        return Err(ParseError::EmptyBlock(path_str()));
    }

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::build_tag_table;

    fn table() -> TagTable {
        let doc = roxmltree::Document::parse(
            r#"<fields>
                 <field name="Account" number="1" type="STRING"/>
                 <field name="NoOrders" number="73" type="NUMINGROUP"/>
                 <field name="ClOrdID" number="11" type="STRING"/>
               </fields>"#,
        )
        .unwrap();
        build_tag_table(doc.root_element()).unwrap()
    }

    fn parse_body(xml: &str) -> roxmltree::Document<'static> {
        roxmltree::Document::parse(Box::leak(xml.to_string().into_boxed_str())).unwrap()
    }

    #[test]
    fn reads_field_component_group_children() {
        let tags = table();
        let doc = parse_body(
            r#"<msg>
                 <field name="Account"/>
                 <component name="Instrument"/>
                 <group name="NoOrders"><field name="ClOrdID"/></group>
               </msg>"#,
        );
        let block = read_block(doc.root_element(), &[], &tags).unwrap();
        assert_eq!(block.len(), 3);
        assert!(matches!(block[0].1, RawEntry::Field(_)));
        assert!(matches!(block[1].1, RawEntry::Component(_)));
        assert!(matches!(block[2].1, RawEntry::Group { .. }));
    }

    #[test]
    fn duplicate_name_is_fatal() {
        let tags = table();
        let doc = parse_body(r#"<msg><field name="Account"/><field name="Account"/></msg>"#);
        let err = read_block(doc.root_element(), &[], &tags).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateTag { .. }));
    }

    #[test]
    fn empty_block_is_fatal() {
        let tags = table();
        let doc = parse_body("<msg></msg>");
        let err = read_block(doc.root_element(), &[], &tags).unwrap_err();
        assert!(matches!(err, ParseError::EmptyBlock(_)));
    }

    #[test]
    fn unknown_field_name_is_fatal() {
        let tags = table();
        let doc = parse_body(r#"<msg><field name="Bogus"/></msg>"#);
        let err = read_block(doc.root_element(), &[], &tags).unwrap_err();
        assert!(matches!(err, ParseError::UnknownNode { .. }));
    }
}

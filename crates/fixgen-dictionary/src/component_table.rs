use crate::block::{read_block, RawBlock};
use crate::error::{ParseError, ParseResult};
use crate::ordered_map::OrderedMap;
use crate::tag::{attr, TagTable};
use roxmltree::Node;

/// Map from component name to its raw (unexpanded) block.
pub type ComponentTable = OrderedMap<String, RawBlock>;

pub fn build_component_table(components_el: Node, tags: &TagTable) -> ParseResult<ComponentTable> {
    let mut table = ComponentTable::new();
    for component_el in components_el
        .children()
        .filter(|n| n.has_tag_name("component"))
    {
        let name = attr(component_el, "name")?.to_string();
        let block = read_block(component_el, &[name.clone()], tags)?;
        if !table.insert(name.clone(), block) {
            return Err(ParseError::DuplicateTag {
                path: "components".to_string(),
                name,
            });
        }
    }
    Ok(table)
}

use crate::block::{read_block, RawBlock};
use crate::error::{ParseError, ParseResult};
use crate::ordered_map::OrderedMap;
use crate::tag::{attr, TagTable};
use roxmltree::Node;

pub struct RawMessage {
    pub msg_type: String,
    pub block: RawBlock,
}

/// Map from message name to `(msgtype, raw block)`.
pub type MessageTable = OrderedMap<String, RawMessage>;

pub fn build_message_table(messages_el: Node, tags: &TagTable) -> ParseResult<MessageTable> {
    let mut table = MessageTable::new();
    for message_el in messages_el.children().filter(|n| n.has_tag_name("message")) {
        let name = attr(message_el, "name")?.to_string();
        let msg_type = attr(message_el, "msgtype")?.to_string();
        if msg_type.is_empty() {
            return Err(ParseError::XmlParse(format!(
                "message `{name}` has an empty msgtype"
            )));
        }
        let block = read_block(message_el, &[name.clone()], tags)?;
        if !table.insert(name.clone(), RawMessage { msg_type, block }) {
            return Err(ParseError::DuplicateTag {
                path: "messages".to_string(),
                name,
            });
        }
    }
    Ok(table)
}

use crate::error::{CliError, CliResult};
use fixgen_dictionary::Dictionary;
use std::fmt::Write as _;

const SOH: char = '\u{1}';

struct Node {
    children: Vec<(char, usize)>,
    end_name: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self { children: Vec::new(), end_name: None }
    }

    fn is_pure_leaf(&self) -> bool {
        self.children.is_empty() && self.end_name.is_some()
    }
}

struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    fn new() -> Self {
        Self { nodes: vec![Node::new()] }
    }

    fn insert(&mut self, name: &str, msgtype: &str) -> CliResult<()> {
        let mut current = 0;
        for c in msgtype.chars() {
            current = match self.nodes[current].children.iter().find(|(ch, _)| *ch == c) {
                Some((_, idx)) => *idx,
                None => {
                    let idx = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[current].children.push((c, idx));
                    idx
                }
            };
        }
        if self.nodes[current].end_name.is_some() {
            return Err(CliError::DuplicateMsgType {
                name: name.to_string(),
                msgtype: msgtype.to_string(),
            });
        }
        self.nodes[current].end_name = Some(name.to_string());
        Ok(())
    }
}

/// Builds the trie over every message's msgtype string, in declaration
/// order, failing on the first repeated msgtype.
fn build_trie(dict: &Dictionary) -> CliResult<Trie> {
    let mut trie = Trie::new();
    for (name, message) in dict.messages.iter() {
        trie.insert(name, &message.msg_type)?;
    }
    Ok(trie)
}

/// Emits the message-type dispatch as a sequence of labeled `switch`
/// statements: the root switch first, then one switch per queued subtree,
/// each processed in LIFO order so the listing is depth-first with related
/// labels clustered together.
pub fn dispatch_table(dict: &Dictionary) -> CliResult<String> {
    let trie = build_trie(dict)?;
    let mut out = String::new();
    let mut queue: Vec<(String, usize)> = vec![(String::new(), 0)];

    // The root switch is processed first (LIFO pop of the only seed entry);
    // everything discovered while emitting it is pushed onto the same stack.
    while let Some((label, node_idx)) = queue.pop() {
        emit_switch(&mut out, &trie, &label, node_idx, &mut queue);
    }
    Ok(out)
}

fn emit_switch(out: &mut String, trie: &Trie, label: &str, node_idx: usize, queue: &mut Vec<(String, usize)>) {
    let node = &trie.nodes[node_idx];
    if !label.is_empty() {
        let _ = writeln!(out, "_{label}:");
    }
    let _ = writeln!(out, "switch (*p++) {{");

    if let Some(name) = &node.end_name {
        let _ = writeln!(out, "case 0x{:02x}: RETURN_MESSAGE({name});", SOH as u32);
    }

    let mut children = node.children.clone();
    children.sort_by_key(|(c, _)| *c);
    for (c, child_idx) in children {
        let child = &trie.nodes[child_idx];
        if child.is_pure_leaf() {
            let name = child.end_name.as_ref().expect("pure leaf has a name");
            let _ = writeln!(out, "case '{c}': RETURN_MESSAGE_OR_NULL({name});");
        } else {
            let child_label = format!("{label}{c}");
            let _ = writeln!(out, "case '{c}': goto _{child_label};");
            queue.push((child_label, child_idx));
        }
    }

    let _ = writeln!(out, "default: return NULL;");
    let _ = writeln!(out, "}}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict_with_messages(pairs: &[(&str, &str)]) -> Dictionary {
        let mut messages = String::new();
        let mut fields = String::new();
        fields.push_str(r#"<field name="BeginString" number="8" type="STRING"/>
            <field name="BodyLength" number="9" type="LENGTH"/>
            <field name="MsgType" number="35" type="STRING"/>
            <field name="CheckSum" number="10" type="STRING"/>
            <field name="Account" number="1" type="STRING"/>"#);
        for (name, msgtype) in pairs {
            messages.push_str(&format!(
                r#"<message name="{name}" msgtype="{msgtype}"><field name="Account"/></message>"#
            ));
        }
        let xml = format!(
            r#"<fix type="FIX" major="4" minor="2">
                <fields>{fields}</fields>
                <components></components>
                <messages>{messages}</messages>
                <header><field name="BeginString"/><field name="BodyLength"/><field name="MsgType"/></header>
                <trailer><field name="CheckSum"/></trailer>
            </fix>"#
        );
        Dictionary::from_quickfix_xml(&xml).unwrap()
    }

    #[test]
    fn single_message_collapses_to_one_switch() {
        let dict = dict_with_messages(&[("Heartbeat", "0")]);
        let text = dispatch_table(&dict).unwrap();
        assert!(text.contains("case '0': RETURN_MESSAGE_OR_NULL(Heartbeat);"));
        assert!(text.contains("default: return NULL;"));
        assert_eq!(text.matches("switch").count(), 1);
    }

    #[test]
    fn duplicate_msgtype_is_fatal() {
        let dict = dict_with_messages(&[("Order", "D"), ("Other", "D")]);
        let err = dispatch_table(&dict).unwrap_err();
        assert!(matches!(err, CliError::DuplicateMsgType { .. }));
    }

    #[test]
    fn diverging_first_character_queues_a_labeled_subtree() {
        let dict = dict_with_messages(&[("NewOrder", "D1"), ("OrderCancel", "D2")]);
        let text = dispatch_table(&dict).unwrap();
        assert!(text.contains("case 'D': goto _D;"));
        assert!(text.contains("_D:"));
        assert!(text.contains("case '1': RETURN_MESSAGE_OR_NULL(NewOrder);"));
        assert!(text.contains("case '2': RETURN_MESSAGE_OR_NULL(OrderCancel);"));
    }
}

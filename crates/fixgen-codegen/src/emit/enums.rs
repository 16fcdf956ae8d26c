use fixgen_dictionary::Dictionary;

/// The tag enum: every reachable tag name, sorted lexicographically, bound
/// to its numeric value.
pub fn tag_enum(dict: &Dictionary) -> String {
    let mut names: Vec<&String> = dict.reachable_tags.keys().collect();
    names.sort();

    let mut out = String::from("typedef enum {\n");
    for name in names {
        let value = dict.reachable_tags.get(name).expect("sorted from reachable_tags keys");
        out.push_str(&format!("    TAG_{name} = {value},\n"));
    }
    out.push_str("} fix_tag;\n");
    out
}

/// The message-type enum: every message name, sorted lexicographically, with
/// its msgtype string as a trailing comment.
pub fn message_enum(dict: &Dictionary) -> String {
    let mut names: Vec<&String> = dict.messages.keys().collect();
    names.sort();

    let mut out = String::from("typedef enum {\n");
    for name in names {
        let msg = dict.messages.get(name).expect("sorted from messages keys");
        out.push_str(&format!("    MSG_{name}, /* \"{}\" */\n", msg.msg_type));
    }
    out.push_str("} fix_msg_type;\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Dictionary {
        let xml = r#"<fix type="FIX" major="4" minor="2">
            <fields>
                <field name="BeginString" number="8" type="STRING"/>
                <field name="BodyLength" number="9" type="LENGTH"/>
                <field name="MsgType" number="35" type="STRING"/>
                <field name="CheckSum" number="10" type="STRING"/>
                <field name="Account" number="1" type="STRING"/>
            </fields>
            <components></components>
            <messages>
                <message name="Heartbeat" msgtype="0"><field name="Account"/></message>
            </messages>
            <header>
                <field name="BeginString"/><field name="BodyLength"/><field name="MsgType"/>
            </header>
            <trailer><field name="CheckSum"/></trailer>
        </fix>"#;
        Dictionary::from_quickfix_xml(xml).unwrap()
    }

    #[test]
    fn tag_enum_is_sorted_and_includes_stripped_framing_tags() {
        let dict = minimal();
        let text = tag_enum(&dict);
        let account_pos = text.find("TAG_Account").unwrap();
        let begin_pos = text.find("TAG_BeginString").unwrap();
        assert!(account_pos < begin_pos, "Account sorts before BeginString");
        assert!(text.contains("TAG_BeginString = 8"));
    }

    #[test]
    fn message_enum_carries_msgtype_comment() {
        let dict = minimal();
        let text = message_enum(&dict);
        assert!(text.contains("MSG_Heartbeat, /* \"0\" */"));
    }
}

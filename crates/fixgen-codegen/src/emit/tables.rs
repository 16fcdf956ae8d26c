use fixgen_dictionary::{Block, Dictionary, Entry};

/// The block's first tag identifier, used to anchor `EMPTY_GROUP_INFO` when
/// a block has no nested groups to list: for a Data entry, its
/// `lengthTagValue`-bearing name is not it — the identifier is the *value*
/// itself; for a Group entry, the sizeTag name; otherwise the entry's local
/// name.
fn first_tag_identifier(block: &Block) -> String {
    match block.first() {
        None => String::new(),
        Some((name, Entry::Regular { .. })) => name.clone(),
        Some((_, Entry::Data { length_tag_value, .. })) => length_tag_value.to_string(),
        Some((_, Entry::Group { size_tag_name, .. })) => size_tag_name.clone(),
    }
}

fn tag_info_line(name: &str, entry: &Entry, index: usize) -> String {
    match entry {
        Entry::Regular { .. } => format!("    REG_TAG_INFO({name}, {index}),\n"),
        Entry::Data { length_tag_value, .. } => {
            format!("    BIN_TAG_INFO({name}, {length_tag_value}, {index}),\n")
        }
        Entry::Group { size_tag_name, .. } => {
            format!("    GRP_TAG_INFO({size_tag_name}, {index}),\n")
        }
    }
}

/// Emits `TAG_INFO_BEGIN(name) ... TAG_INFO_END` for a block, with each
/// entry's index offset by `offset` (0 for groups/common, `len(common)` for
/// messages).
fn tag_info_block(kind: &str, name: &str, block: &Block, offset: usize) -> String {
    let mut out = format!("{kind}_TAG_INFO_BEGIN({name})\n");
    for (i, (entry_name, entry)) in block.iter().enumerate() {
        out.push_str(&tag_info_line(entry_name, entry, offset + i));
    }
    out.push_str(&format!("{kind}_TAG_INFO_END({name})\n"));
    out
}

/// Nested groups directly referenced by `block`, in block order, by
/// canonical name.
fn nested_group_names(block: &Block) -> Vec<&str> {
    block
        .iter()
        .filter_map(|(_, entry)| match entry {
            Entry::Group { canonical_name, .. } => Some(canonical_name.as_str()),
            _ => None,
        })
        .collect()
}

/// Emits the group-info block for `block`: the listing form if it nests any
/// groups, else `EMPTY_GROUP_INFO`.
fn group_info_block(kind: &str, name: &str, block: &Block) -> String {
    let nested = nested_group_names(block);
    if nested.is_empty() {
        format!(
            "EMPTY_GROUP_INFO({}, {})\n",
            block.len(),
            first_tag_identifier(block)
        )
    } else {
        let mut out = format!("{kind}_GROUP_INFO_BEGIN({name})\n");
        for canonical in nested {
            out.push_str(&format!("    GRP_ENTRY({canonical}),\n"));
        }
        out.push_str(&format!("{kind}_GROUP_INFO_END({name})\n"));
        out
    }
}

/// The `groups` template slot: a tag-info block followed by a group-info
/// block for every reachable group, in the pruner's dependency order.
pub fn groups_section(dict: &Dictionary) -> String {
    let mut out = String::new();
    for (canonical, group) in dict.groups.iter() {
        out.push_str(&tag_info_block("GRP", canonical, &group.block, 0));
        out.push_str(&group_info_block("GRP", canonical, &group.block));
        out.push('\n');
    }
    out
}

/// The `common` template slot.
pub fn common_section(dict: &Dictionary) -> String {
    let mut out = tag_info_block("GRP", "common", &dict.common, 0);
    out.push_str(&group_info_block("GRP", "common", &dict.common));
    out
}

/// The `messages` template slot: per-message tag-info and group-info,
/// indexed after the common block's entries.
pub fn messages_section(dict: &Dictionary) -> String {
    let offset = dict.common.len();
    let mut out = String::new();
    for (name, message) in dict.messages.iter() {
        out.push_str(&tag_info_block("MSG", name, &message.block, offset));
        out.push_str(&group_info_block("MSG", name, &message.block));
        out.push('\n');
    }
    out
}

use crate::expand::{Block, Entry};
use crate::ordered_map::OrderedMap;
use crate::tag::{TagTable, TagValue};

/// A group after pruning: its sizeTag name (for `GRP_TAG_INFO`/emission
/// purposes) alongside its fully resolved body.
#[derive(Clone, Debug)]
pub struct PrunedGroup {
    pub size_tag_name: String,
    pub block: Block,
}

pub struct PruneOutput {
    /// `T_out`: every tag name reachable from the common block or any
    /// message, mapped to its numeric value.
    pub tags: OrderedMap<String, TagValue>,
    /// `G_out`: every reachable group, in dependency order (nested groups
    /// appear before the groups that contain them).
    pub groups: OrderedMap<String, PrunedGroup>,
}

/// Visits the common block and every message block, retaining only tags and
/// groups actually reachable, and emitting groups in topological (post)
/// order so forward references never occur downstream.
pub fn prune<'a>(
    common: &Block,
    message_blocks: impl IntoIterator<Item = &'a Block>,
    groups_by_canonical: &OrderedMap<String, Block>,
    tags: &TagTable,
) -> PruneOutput {
    let mut out = PruneOutput {
        tags: OrderedMap::new(),
        groups: OrderedMap::new(),
    };
    visit_block(common, groups_by_canonical, tags, &mut out);
    for block in message_blocks {
        visit_block(block, groups_by_canonical, tags, &mut out);
    }
    out
}

fn visit_block(block: &Block, groups_by_canonical: &OrderedMap<String, Block>, tags: &TagTable, out: &mut PruneOutput) {
    for (name, entry) in block {
        match entry {
            Entry::Regular { value } | Entry::Data { value, .. } => {
                out.tags.insert(name.clone(), *value);
            }
            Entry::Group { size_tag_name, canonical_name } => {
                let size_tag = tags
                    .get(size_tag_name)
                    .expect("sizeTag of a reachable group exists in the tag table");
                out.tags.insert(size_tag_name.clone(), size_tag.value);

                if !out.groups.contains_key(canonical_name) {
                    let body = groups_by_canonical
                        .get(canonical_name)
                        .expect("expanded group body exists")
                        .clone();
                    visit_block(&body, groups_by_canonical, tags, out);
                    out.groups.insert(
                        canonical_name.clone(),
                        PrunedGroup {
                            size_tag_name: size_tag_name.clone(),
                            block: body,
                        },
                    );
                }
            }
        }
    }
}

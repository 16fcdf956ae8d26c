use crate::emit::dispatch::dispatch_table;
use crate::emit::tables::{common_section, groups_section, messages_section};
use crate::error::CliResult;
use crate::template;
use fixgen_dictionary::Dictionary;

/// Assembles the source file by filling every slot of [`template::SOURCE_TEMPLATE`].
pub fn render(dict: &Dictionary, base_name: &str, prefix: &str) -> CliResult<String> {
    let parser_table = dispatch_table(dict)?;
    Ok(template::render(
        base_name,
        prefix,
        &dict.fix_version,
        &groups_section(dict),
        &common_section(dict),
        &messages_section(dict),
        &parser_table,
    ))
}

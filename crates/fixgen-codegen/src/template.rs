use indoc::indoc;

/// The source-file template, embedded directly into the binary rather than
/// loaded from a path relative to the installed executable. Slots are
/// filled by straight substitution; the generator never interprets the
/// template beyond that.
pub const SOURCE_TEMPLATE: &str = indoc! {r#"
    /* Auto-generated by fixgen. Do not edit by hand. */
    #include "{{base_name}}.h"

    static const char *FIX_VERSION = "{{fix_version}}";

    {{groups}}
    {{common}}
    {{messages}}

    {{parser_table}}

    fix_parser *create_{{prefix}}_parser() {
        return fix_parser_new(FIX_VERSION, &{{prefix}}_dispatch);
    }
"#};

pub fn render(base_name: &str, prefix: &str, fix_version: &str, groups: &str, common: &str, messages: &str, parser_table: &str) -> String {
    SOURCE_TEMPLATE
        .replace("{{base_name}}", base_name)
        .replace("{{prefix}}", prefix)
        .replace("{{fix_version}}", fix_version)
        .replace("{{groups}}", groups)
        .replace("{{common}}", common)
        .replace("{{messages}}", messages)
        .replace("{{parser_table}}", parser_table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_slot() {
        let text = render("FIX44", "FIX44", "FIX.4.4", "G", "C", "M", "P");
        assert!(text.contains("FIX44.h"));
        assert!(text.contains("\"FIX.4.4\""));
        assert!(text.contains("create_FIX44_parser"));
        assert!(!text.contains("{{"));
    }
}

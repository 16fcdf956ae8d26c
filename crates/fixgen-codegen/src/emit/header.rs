use crate::emit::enums::{message_enum, tag_enum};
use chrono::Utc;
use fixgen_dictionary::Dictionary;

/// Assembles the full header file: auto-generated banner, `fix.h` include,
/// a C-linkage guard, the two sorted enums, and the constructor declaration.
pub fn render(dict: &Dictionary, prefix: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "/* Auto-generated by fixgen on {} for FIX {}. Do not edit by hand. */\n",
        Utc::now().format("%Y-%m-%d"),
        dict.fix_version
    ));
    out.push_str("#include \"fix.h\"\n\n");
    out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");
    out.push_str(&tag_enum(dict));
    out.push('\n');
    out.push_str(&message_enum(dict));
    out.push('\n');
    out.push_str(&format!("fix_parser *create_{prefix}_parser();\n\n"));
    out.push_str("#ifdef __cplusplus\n}\n#endif\n");
    out
}

use std::path::Path;

/// `stem(basename(path))`, used both for output file names and for the C
/// symbol prefix.
pub fn base_name(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("fix")
        .to_string()
}

/// The C symbol prefix: `base` with every `.` replaced by `_`.
pub fn symbol_prefix(base: &str) -> String {
    base.replace('.', "_")
}

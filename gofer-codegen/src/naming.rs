//! Go reserved words and identifier escaping.

/// Go keywords, which cannot be used as identifiers.
pub const GO_RESERVED: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

pub fn is_reserved(name: &str) -> bool {
    GO_RESERVED.contains(&name)
}

/// Escape a Go keyword with a leading underscore (e.g., "type" -> "_type").
pub fn safe_name(name: &str) -> String {
    if is_reserved(name) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

//! Identifier casing rules shared by the generators.
//!
//! Field names arrive as snake_case (`user_name`) and are rendered in two
//! forms: an exported name (`UserName`) and a parameter name (`userName`).
//! Segments shorter than [`ACRONYM_THRESHOLD`] are treated as acronyms and
//! upper-cased entirely, so `db_id` becomes `DBID` rather than `DbId`.

/// Segments with fewer characters than this are rendered fully upper-cased.
pub const ACRONYM_THRESHOLD: usize = 3;

/// Upper-case the first character of a segment, leaving the rest untouched.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn acronym_or_capitalized(segment: &str) -> String {
    if segment.chars().count() < ACRONYM_THRESHOLD {
        segment.to_uppercase()
    } else {
        capitalize(segment)
    }
}

/// Convert a snake_case name to its exported form (e.g., "user_name" -> "UserName", "db_id" -> "DBID")
pub fn exported_name(raw: &str) -> String {
    raw.split('_').map(acronym_or_capitalized).collect()
}

/// Convert a snake_case name to its parameter form (e.g., "user_name" -> "userName", "db_id" -> "dbID")
///
/// The first segment is always lower-cased, even when it is short enough to
/// count as an acronym.
pub fn param_name(raw: &str) -> String {
    let mut segments = raw.split('_');
    let first = segments.next().unwrap_or_default().to_lowercase();

    segments.fold(first, |mut name, segment| {
        name.push_str(&acronym_or_capitalized(segment));
        name
    })
}

/// Upper-case the leading ASCII letter (e.g., "user" -> "User")
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let mut out = String::with_capacity(s.len());
            out.push(c.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
    }
}

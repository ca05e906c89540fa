//! Upstream schema validation.
//!
//! The emitters trust their input. Run [`validate`] on every structure that
//! comes from outside the program so that malformed schemas are rejected
//! before any source text is produced.

use std::collections::{HashMap, HashSet};

use crate::error::{SchemaError, SchemaResult};
use crate::model::Structure;
use crate::naming::unraw;
use crate::tag::resolve_fields;

/// Strict and reserved keywords as of the 2024 edition.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be written as raw identifiers either.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Largest tag a JCE head can carry.
pub const MAX_TAG: u32 = u8::MAX as u32;

/// Check a structure before generation.
///
/// Rejects, in order of detection: a bad structure name, then per field a
/// bad field name, an empty type name, a repeated field name, a positional
/// tag above [`MAX_TAG`], a tag already used by an earlier field, and a tag
/// the reader/writer counter would not land on.
///
/// The counter starts at `start_tag`, jumps on every `set_tag` and advances
/// by one after each field. A field that resolves without an override must
/// sit exactly where the counter is, otherwise the generated code would put
/// it on a different tag than the schema says.
pub fn validate(structure: &Structure) -> SchemaResult<()> {
    if !is_identifier(&structure.name) {
        return Err(SchemaError::InvalidName(structure.name.clone()));
    }

    let mut names = HashSet::new();
    let mut tags: HashMap<u32, &str> = HashMap::new();
    let mut counter = u32::from(structure.start_tag);

    for (field, resolved) in resolve_fields(&structure.fields, structure.start_tag) {
        if !is_identifier(&field.name) {
            return Err(SchemaError::InvalidFieldName {
                structure: structure.name.clone(),
                field: field.name.clone(),
            });
        }

        if field.type_name.trim().is_empty() {
            return Err(SchemaError::EmptyType {
                structure: structure.name.clone(),
                field: field.name.clone(),
            });
        }

        if !names.insert(unraw(&field.name)) {
            return Err(SchemaError::DuplicateField {
                structure: structure.name.clone(),
                field: field.name.clone(),
            });
        }

        if resolved.tag > MAX_TAG {
            return Err(SchemaError::TagOverflow {
                structure: structure.name.clone(),
                field: field.name.clone(),
                tag: resolved.tag,
            });
        }

        if let Some(first) = tags.insert(resolved.tag, field.name.as_str()) {
            return Err(SchemaError::DuplicateTag {
                structure: structure.name.clone(),
                tag: resolved.tag,
                first: first.to_string(),
                second: field.name.clone(),
            });
        }

        if resolved.needs_override {
            counter = resolved.tag;
        } else if counter != resolved.tag {
            return Err(SchemaError::TagDrift {
                structure: structure.name.clone(),
                field: field.name.clone(),
                tag: resolved.tag,
                written: counter,
            });
        }
        counter += 1;
    }

    Ok(())
}

/// Check that `name` is usable as a Rust identifier.
///
/// ASCII only: a letter or `_` first, then letters, digits or `_`. A lone
/// `_` and keywords are rejected. A keyword can be written raw (`r#type`),
/// except for `crate`, `self`, `Self` and `super`.
pub fn is_identifier(name: &str) -> bool {
    match name.strip_prefix("r#") {
        Some(raw) => is_word(raw) && !PATH_KEYWORDS.contains(&raw),
        None => is_word(name) && !KEYWORDS.contains(&name),
    }
}

fn is_word(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }

    name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "validate/validate_tests.rs"]
mod validate_tests;

//! Struct member list.

use crate::model::Field;

use super::INDENT;

/// Render one member line per field, joined by newlines.
///
/// The last line carries no trailing newline; the composer closes the block.
pub fn emit_members(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| format!("{INDENT}{}: {},", field.name, field.member_type()))
        .collect::<Vec<_>>()
        .join("\n")
}

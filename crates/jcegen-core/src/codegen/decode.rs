//! `s_from_bytes` body.

use crate::model::Field;
use crate::tag::resolve_fields;

use super::BODY;

/// Render the reader statements for every field.
///
/// Mirrors [`super::emit_encode`]: the same `set_tag` decisions, then one
/// assignment per field. There is no trailing statement.
pub fn emit_decode(fields: &[Field], start_tag: u8) -> String {
    let mut lines = Vec::with_capacity(fields.len());

    for (field, resolved) in resolve_fields(fields, start_tag) {
        if resolved.needs_override {
            lines.push(format!("{BODY}r.set_tag({});", resolved.tag));
        }

        let read = if field.optional {
            "r.get_optional()"
        } else {
            "r.get()"
        };
        lines.push(format!("{BODY}self.{} = {read};", field.name));
    }

    lines.join("\n")
}

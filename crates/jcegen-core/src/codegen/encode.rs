//! `s_to_bytes` body.

use crate::model::Field;
use crate::tag::resolve_fields;

use super::{BODY, INDENT};

/// Render the writer statements for every field, then the final flush.
///
/// Each field contributes, in order:
/// - `w.set_tag(n);` when its explicit tag breaks the positional sequence
/// - `w.put(&self.name);`, or an `if let Some(v)` block for optional fields
pub fn emit_encode(fields: &[Field], start_tag: u8) -> String {
    let mut lines = Vec::with_capacity(fields.len() + 1);

    for (field, resolved) in resolve_fields(fields, start_tag) {
        if resolved.needs_override {
            lines.push(format!("{BODY}w.set_tag({});", resolved.tag));
        }

        if field.optional {
            lines.push(format!("{BODY}if let Some(v) = &self.{} {{", field.name));
            lines.push(format!("{BODY}{INDENT}w.put(v);"));
            lines.push(format!("{BODY}}}"));
        } else {
            lines.push(format!("{BODY}w.put(&self.{});", field.name));
        }
    }

    lines.push(format!("{BODY}w.flash(b);"));
    lines.join("\n")
}

//! Wire tag resolution.
//!
//! A field's effective tag is its explicit tag when the schema gives one,
//! otherwise `start_tag + position`. The JCE reader and writer advance their
//! tag counter by one after every value, so a `set_tag` statement is only
//! needed when the explicit tag breaks that sequence.
//!
//! Both the encode and the decode emitter go through [`resolve_fields`].

use crate::model::Field;

/// Result of resolving one field's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTag {
    /// Tag used on the wire.
    pub tag: u32,

    /// Whether a `set_tag` statement must precede the field's read/write.
    pub needs_override: bool,
}

/// Positional default tag of the field at `position`.
pub fn default_tag(start_tag: u8, position: usize) -> u32 {
    u32::from(start_tag) + position as u32
}

/// Resolve the tag of the field at zero-based `position`.
///
/// # Examples
///
/// ```
/// use jcegen_core::model::Field;
/// use jcegen_core::tag::resolve;
///
/// let moved = resolve(&Field::new("note", "JString").with_tag(5), 1, 0);
/// assert_eq!(moved.tag, 5);
/// assert!(moved.needs_override);
///
/// let in_place = resolve(&Field::new("note", "JString").with_tag(1), 1, 0);
/// assert!(!in_place.needs_override);
/// ```
pub fn resolve(field: &Field, position: usize, start_tag: u8) -> ResolvedTag {
    let positional = default_tag(start_tag, position);

    match field.tag {
        Some(explicit) => {
            let tag = u32::from(explicit);
            ResolvedTag {
                tag,
                needs_override: tag != positional,
            }
        }
        None => ResolvedTag {
            tag: positional,
            needs_override: false,
        },
    }
}

/// Resolve every field in declaration order.
pub fn resolve_fields(
    fields: &[Field],
    start_tag: u8,
) -> impl Iterator<Item = (&Field, ResolvedTag)> {
    fields
        .iter()
        .enumerate()
        .map(move |(position, field)| (field, resolve(field, position, start_tag)))
}

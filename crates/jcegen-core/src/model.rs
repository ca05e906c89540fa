//! Schema model for JCE structures.
//!
//! This module defines the input every emitter consumes: one [`Structure`]
//! per generated type, holding an ordered list of [`Field`]s.
//!
//! # Structure
//!
//! - [`Structure`]: struct name, starting wire tag and fields
//! - [`Field`]: member name, verbatim type name, optional explicit tag and
//!   optionality flag
//!
//! Field order is significant. It determines the positional default tag of
//! every field and the order of the generated member list, encode statements
//! and decode statements.
//!
//! # Examples
//!
//! ```rust
//! use jcegen_core::model::{Field, Structure};
//!
//! let ping = Structure::new("Ping", 0)
//!     .field(Field::new("seq", "JInt"))
//!     .field(Field::new("note", "JString").with_tag(3).optional());
//!
//! assert_eq!(ping.fields.len(), 2);
//! assert_eq!(ping.fields[1].tag, Some(3));
//! ```
//!
//! # Trust
//!
//! The model carries no invariants of its own. Type names are never
//! interpreted, and duplicate names or clashing tags are only caught by
//! [`crate::validate`], which callers run before generating.

use serde::{Deserialize, Serialize};

/// A structure definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// The struct name.
    pub name: String,

    /// Wire tag of the first field when it has no explicit tag.
    pub start_tag: u8,

    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

/// A field in a structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Member name.
    pub name: String,

    /// Type name, emitted verbatim (e.g. `JInt`, `JList<JString>`).
    pub type_name: String,

    /// Explicit wire tag, if the schema overrides the positional one.
    pub tag: Option<u8>,

    /// Whether this member is wrapped in `Option<T>`.
    pub optional: bool,
}

impl Structure {
    /// Create a structure with no fields.
    pub fn new(name: impl Into<String>, start_tag: u8) -> Self {
        Self {
            name: name.into(),
            start_tag,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

impl Field {
    /// Create a required field with a positional tag.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            tag: None,
            optional: false,
        }
    }

    /// Set an explicit wire tag.
    pub fn with_tag(mut self, tag: u8) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Mark the field optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The member type as declared in the generated struct.
    pub fn member_type(&self) -> String {
        if self.optional {
            format!("Option<{}>", self.type_name)
        } else {
            self.type_name.clone()
        }
    }
}

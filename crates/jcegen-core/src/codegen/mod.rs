//! Rust source generation for JCE structures.
//!
//! Every generated file has the same fixed shape; only three fragments
//! depend on the schema:
//!
//! ```text
//! Structure
//!     │
//!  ├─→ [members] → struct body
//!  ├─→ [encode]  → s_to_bytes body
//!  └─→ [decode]  → s_from_bytes body
//!     │
//!  [compose] → complete source text
//! ```
//!
//! The emitters are pure `fields -> String` functions and share nothing but
//! [`crate::tag::resolve_fields`]. Each returns its lines joined by `\n`
//! without a trailing newline, and [`Composer`] decides where fragments end.
//!
//! # Usage
//!
//! ```rust
//! use jcegen_core::codegen::compose;
//! use jcegen_core::model::{Field, Structure};
//!
//! let ping = Structure::new("Ping", 0)
//!     .field(Field::new("seq", "JInt"))
//!     .field(Field::new("note", "JString").with_tag(3).optional());
//!
//! let source = compose(&ping);
//! assert!(source.contains("        w.set_tag(3);\n"));
//! assert!(source.contains("        self.note = r.get_optional();\n"));
//! ```
//!
//! # Generated API
//!
//! The output implements `JceStruct` from the runtime crate (`conch_jce` by
//! default, see [`GeneratorOptions`]) and calls:
//!
//! - `JceWriter::new(tag)`, `put(&T)`, `set_tag(n)`, `flash(&mut BytesMut)`
//! - `JceReader::with_tag(&mut Bytes, tag)`, `get()`, `get_optional()`,
//!   `set_tag(n)`

pub mod compose;
pub mod decode;
pub mod encode;
pub mod members;
pub mod options;

pub use compose::{Composer, compose};
pub use decode::emit_decode;
pub use encode::emit_encode;
pub use members::emit_members;
pub use options::{GeneratorOptions, Visibility};

/// One indentation level in generated code.
pub(crate) const INDENT: &str = "    ";

/// Indentation of statements inside generated method bodies.
pub(crate) const BODY: &str = "        ";

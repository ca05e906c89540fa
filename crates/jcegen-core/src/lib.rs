//! jcegen-core - Rust code generation for JCE structs
//!
//! This crate provides:
//! - [`Structure`] / [`Field`] schema model
//! - [`tag::resolve`] positional and explicit wire tag resolution
//! - [`compose`] / [`Composer`] source emitters for `JceStruct` impls
//! - [`SchemaDocument`] TOML/JSON schema loading
//! - [`validate()`] upstream checks run before generation

pub mod codegen;
pub mod error;
pub mod model;
pub mod naming;
pub mod schema;
pub mod tag;
pub mod validate;

pub use codegen::{Composer, GeneratorOptions, Visibility, compose};
pub use error::{SchemaError, SchemaResult};
pub use model::{Field, Structure};
pub use schema::SchemaDocument;
pub use validate::validate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Composer, Field, GeneratorOptions, SchemaDocument, SchemaError, SchemaResult, Structure,
        compose, validate,
    };
}

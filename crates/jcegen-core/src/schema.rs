//! Schema document loading.
//!
//! A schema file describes one structure:
//!
//! ```toml
//! [metadata]
//! name = "Ping"
//!
//! [spec]
//! start_tag = 0
//!
//! [[spec.field]]
//! name = "seq"
//! type = "JInt"
//!
//! [[spec.field]]
//! name = "note"
//! type = "JString"
//! tag = 3
//! option = true
//! ```
//!
//! The same keys are accepted as JSON. `start_tag` may also be spelled
//! `startTag`. Loading does not validate; see [`crate::validate`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::model::{Field, Structure};

/// A parsed schema file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub metadata: Metadata,

    #[serde(default)]
    pub spec: Spec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    #[serde(default, alias = "startTag")]
    pub start_tag: u8,

    #[serde(default, rename = "field")]
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub tag: Option<u8>,

    #[serde(default)]
    pub option: bool,
}

impl SchemaDocument {
    /// Load a schema file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let parse: fn(&str) -> SchemaResult<Self> = match extension.as_str() {
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            _ => return Err(SchemaError::UnsupportedFormat(path.display().to_string())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document = parse(&content)?;
        debug!(
            path = %path.display(),
            structure = %document.metadata.name,
            "loaded schema"
        );
        Ok(document)
    }

    /// Parse a TOML schema document
    pub fn from_toml_str(content: &str) -> SchemaResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON schema document
    pub fn from_json_str(content: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Convert into the generator's model.
    pub fn into_structure(self) -> Structure {
        Structure {
            name: self.metadata.name,
            start_tag: self.spec.start_tag,
            fields: self.spec.fields.into_iter().map(Field::from).collect(),
        }
    }
}

impl From<FieldSpec> for Field {
    fn from(spec: FieldSpec) -> Self {
        Field {
            name: spec.name,
            type_name: spec.type_name,
            tag: spec.tag,
            optional: spec.option,
        }
    }
}

/// Load a schema file straight into a [`Structure`].
pub fn load(path: impl AsRef<Path>) -> SchemaResult<Structure> {
    SchemaDocument::from_file(path).map(SchemaDocument::into_structure)
}

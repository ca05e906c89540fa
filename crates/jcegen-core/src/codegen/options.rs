//! Generator options

use serde::{Deserialize, Serialize};

/// Visibility of the generated struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Crate,
    Private,
}

impl Visibility {
    /// Keyword prefix, including the trailing space when non-empty.
    pub fn prefix(self) -> &'static str {
        match self {
            Visibility::Public => "pub ",
            Visibility::Crate => "pub(crate) ",
            Visibility::Private => "",
        }
    }
}

/// Options that shape the fixed boilerplate around the emitted fragments.
///
/// Read from the `[generator]` table of `jcegen.toml`; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Crate path providing `JceReader`, `JceWriter` and the field types
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,

    /// Visibility of the generated struct
    #[serde(default)]
    pub visibility: Visibility,
}

fn default_runtime_crate() -> String {
    "conch_jce".to_string()
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_crate: default_runtime_crate(),
            visibility: Visibility::default(),
        }
    }
}

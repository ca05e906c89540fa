//! Assembly of one generated source file.

use tracing::debug;

use crate::model::Structure;

use super::{GeneratorOptions, INDENT, emit_decode, emit_encode, emit_members};

const DISCLAIMER: &str = "// This file is automatically @generated by jcegen.
// It is not intended for manual editing.

use bytes::{Bytes, BytesMut};
";

const FIELD_TYPES: &str =
    "JBool, JByte, JceStruct, JDouble, JFloat, JInt, JList, JLong, JMap, JShort, JSList, JString";

/// Renders [`Structure`]s into Rust source text.
///
/// Output depends only on the structure and the options, so composing the
/// same input twice yields byte-identical text.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: GeneratorOptions,
}

impl Composer {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the complete source file for one structure.
    pub fn compose(&self, structure: &Structure) -> String {
        let runtime = &self.options.runtime_crate;
        let name = &structure.name;
        let start_tag = structure.start_tag;
        let mut code = String::new();

        // Header and imports
        code.push_str(DISCLAIMER);
        code.push('\n');
        code.push_str(&format!("use {runtime}::{{JceReader, JceWriter}};\n"));
        code.push_str(&format!("use {runtime}::field::{{{FIELD_TYPES}}};\n"));
        code.push('\n');

        // Struct declaration
        code.push_str("#[derive(Default)]\n");
        code.push_str(&format!(
            "{}struct {name} {{\n",
            self.options.visibility.prefix()
        ));
        push_fragment(&mut code, &emit_members(&structure.fields));
        code.push_str("}\n\n");

        // JceStruct implementation
        code.push_str(&format!("impl JceStruct for {name} {{\n"));
        code.push_str(&format!(
            "{INDENT}fn s_to_bytes(&self, b: &mut BytesMut) {{\n"
        ));
        code.push_str(&format!(
            "{INDENT}{INDENT}let mut w = JceWriter::new({start_tag});\n"
        ));
        push_fragment(&mut code, &emit_encode(&structure.fields, start_tag));
        code.push_str(&format!("{INDENT}}}\n\n"));
        code.push_str(&format!(
            "{INDENT}fn s_from_bytes(&mut self, b: &mut Bytes) {{\n"
        ));
        code.push_str(&format!(
            "{INDENT}{INDENT}let mut r = JceReader::with_tag(b, {start_tag});\n"
        ));
        push_fragment(&mut code, &emit_decode(&structure.fields, start_tag));
        code.push_str(&format!("{INDENT}}}\n"));
        code.push_str("}\n");

        debug!(
            structure = %name,
            fields = structure.fields.len(),
            bytes = code.len(),
            "composed structure"
        );

        code
    }
}

/// Generate source for one structure with default options.
pub fn compose(structure: &Structure) -> String {
    Composer::default().compose(structure)
}

// Fragments come back without a trailing newline; empty ones add no line.
fn push_fragment(code: &mut String, fragment: &str) {
    if !fragment.is_empty() {
        code.push_str(fragment);
        code.push('\n');
    }
}

//! Check command implementation

use anyhow::{Context, Result};
use jcegen_core::tag::resolve_fields;
use jcegen_core::{Structure, schema, validate};

use crate::discover;

/// One-line description of a validated structure
pub fn summarize(structure: &Structure) -> String {
    let optional = structure.fields.iter().filter(|f| f.optional).count();
    let overrides = resolve_fields(&structure.fields, structure.start_tag)
        .filter(|(_, r)| r.needs_override)
        .count();

    format!(
        "{}: start tag {}, {} field(s), {} optional, {} tag override(s)",
        structure.name,
        structure.start_tag,
        structure.fields.len(),
        optional,
        overrides
    )
}

/// Run the check command
pub fn run(inputs: &[String]) -> Result<()> {
    let schemas = discover::schema_files(inputs)?;

    if schemas.is_empty() {
        anyhow::bail!("No schema files found in: {}", inputs.join(", "));
    }

    for path in &schemas {
        println!("Checking schema: {}", path.display());

        let structure = schema::load(path)
            .with_context(|| format!("Failed to load schema: {}", path.display()))?;
        validate(&structure).with_context(|| format!("Invalid schema: {}", path.display()))?;

        println!("✓ {}", summarize(&structure));
    }

    println!("\nAll {} schema(s) are valid!", schemas.len());

    Ok(())
}

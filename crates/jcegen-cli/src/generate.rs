//! Generate command implementation

use anyhow::{Context, Result};
use jcegen_core::naming::{RESERVED_FILE_NAMES, file_name};
use jcegen_core::{Composer, Structure, schema, validate};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::discover;

/// Run the generate command
pub fn run(config: &Config, inputs: &[String], output: Option<String>, verify: bool) -> Result<()> {
    let output_dir = PathBuf::from(config.output_dir(output));
    let schemas = discover::schema_files(inputs)?;

    if schemas.is_empty() {
        anyhow::bail!("No schema files found in: {}", inputs.join(", "));
    }

    println!(
        "Generating {} structure(s) into: {}",
        schemas.len(),
        output_dir.display()
    );

    let composer = Composer::new(config.generator.clone());
    let outputs = render_all(&composer, &schemas, verify)?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory: {output_dir:?}"))?;

    for (file, source) in &outputs {
        let output_file = output_dir.join(file);
        fs::write(&output_file, source)
            .with_context(|| format!("Failed to write {output_file:?}"))?;
        println!("✓ {}", output_file.display());
    }

    info!(count = outputs.len(), dir = %output_dir.display(), "generation finished");
    println!("\n✓ Generated {} file(s)", outputs.len());

    Ok(())
}

/// Render every schema before anything is written.
///
/// Returns `(file name, source)` pairs in input order. Fails if two
/// structures would be written to the same file, or if a structure would
/// land on `mod.rs`, `lib.rs` or `main.rs`.
pub fn render_all(
    composer: &Composer,
    schemas: &[PathBuf],
    verify: bool,
) -> Result<Vec<(String, String)>> {
    let mut owners: HashMap<String, &Path> = HashMap::new();
    let mut outputs = Vec::with_capacity(schemas.len());

    for path in schemas {
        let (structure, source) = render(composer, path, verify)?;
        let file = file_name(&structure);

        if RESERVED_FILE_NAMES.contains(&file.as_str()) {
            anyhow::bail!(
                "{}: structure {} would generate reserved file {}",
                path.display(),
                structure.name,
                file
            );
        }

        if let Some(previous) = owners.insert(file.clone(), path.as_path()) {
            anyhow::bail!(
                "{} and {} both generate {}",
                previous.display(),
                path.display(),
                file
            );
        }

        outputs.push((file, source));
    }

    Ok(outputs)
}

/// Load, validate and compose a single schema file.
pub fn render(composer: &Composer, path: &Path, verify: bool) -> Result<(Structure, String)> {
    let structure = schema::load(path)
        .with_context(|| format!("Failed to load schema: {}", path.display()))?;

    validate(&structure).with_context(|| format!("Invalid schema: {}", path.display()))?;

    let source = composer.compose(&structure);
    debug!(structure = %structure.name, path = %path.display(), "rendered");

    if verify {
        verify_source(&source)
            .with_context(|| format!("Verification failed for {}", structure.name))?;
    }

    Ok((structure, source))
}

/// Check that generated text parses as a Rust source file.
pub fn verify_source(source: &str) -> Result<()> {
    syn::parse_file(source)
        .map(|_| ())
        .context("Generated source is not valid Rust")
}

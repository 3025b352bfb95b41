// Licensed under the Apache-2.0 license

//! Generate register bitfields from any register-definition file.

use anyhow::{Context, Result};
use log::info;
use registers_generator::{generate_bitfields_from_file_with_config, GeneratorConfig};
use std::path::Path;

/// Generate bitfields from `xml_file`, writing to `output` or stdout.
///
/// Nothing is written unless generation succeeds for every register.
pub fn generate(xml_file: &Path, output: Option<&Path>, header: bool) -> Result<()> {
    info!("Generating registers from: {}", xml_file.display());

    let config = if header {
        GeneratorConfig::with_defaults()
    } else {
        GeneratorConfig::none()
    };
    let code = generate_bitfields_from_file_with_config(xml_file, &config)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        info!("Output written to: {}", output_path.display());
    } else {
        print!("{code}");
    }

    Ok(())
}

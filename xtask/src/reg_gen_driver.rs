// Licensed under the Apache-2.0 license

//! Generate the checked-in driver registers.
//!
//! This regenerates `registers/generated/src/regs.rs` from the vendor
//! register definition, or with `check` verifies that the checked-in file
//! matches what the generator produces today.

use anyhow::{bail, Context, Result};
use log::{info, warn};
use registers_generator::{generate_bitfields_from_file_with_config, GeneratorConfig};
use std::fs;
use std::path::Path;

/// A register-definition file and the source file generated from it.
struct RegisterTarget {
    /// XML file path (relative to project root)
    xml_file: &'static str,
    /// Generated file path (relative to project root)
    output_file: &'static str,
}

const REGISTER_TARGETS: &[RegisterTarget] = &[RegisterTarget {
    xml_file: "hw/cc1200.xml",
    output_file: "registers/generated/src/regs.rs",
}];

/// Generate all driver registers below `project_root`.
pub fn generate(project_root: &Path, check: bool) -> Result<()> {
    generate_targets(project_root, REGISTER_TARGETS, check)
}

fn generate_targets(project_root: &Path, targets: &[RegisterTarget], check: bool) -> Result<()> {
    let config = GeneratorConfig::with_defaults();
    let mut stale = Vec::new();

    for target in targets {
        let xml_path = project_root.join(target.xml_file);
        let output_path = project_root.join(target.output_file);

        info!("Generating {} from {}", target.output_file, target.xml_file);
        let code = generate_bitfields_from_file_with_config(&xml_path, &config)?;

        if check {
            let up_to_date = match fs::read_to_string(&output_path) {
                Ok(existing) => existing == code,
                Err(e) => {
                    warn!("Failed to read {}: {e}", output_path.display());
                    false
                }
            };
            if up_to_date {
                info!("  ✓ {} is up to date", target.output_file);
            } else {
                stale.push(target.output_file);
            }
        } else {
            fs::write(&output_path, &code)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            info!("  ✓ Generated {} ({} bytes)", target.output_file, code.len());
        }
    }

    if !stale.is_empty() {
        bail!(
            "Generated registers are stale: {}. Run `cargo xtask reg-gen-driver`",
            stale.join(", ")
        );
    }

    Ok(())
}

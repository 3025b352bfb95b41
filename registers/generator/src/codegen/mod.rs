// Licensed under the Apache-2.0 license

//! Main code generation logic for converting register-definition XML to
//! `bitfield!` Rust code.
//!
//! The implementation is split across submodules:
//! - `parse`: Loading the XML document into [`Device`] records
//! - `generate`: Deriving identifiers and bit layouts into [`GeneratedDevice`]
//!
//! Rendering lives in [`crate::output`].

mod generate;
mod parse;

use anyhow::Context;
use log::info;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::output::GeneratedDevice;
use crate::types::Device;

/// Load a register-definition document from a string.
pub fn load_device(xml: &str) -> anyhow::Result<Device> {
    Device::parse(xml)
}

/// Load a register-definition document from a file.
pub fn load_device_from_file(file: &Path) -> anyhow::Result<Device> {
    let xml = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    Device::parse(&xml).with_context(|| format!("Failed to load {}", file.display()))
}

/// Generate `bitfield!` code from a register-definition document.
///
/// Only the register blocks are written; see
/// [`generate_bitfields_with_config`] to add a header.
pub fn generate_bitfields(xml: &str) -> anyhow::Result<String> {
    generate_bitfields_with_config(xml, &GeneratorConfig::none())
}

/// Generate `bitfield!` code from a register-definition document with a
/// custom output configuration.
pub fn generate_bitfields_with_config(
    xml: &str,
    config: &GeneratorConfig,
) -> anyhow::Result<String> {
    let device = load_device(xml)?;
    generate_device(&device, config)
}

/// Generate `bitfield!` code from a register-definition file.
pub fn generate_bitfields_from_file(file: &Path) -> anyhow::Result<String> {
    generate_bitfields_from_file_with_config(file, &GeneratorConfig::none())
}

/// Generate `bitfield!` code from a register-definition file with a custom
/// output configuration.
pub fn generate_bitfields_from_file_with_config(
    file: &Path,
    config: &GeneratorConfig,
) -> anyhow::Result<String> {
    let device = load_device_from_file(file)?;
    generate_device(&device, config)
        .with_context(|| format!("Failed to generate registers from {}", file.display()))
}

fn generate_device(device: &Device, config: &GeneratorConfig) -> anyhow::Result<String> {
    let generated: GeneratedDevice = device.derive()?;
    info!(
        "Generated {} registers for {}",
        generated.registers.len(),
        generated.name
    );
    Ok(generated.generate_code(config))
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

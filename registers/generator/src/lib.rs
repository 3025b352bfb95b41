// Licensed under the Apache-2.0 license

//! Register-definition XML to `bitfield!` Rust code generator.
//!
//! This crate converts the register-definition document shipped with the
//! transceiver's vendor configuration tool into `bitfield!` declarations,
//! one 8-bit container type per register, each with a `Default` impl that
//! reproduces the documented reset value.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use registers_generator::{
//!     generate_bitfields_from_file, generate_bitfields_from_file_with_config,
//!     GeneratorConfig,
//! };
//!
//! // Generate the bare register blocks
//! let code = generate_bitfields_from_file(Path::new("hw/cc1200.xml")).unwrap();
//!
//! // Or with a header that turns the output into a standalone module
//! let code = generate_bitfields_from_file_with_config(
//!     Path::new("hw/cc1200.xml"),
//!     &GeneratorConfig::with_defaults(),
//! )
//! .unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Records deserialized from the register-definition document
//! - [`util`]: Identifier, bit-range and reset-literal derivation
//! - [`config`]: Output configuration ([`GeneratorConfig`])
//! - [`output`]: Generated output types and code emission
//! - `codegen`: Loader, deriver and public API

pub mod config;
pub mod output;
pub mod types;
pub mod util;

mod codegen;

// Re-export main public API
pub use codegen::{
    generate_bitfields, generate_bitfields_from_file, generate_bitfields_from_file_with_config,
    generate_bitfields_with_config, load_device, load_device_from_file,
};
pub use config::GeneratorConfig;
pub use output::{GeneratedBitfield, GeneratedDevice, GeneratedRegister};
pub use types::{Access, Bitfield, Device, Register, Value};

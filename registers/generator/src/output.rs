// Licensed under the Apache-2.0 license

//! Output types and code generation for `bitfield!` declarations.
//!
//! This module contains the data structures that represent the derived output
//! ([`GeneratedDevice`], [`GeneratedRegister`], [`GeneratedBitfield`]) and the
//! logic to render them as Rust source.
//!
//! ## Code Generation Flow
//!
//! ```text
//! Device (parsed XML) → GeneratedDevice → Rust code string
//!                       └── GeneratedRegister[]  → bitfield! + impl Default
//!                           └── GeneratedBitfield[] → accessor lines
//! ```
//!
//! ## Generated Code Structure
//!
//! For a register `FREQ_OFF` at `0x0C` with reset `0x00`:
//!
//! ```text
//! bitfield! {
//!     /// Frequency Offset
//!     ///
//!     /// # Address
//!     ///
//!     /// The address of this register is 0x0C
//!     #[derive(Clone, Copy)]
//!     pub struct FreqOff(u8);
//!
//!     /// Frequency offset
//!     pub freq_off, set_freq_off: 7, 0;
//! }
//!
//! impl Default for FreqOff {
//!     fn default() -> Self {
//!         Self(0x00)
//!     }
//! }
//! ```
//!
//! The template is a contract: whitespace and blank-line placement must not
//! change, or previously generated files stop matching.

use crate::config::GeneratorConfig;
use crate::util::BitRange;
use std::fmt::Write;

//=============================================================================
// Generated Types
//=============================================================================

/// A bitfield accessor within a generated register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedBitfield {
    /// Getter identifier.
    pub getter: String,
    /// Setter identifier, or `_` for read-only fields.
    pub setter: String,
    pub range: BitRange,
    /// Cleaned-up description, one entry per doc comment line.
    pub description: Vec<String>,
    /// Documented `(bit pattern, meaning)` pairs.
    pub values: Vec<(String, String)>,
    /// Reset value of the field as written in the document.
    pub reset: String,
}

/// A generated 8-bit register container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedRegister {
    /// PascalCase type name.
    pub type_name: String,
    /// Address as written in the document.
    pub address: String,
    pub description: Vec<String>,
    /// Canonical two-digit reset literal, e.g. `0x06`.
    pub reset: String,
    pub bitfields: Vec<GeneratedBitfield>,
}

/// The complete output for one register-definition document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedDevice {
    pub name: String,
    /// Registers in document order.
    pub registers: Vec<GeneratedRegister>,
}

//=============================================================================
// Code Generation
//=============================================================================

/// Write one doc comment line at the given indentation.
fn write_doc(output: &mut String, indent: &str, line: &str) {
    if line.is_empty() {
        writeln!(output, "{indent}///").unwrap();
    } else {
        writeln!(output, "{indent}/// {line}").unwrap();
    }
}

impl GeneratedDevice {
    /// Generate the complete Rust code for this device.
    ///
    /// Register blocks are separated by one blank line, in document order.
    pub fn generate_code(&self, config: &GeneratorConfig) -> String {
        let mut output = config.render_header();
        for (i, register) in self.registers.iter().enumerate() {
            if i > 0 {
                writeln!(output).unwrap();
            }
            register.generate_code(&mut output);
        }
        output
    }
}

impl GeneratedRegister {
    /// Append the `bitfield!` declaration and the `Default` impl.
    pub fn generate_code(&self, output: &mut String) {
        self.generate_bitfield(output);
        writeln!(output).unwrap();
        self.generate_default(output);
    }

    fn generate_bitfield(&self, output: &mut String) {
        let name = &self.type_name;
        writeln!(output, "bitfield! {{").unwrap();
        for line in &self.description {
            write_doc(output, "    ", line);
        }
        write_doc(output, "    ", "");
        write_doc(output, "    ", "# Address");
        write_doc(output, "    ", "");
        write_doc(
            output,
            "    ",
            &format!("The address of this register is {}", self.address),
        );
        writeln!(output, "    #[derive(Clone, Copy)]").unwrap();
        writeln!(output, "    pub struct {name}(u8);").unwrap();

        for field in &self.bitfields {
            writeln!(output).unwrap();
            field.generate_code(output);
        }

        writeln!(output, "}}").unwrap();
    }

    fn generate_default(&self, output: &mut String) {
        let name = &self.type_name;
        let reset = &self.reset;
        writeln!(output, "impl Default for {name} {{").unwrap();
        writeln!(output, "    fn default() -> Self {{").unwrap();
        writeln!(output, "        Self({reset})").unwrap();
        writeln!(output, "    }}").unwrap();
        writeln!(output, "}}").unwrap();
    }
}

impl GeneratedBitfield {
    /// Append the doc comment and accessor line for this field.
    pub fn generate_code(&self, output: &mut String) {
        for line in &self.description {
            write_doc(output, "    ", line);
        }

        if !self.values.is_empty() {
            if !self.description.is_empty() {
                write_doc(output, "    ", "");
            }
            write_doc(output, "    ", "# Values");
            write_doc(output, "    ", "");
            for (number, brief) in &self.values {
                write_doc(output, "    ", &format!("- {number}b: {brief}"));
            }
            write_doc(output, "    ", "");
            write_doc(
                output,
                "    ",
                &format!("The default value is {}", self.reset),
            );
        }

        writeln!(
            output,
            "    pub {}, {}: {};",
            self.getter, self.setter, self.range
        )
        .unwrap();
    }
}

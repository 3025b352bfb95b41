// Licensed under the Apache-2.0 license

//! Configuration for the generated output.
//!
//! [`GeneratorConfig`] controls what is written around the register blocks.
//! The blocks themselves always follow the same template so that
//! regenerating an unchanged document reproduces checked-in files exactly.

/// License line written by [`GeneratorConfig::with_defaults`].
pub const LICENSE_HEADER: &str = "// Licensed under the Apache-2.0 license";

/// Notice written by [`GeneratorConfig::with_defaults`].
pub const GENERATED_NOTICE: &str = "// Generated by xtask reg-gen. Do not edit.";

/// Configuration for code generation output.
///
/// # Example
///
/// ```
/// use registers_generator::config::GeneratorConfig;
///
/// // No header: only register blocks are written
/// let config = GeneratorConfig::none();
/// assert!(config.header.is_empty());
///
/// // Custom header
/// let config = GeneratorConfig::none()
///     .add_header_line("// CC1200 registers")
///     .add_header_line("use bitfield::bitfield;");
/// assert_eq!(config.header.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Lines written verbatim before the first register block, followed by
    /// a blank line. Nothing is written when empty.
    pub header: Vec<String>,
}

impl GeneratorConfig {
    /// Create a GeneratorConfig that writes only the register blocks.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create a GeneratorConfig whose output is a standalone module:
    /// license line, generated-file notice and the `bitfield` import.
    pub fn with_defaults() -> Self {
        Self::none()
            .add_header_line(LICENSE_HEADER)
            .add_header_line(GENERATED_NOTICE)
            .add_header_line("")
            .add_header_line("use bitfield::bitfield;")
    }

    /// Append a header line.
    pub fn add_header_line(mut self, line: &str) -> Self {
        self.header.push(line.to_string());
        self
    }

    /// Render the header, including its trailing blank line.
    pub fn render_header(&self) -> String {
        if self.header.is_empty() {
            return String::new();
        }
        let mut output = String::new();
        for line in &self.header {
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
        output
    }
}

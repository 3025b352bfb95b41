// Licensed under the Apache-2.0 license

//! Records deserialized from the register-definition document.
//!
//! The document has one fixed shape:
//!
//! ```text
//! registerdefinition
//! ├── devicename
//! └── Register*
//!     ├── Name, Address, Description?, Reset
//!     └── Bitfield*
//!         ├── Name, Start, Stop, Access, Reset, Description?
//!         └── Value*
//!             └── Number, Brief
//! ```
//!
//! The tree is built once by the loader and only read afterwards.
//! Elements not listed above are ignored.

use serde::Deserialize;

/// Access string the vendor document uses for writable bitfields.
pub const READ_WRITE: &str = "R/W";

/// Root of the register-definition document.
///
/// Assembled element by element by the loader; only [`Register`] and its
/// children are deserialized directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device {
    /// Device name, e.g. `CC1200`.
    pub name: String,
    /// Registers in document order.
    pub registers: Vec<Register>,
}

/// An addressed 8-bit register.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Register {
    /// Raw underscore-delimited name, e.g. `FREQ_OFF`.
    #[serde(rename = "Name")]
    pub name: String,
    /// Address as written in the document. Only used for documentation.
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    /// Hexadecimal reset value, e.g. `0x06`.
    #[serde(rename = "Reset")]
    pub reset: String,
    /// Bitfields in document order. Assumed to partition bits 0..=7.
    #[serde(rename = "Bitfield", default)]
    pub bitfields: Vec<Bitfield>,
}

/// A named bit range within a [`Register`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Bitfield {
    #[serde(rename = "Name")]
    pub name: String,
    /// Most significant bit, inclusive.
    #[serde(rename = "Start")]
    pub start: u8,
    /// Least significant bit, inclusive.
    #[serde(rename = "Stop")]
    pub stop: u8,
    #[serde(rename = "Access")]
    pub access: String,
    /// Reset value of this bitfield as written in the document.
    #[serde(rename = "Reset")]
    pub reset: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Value", default)]
    pub values: Vec<Value>,
}

impl Bitfield {
    pub fn access(&self) -> Access {
        Access::from_document(&self.access)
    }
}

/// A documented value a [`Bitfield`] may hold.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Value {
    /// Bit pattern, e.g. `01`.
    #[serde(rename = "Number")]
    pub number: String,
    /// Meaning of the bit pattern.
    #[serde(rename = "Brief")]
    pub brief: String,
}

/// Software access to a bitfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    ReadWrite,
    ReadOnly,
}

impl Access {
    /// Only the exact `R/W` string grants write access.
    pub fn from_document(access: &str) -> Self {
        if access == READ_WRITE {
            Access::ReadWrite
        } else {
            Access::ReadOnly
        }
    }

    pub fn is_writable(self) -> bool {
        self == Access::ReadWrite
    }
}

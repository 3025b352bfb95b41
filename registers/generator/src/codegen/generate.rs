// Licensed under the Apache-2.0 license

//! Identifier and layout derivation.
//!
//! This module contains the `impl Device` block that turns the loaded
//! records into [`GeneratedDevice`], failing on anything that would produce
//! wrong or non-compiling code.

use anyhow::{anyhow, bail, Context};
use log::debug;
use std::collections::{HashMap, HashSet};

use crate::output::{GeneratedBitfield, GeneratedDevice, GeneratedRegister};
use crate::types::{Bitfield, Device, Register};
use crate::util::{
    doc_lines, getter_name, parse_reset, pascal_case, reset_literal, setter_name, BitRange,
};

impl Device {
    /// Derive the output for every register, in document order.
    pub(super) fn derive(&self) -> anyhow::Result<GeneratedDevice> {
        let mut generated = GeneratedDevice {
            name: self.name.trim().to_string(),
            registers: Vec::with_capacity(self.registers.len()),
        };

        // Derived type name -> raw register name
        let mut type_names: HashMap<String, &str> = HashMap::new();

        for register in &self.registers {
            let derived = register
                .derive()
                .with_context(|| format!("Failed to derive register {}", register.name))?;

            if let Some(previous) = type_names.insert(derived.type_name.clone(), &register.name) {
                bail!(
                    "Registers {} and {} both derive the type name {}",
                    previous,
                    register.name,
                    derived.type_name
                );
            }

            debug!(
                "Derived {} as {} ({} bitfields)",
                register.name,
                derived.type_name,
                derived.bitfields.len()
            );
            generated.registers.push(derived);
        }

        Ok(generated)
    }
}

impl Register {
    fn derive(&self) -> anyhow::Result<GeneratedRegister> {
        let type_name = pascal_case(self.name.trim());
        if type_name.is_empty() {
            bail!("Register name {:?} has no identifier characters", self.name);
        }

        let reset = parse_reset(&self.reset)
            .map(reset_literal)
            .ok_or_else(|| anyhow!("Invalid reset value {:?}", self.reset))?;

        let mut getters = HashSet::new();
        let mut bitfields = Vec::with_capacity(self.bitfields.len());
        for bitfield in &self.bitfields {
            let derived = bitfield
                .derive()
                .with_context(|| format!("Invalid bitfield {}", bitfield.name))?;
            if !getters.insert(derived.getter.clone()) {
                bail!(
                    "Bitfield {} repeats the accessor {}",
                    bitfield.name,
                    derived.getter
                );
            }
            bitfields.push(derived);
        }

        Ok(GeneratedRegister {
            type_name,
            address: self.address.trim().to_string(),
            description: self.description.as_deref().map(doc_lines).unwrap_or_default(),
            reset,
            bitfields,
        })
    }
}

impl Bitfield {
    fn derive(&self) -> anyhow::Result<GeneratedBitfield> {
        let name = self.name.trim();
        if name.is_empty() {
            bail!("Bitfield has an empty name");
        }

        let range = BitRange::new(self.start, self.stop).ok_or_else(|| {
            if self.start > BitRange::MAX_BIT {
                anyhow!(
                    "Start bit {} is past bit {} of the register",
                    self.start,
                    BitRange::MAX_BIT
                )
            } else {
                anyhow!(
                    "Start bit {} is below stop bit {}",
                    self.start,
                    self.stop
                )
            }
        })?;

        let values = self
            .values
            .iter()
            .map(|value| {
                (
                    value.number.trim().to_string(),
                    doc_lines(&value.brief).join(" "),
                )
            })
            .collect();

        Ok(GeneratedBitfield {
            getter: getter_name(name),
            setter: setter_name(name, self.access()),
            range,
            description: self.description.as_deref().map(doc_lines).unwrap_or_default(),
            values,
            reset: self.reset.trim().to_string(),
        })
    }
}

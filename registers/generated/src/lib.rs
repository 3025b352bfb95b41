// Licensed under the Apache-2.0 license

//! CC1200 register bitfields generated from `hw/cc1200.xml`.
//!
//! Regenerate with `cargo xtask reg-gen-driver` after editing the register
//! definition; `cargo xtask precheckin` fails while this crate is stale.

#![no_std]

mod regs;

pub use regs::*;

// Licensed under the Apache-2.0 license

//! Loading of register-definition documents.
//!
//! This module contains the `impl Device` block that reads the XML document
//! into the records of [`crate::types`]. Document type declarations are
//! skipped without being resolved, so the DTD the vendor file references is
//! never fetched.
//!
//! Each `<Register>` is deserialized on its own so that a missing or
//! mistyped element is reported against the register, and the bitfield,
//! it belongs to.

use anyhow::{anyhow, bail, Context};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

use crate::types::{Bitfield, Device, Register};

/// Name of the document's root element.
const ROOT_ELEMENT: &str = "registerdefinition";

impl Device {
    /// Parse a register-definition document.
    pub(super) fn parse(xml: &str) -> anyhow::Result<Device> {
        let root = root_content(xml)?;

        let mut name = None;
        let mut registers = vec![];
        for (tag, content) in child_elements(&root)? {
            match tag.as_str() {
                "devicename" => {
                    let text = unescape(&content).context("Invalid <devicename>")?;
                    name = Some(text.trim().to_string());
                }
                "Register" => {
                    let register = parse_register(&content, registers.len())?;
                    registers.push(register);
                }
                _ => {}
            }
        }

        let name = name.ok_or_else(|| anyhow!("Missing <devicename> element"))?;
        Ok(Device { name, registers })
    }
}

/// Returns the raw content of the `registerdefinition` root element.
fn root_content(xml: &str) -> anyhow::Result<Cow<'_, str>> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event().context("Malformed XML")? {
            Event::Start(e) => {
                check_root_element(&e)?;
                return reader.read_text(e.name()).context("Malformed XML");
            }
            Event::Empty(e) => {
                check_root_element(&e)?;
                return Ok(Cow::Borrowed(""));
            }
            Event::Eof => bail!("Document has no <{ROOT_ELEMENT}> element"),
            // Declaration, DOCTYPE, comments and whitespace
            _ => {}
        }
    }
}

fn check_root_element(e: &BytesStart) -> anyhow::Result<()> {
    let name = element_name(e);
    if name != ROOT_ELEMENT {
        bail!("Unexpected root element <{name}>, expected <{ROOT_ELEMENT}>");
    }
    Ok(())
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Splits element content into its top-level children as `(tag, raw content)`
/// pairs, in document order.
fn child_elements(content: &str) -> anyhow::Result<Vec<(String, Cow<'_, str>)>> {
    let mut reader = Reader::from_str(content);
    let mut children = vec![];
    loop {
        match reader.read_event().context("Malformed XML")? {
            Event::Start(e) => {
                let tag = element_name(&e);
                let inner = reader.read_text(e.name()).context("Malformed XML")?;
                children.push((tag, inner));
            }
            Event::Empty(e) => children.push((element_name(&e), Cow::Borrowed(""))),
            Event::Eof => return Ok(children),
            _ => {}
        }
    }
}

/// Text of the `<Name>` child, if there is one.
fn child_name(content: &str) -> Option<String> {
    let children = child_elements(content).ok()?;
    let (_, name) = children.into_iter().find(|(tag, _)| tag == "Name")?;
    let name = unescape(&name).ok()?;
    Some(name.trim().to_string())
}

/// Deserializes a record from the raw content of its element.
fn from_content<T: DeserializeOwned>(content: &str) -> anyhow::Result<T> {
    let element = format!("<element>{content}</element>");
    Ok(quick_xml::de::from_str(&element)?)
}

/// `index` is the register's zero-based position, used when it has no name.
fn parse_register(content: &str, index: usize) -> anyhow::Result<Register> {
    let label = child_name(content).unwrap_or_else(|| format!("#{}", index + 1));
    from_content::<Register>(content)
        .map_err(|err| bitfield_error(content).unwrap_or(err))
        .with_context(|| format!("Failed to load register {label}"))
}

/// Finds the first bitfield of a register that does not load on its own.
fn bitfield_error(register: &str) -> Option<anyhow::Error> {
    let children = child_elements(register).ok()?;
    children
        .iter()
        .filter(|(tag, _)| tag == "Bitfield")
        .enumerate()
        .find_map(|(i, (_, content))| {
            let err = from_content::<Bitfield>(content).err()?;
            let label = child_name(content).unwrap_or_else(|| format!("#{}", i + 1));
            Some(err.context(format!("Invalid bitfield {label}")))
        })
}

//! Selector naming
//!
//! Selectors are either emitted unchanged ([`Passthrough`]) or rewritten
//! into stable identifiers built from a DJB2 hash ([`HashedNames`]).

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::Serialize;

use crate::config::RenderConfig;

/// DJB2 variant: walks UTF-16 code units from last to first with
/// `hash = (hash * 33) ^ unit`, wrapping at 32 bits.
pub fn djb2(input: &str) -> u32 {
    let mut hash: u32 = 5381;
    let mut buf = [0u16; 2];
    for c in input.chars().rev() {
        for &unit in c.encode_utf16(&mut buf).iter().rev() {
            hash = hash.wrapping_mul(33) ^ u32::from(unit);
        }
    }
    hash
}

/// Original selector text mapped to its generated identifier (without prefix)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectorMap(IndexMap<String, String, FxBuildHasher>);

impl SelectorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identifier, replacing any earlier one for the same selector
    pub fn insert(&mut self, selector: impl Into<String>, identifier: impl Into<String>) {
        self.0.insert(selector.into(), identifier.into());
    }

    pub fn get(&self, selector: &str) -> Option<&str> {
        self.0.get(selector).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Move every entry of `other` into this map
    pub fn extend(&mut self, other: SelectorMap) {
        self.0.extend(other.0);
    }
}

impl fmt::Display for SelectorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (selector, identifier) in self.iter() {
            writeln!(f, "{} -> {}", selector, identifier)?;
        }
        Ok(())
    }
}

/// Decides the text emitted for each selector
pub trait SelectorNaming {
    /// Rendered selector for `selector`
    fn name(&mut self, selector: &str) -> String;
}

/// Emits selectors unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl SelectorNaming for Passthrough {
    fn name(&mut self, selector: &str) -> String {
        selector.to_string()
    }
}

/// Rewrites selectors into hashed identifiers, recording each one
pub struct HashedNames<'a> {
    config: &'a RenderConfig,
    selectors: &'a mut SelectorMap,
}

impl<'a> HashedNames<'a> {
    pub fn new(config: &'a RenderConfig, selectors: &'a mut SelectorMap) -> Self {
        Self { config, selectors }
    }
}

impl SelectorNaming for HashedNames<'_> {
    fn name(&mut self, selector: &str) -> String {
        next_identifier(selector, self.config, self.selectors)
    }
}

/// Build the identifier for `selector` and record it in `selectors`.
///
/// The secondary hash covers the base segment plus salt, not the prefixed
/// identifier.
pub fn next_identifier(selector: &str, config: &RenderConfig, selectors: &mut SelectorMap) -> String {
    let RenderConfig { prefix, delimiter, salt, hash_selector, append_hash } = config;

    let base = if *hash_selector {
        djb2(&format!("{}{}", selector, salt)).to_string()
    } else {
        selector.to_string()
    };

    let appended = if *append_hash {
        let secondary = djb2(&format!("{}{}", base, salt));
        format!("{}{}{}", base, delimiter, secondary)
    } else {
        base
    };

    let identifier = format!("{}{}", delimiter, appended);
    log::trace!("Selector '{}' -> '{}'", selector, identifier);

    let rendered = format!("{}{}", prefix, identifier);
    selectors.insert(selector, identifier);
    rendered
}

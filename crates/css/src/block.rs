//! Style blocks
//!
//! The typed form of a nested style description. Untyped JSON input is
//! classified once, at the boundary, into [`BlockEntry`] variants:
//!
//! - keys starting with `:` become [`PseudoBlock`]s,
//! - keys starting with `@` become [`AtRuleBlock`]s,
//! - everything else is a [`Declaration`].
//!
//! A pseudo block only holds declarations, so an at-rule under a pseudo
//! selector cannot be built; the JSON boundary rejects it instead.

use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::error::{CssError, CssResult};
use crate::value::StyleValue;

/// Maximum number of nested at-rule levels accepted by parsing and rendering
pub const MAX_NESTING_DEPTH: usize = 64;

/// Category of a block key, decided by its first character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Property,
    PseudoSelector,
    AtRule,
}

impl KeyKind {
    /// Classify a key
    pub fn of(key: &str) -> Self {
        match key.as_bytes().first() {
            Some(b':') => KeyKind::PseudoSelector,
            Some(b'@') => KeyKind::AtRule,
            _ => KeyKind::Property,
        }
    }
}

/// Values of one declaration; more than one renders repeated declarations
pub type Values = SmallVec<[StyleValue; 1]>;

/// A property declaration (name: value, or name: [fallbacks...])
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Property name as written in the input (e.g., `borderColor`)
    pub name: String,
    pub values: Values,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        let mut values = Values::new();
        values.push(value.into());
        Self { name: name.into(), values }
    }

    /// Declaration rendered once per value, in order
    pub fn with_values<V: Into<StyleValue>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    fn from_json(name: &str, value: &Value) -> Self {
        let values = match value {
            Value::Array(items) => items.iter().map(|v| StyleValue::from_json(name, v)).collect(),
            other => {
                let mut values = Values::new();
                values.push(StyleValue::from_json(name, other));
                values
            }
        };
        Self { name: name.to_string(), values }
    }
}

/// Declarations rendered under `selector + pseudo selector`
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoBlock {
    /// Pseudo selector key, including the leading colon (e.g., `:hover`)
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl PseudoBlock {
    pub fn new(selector: impl Into<String>) -> Self {
        Self { selector: selector.into(), declarations: Vec::new() }
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.declarations.push(Declaration::new(name, value));
        self
    }

    pub fn values<V: Into<StyleValue>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.declarations.push(Declaration::with_values(name, values));
        self
    }

    fn from_json(selector: &str, value: &Value) -> CssResult<Self> {
        let map = as_object(selector, value)?;
        let mut declarations = Vec::with_capacity(map.len());

        for (key, value) in map {
            match KeyKind::of(key) {
                KeyKind::AtRule => return Err(CssError::at_rule_nested(key.as_str())),
                // Pseudo selectors do not nest; the key is kept as a declaration.
                KeyKind::PseudoSelector | KeyKind::Property => {
                    declarations.push(Declaration::from_json(key, value));
                }
            }
        }

        Ok(Self { selector: selector.to_string(), declarations })
    }
}

/// A block wrapped in an at-rule (e.g., `@media screen { ... }`)
#[derive(Debug, Clone, PartialEq)]
pub struct AtRuleBlock {
    /// Full at-rule prelude, including the `@` (e.g., `@media screen`)
    pub rule: String,
    pub body: StyleBlock,
}

/// One classified entry of a style block
#[derive(Debug, Clone, PartialEq)]
pub enum BlockEntry {
    Property(Declaration),
    Pseudo(PseudoBlock),
    AtRule(AtRuleBlock),
}

/// Entries of a block grouped by kind, each group in input order
#[derive(Debug, Default)]
pub struct Classified<'a> {
    pub properties: Vec<&'a Declaration>,
    pub pseudo_selectors: Vec<&'a PseudoBlock>,
    pub at_rules: Vec<&'a AtRuleBlock>,
}

/// The body of one selector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBlock {
    entries: Vec<BlockEntry>,
}

impl StyleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.entries.push(BlockEntry::Property(Declaration::new(name, value)));
        self
    }

    /// Add a declaration repeated once per value (fallback values)
    pub fn values<V: Into<StyleValue>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.entries.push(BlockEntry::Property(Declaration::with_values(name, values)));
        self
    }

    pub fn pseudo(mut self, block: PseudoBlock) -> Self {
        self.entries.push(BlockEntry::Pseudo(block));
        self
    }

    pub fn at_rule(mut self, rule: impl Into<String>, body: StyleBlock) -> Self {
        self.entries.push(BlockEntry::AtRule(AtRuleBlock { rule: rule.into(), body }));
        self
    }

    pub fn entries(&self) -> &[BlockEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group entries into properties, pseudo selectors and at-rules
    pub fn classify(&self) -> Classified<'_> {
        let mut classified = Classified::default();
        for entry in &self.entries {
            match entry {
                BlockEntry::Property(decl) => classified.properties.push(decl),
                BlockEntry::Pseudo(pseudo) => classified.pseudo_selectors.push(pseudo),
                BlockEntry::AtRule(at_rule) => classified.at_rules.push(at_rule),
            }
        }
        classified
    }

    /// Parse a JSON object into a block
    pub fn from_json(value: &Value) -> CssResult<Self> {
        Self::parse("<block>", value, 0)
    }

    fn parse(selector: &str, value: &Value, depth: usize) -> CssResult<Self> {
        if depth > MAX_NESTING_DEPTH {
            return Err(CssError::NestingTooDeep { depth: MAX_NESTING_DEPTH });
        }

        let map = as_object(selector, value)?;
        let mut entries = Vec::with_capacity(map.len());

        for (key, value) in map {
            let entry = match KeyKind::of(key) {
                KeyKind::Property => BlockEntry::Property(Declaration::from_json(key, value)),
                KeyKind::PseudoSelector => BlockEntry::Pseudo(PseudoBlock::from_json(key, value)?),
                KeyKind::AtRule => BlockEntry::AtRule(AtRuleBlock {
                    rule: key.clone(),
                    body: Self::parse(key, value, depth + 1)?,
                }),
            };
            entries.push(entry);
        }

        Ok(Self { entries })
    }
}

/// Selectors and their blocks, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheetInput {
    rules: Vec<(String, StyleBlock)>,
}

impl StyleSheetInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, selector: impl Into<String>, block: StyleBlock) -> Self {
        self.rules.push((selector.into(), block));
        self
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &StyleBlock)> {
        self.rules.iter().map(|(selector, block)| (selector.as_str(), block))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parse a JSON object of `selector -> block`
    pub fn from_json(value: &Value) -> CssResult<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| CssError::invalid_input("expected an object of selectors"))?;

        let rules = map
            .iter()
            .map(|(selector, block)| Ok((selector.clone(), StyleBlock::parse(selector, block, 0)?)))
            .collect::<CssResult<Vec<_>>>()?;

        Ok(Self { rules })
    }
}

fn as_object<'a>(selector: &str, value: &'a Value) -> CssResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| CssError::invalid_block(selector))
}

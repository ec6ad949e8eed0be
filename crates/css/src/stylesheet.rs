//! Stylesheet accumulation
//!
//! A [`StyleSheet`] collects rendered fragments from successive `add` calls
//! and concatenates them in call order.

use serde_json::Value;

use crate::block::StyleSheetInput;
use crate::config::{ConfigOverride, RenderConfig};
use crate::error::CssResult;
use crate::render::{render, render_static};
use crate::selector::SelectorMap;

/// Accumulates rendered style text under a base configuration
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    config: RenderConfig,
    sections: Vec<String>,
}

impl StyleSheet {
    /// Create a stylesheet whose base config is `base` over the defaults
    pub fn new(base: ConfigOverride) -> Self {
        Self::with_config(base.resolve())
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config, sections: Vec::new() }
    }

    /// Base configuration every `add` call starts from
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `input` under the base config merged with `overrides` and
    /// append it. Returns the identifiers generated by this call.
    ///
    /// On error nothing is appended.
    pub fn add(&mut self, input: &StyleSheetInput, overrides: &ConfigOverride) -> CssResult<SelectorMap> {
        let config = self.config.merge(overrides);
        let mut selectors = SelectorMap::new();
        let style = render(input, &config, &mut selectors)?;

        log::debug!(
            "Added {} selectors ({} bytes) as section {}",
            input.len(),
            style.len(),
            self.sections.len()
        );
        self.sections.push(style);
        Ok(selectors)
    }

    /// Parse and add an untyped JSON input
    pub fn add_json(&mut self, input: &Value, overrides: &ConfigOverride) -> CssResult<SelectorMap> {
        let input = StyleSheetInput::from_json(input)?;
        self.add(&input, overrides)
    }

    /// Every section added so far, in call order
    pub fn render(&self) -> String {
        self.sections.concat()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// A fixed input rendered with selectors left unchanged
#[derive(Debug, Clone, Default)]
pub struct StaticSheet {
    input: StyleSheetInput,
}

impl StaticSheet {
    pub fn new(input: StyleSheetInput) -> Self {
        Self { input }
    }

    pub fn from_json(input: &Value) -> CssResult<Self> {
        Ok(Self::new(StyleSheetInput::from_json(input)?))
    }

    pub fn render(&self) -> CssResult<String> {
        render_static(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::StyleBlock;
    use serde_json::json;

    #[test]
    fn test_add_returns_selectors() {
        let mut sheet = StyleSheet::default();
        let selectors = sheet
            .add_json(&json!({ "component": { "color": "red" } }), &ConfigOverride::new())
            .unwrap();

        assert_eq!(selectors.get("component"), Some("_component_2513881194"));
        assert_eq!(sheet.render(), "._component_2513881194{color:red;}");
    }

    #[test]
    fn test_per_call_override() {
        let mut sheet = StyleSheet::new(ConfigOverride::new().salt("buddy"));
        let input = StyleSheetInput::new().rule("component", StyleBlock::new().property("color", "red"));

        sheet.add(&input, &ConfigOverride::new()).unwrap();
        sheet.add(&input, &ConfigOverride::new().salt("").prefix("#")).unwrap();

        assert_eq!(
            sheet.render(),
            "._component_1892634500{color:red;}#_component_2513881194{color:red;}"
        );
        assert_eq!(sheet.config().salt, "buddy");
    }

    #[test]
    fn test_failed_add_appends_nothing() {
        let mut sheet = StyleSheet::default();
        sheet.add_json(&json!({ "a": { "color": "red" } }), &ConfigOverride::new()).unwrap();
        let before = sheet.render();

        let result = sheet.add_json(
            &json!({ "b": { ":hover": { "@media print": { "color": "black" } } } }),
            &ConfigOverride::new(),
        );
        assert!(result.is_err());
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.render(), before);
    }

    #[test]
    fn test_static_sheet() {
        let sheet = StaticSheet::from_json(&json!({ "body": { "background": "black" } })).unwrap();
        assert_eq!(sheet.render().unwrap(), "body{background:black;}");
        assert_eq!(sheet.render().unwrap(), "body{background:black;}");
    }
}

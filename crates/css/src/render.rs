//! Recursive stylesheet renderer
//!
//! For each selector the output is, in order:
//!
//! 1. the selector's own declarations as a rule set,
//! 2. one rule set per pseudo selector, keyed by `selector + pseudo`,
//! 3. one wrapped block per at-rule.
//!
//! An at-rule body is rendered by re-entering the renderer with a single
//! rule `{ original selector: body }`, so at-rules nest to any depth and
//! every nested selector goes through the same naming strategy.

use std::iter;

use crate::block::{StyleBlock, StyleSheetInput, MAX_NESTING_DEPTH};
use crate::config::RenderConfig;
use crate::error::{CssError, CssResult};
use crate::properties::render_properties;
use crate::selector::{HashedNames, Passthrough, SelectorMap, SelectorNaming};

/// Style text together with the identifiers generated while rendering it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub style: String,
    pub selectors: SelectorMap,
}

/// Renders style sheets through a selector naming strategy
pub struct Renderer<N: SelectorNaming> {
    naming: N,
    depth: usize,
}

impl<N: SelectorNaming> Renderer<N> {
    pub fn new(naming: N) -> Self {
        Self { naming, depth: 0 }
    }

    /// Render every rule of `input` in order
    pub fn render(&mut self, input: &StyleSheetInput) -> CssResult<String> {
        self.render_rules(input.rules())
    }

    fn render_rules<'a>(
        &mut self,
        rules: impl IntoIterator<Item = (&'a str, &'a StyleBlock)>,
    ) -> CssResult<String> {
        let mut out = String::new();
        for (selector, block) in rules {
            out.push_str(&self.render_rule(selector, block)?);
        }
        Ok(out)
    }

    fn render_rule(&mut self, selector: &str, block: &StyleBlock) -> CssResult<String> {
        let classified = block.classify();
        let rendered_selector = self.naming.name(selector);

        let own = render_properties(classified.properties, false)?.concat();
        let mut out = rule_set(&rendered_selector, &own);

        for pseudo in classified.pseudo_selectors {
            let body = render_properties(&pseudo.declarations, true)?.concat();
            out.push_str(&rule_set(&format!("{}{}", rendered_selector, pseudo.selector), &body));
        }

        for at_rule in classified.at_rules {
            if self.depth >= MAX_NESTING_DEPTH {
                return Err(CssError::NestingTooDeep { depth: MAX_NESTING_DEPTH });
            }

            self.depth += 1;
            let inner = self.render_rules(iter::once((selector, &at_rule.body)));
            self.depth -= 1;
            let inner = inner?;

            log::debug!("Rendered {} for '{}' ({} bytes)", at_rule.rule, selector, inner.len());
            out.push_str(&rule_set(&at_rule.rule, &inner));
        }

        Ok(out)
    }
}

/// `selector{body}`, or nothing for an empty body
fn rule_set(selector: &str, body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!("{}{{{}}}", selector, body)
    }
}

/// Render with hashed selector identifiers, recording them in `selectors`
pub fn render(input: &StyleSheetInput, config: &RenderConfig, selectors: &mut SelectorMap) -> CssResult<String> {
    Renderer::new(HashedNames::new(config, selectors)).render(input)
}

/// Render with a fresh selector map
pub fn render_with_config(input: &StyleSheetInput, config: &RenderConfig) -> CssResult<Rendered> {
    let mut selectors = SelectorMap::new();
    let style = render(input, config, &mut selectors)?;
    Ok(Rendered { style, selectors })
}

/// Render with selectors left unchanged
pub fn render_static(input: &StyleSheetInput) -> CssResult<String> {
    Renderer::new(Passthrough).render(input)
}

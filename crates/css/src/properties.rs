//! Declaration rendering
//!
//! Turns declarations into `name:value;` text. Property names are written
//! in camelCase in the input and emitted in kebab-case.

use crate::block::{Declaration, KeyKind};
use crate::error::{CssError, CssResult};

/// Convert a camelCase property name to kebab-case.
///
/// A leading uppercase letter marks a vendor prefix and gets a hyphen of its
/// own, so `WebkitTransition` becomes `-webkit-transition`.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            match prev {
                None => out.push('-'),
                Some(p) if p.is_ascii_lowercase() => out.push('-'),
                _ => {}
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out.to_lowercase()
}

/// Render one declaration, repeating it once per value
pub fn render_declaration(decl: &Declaration) -> String {
    let name = kebab_case(&decl.name);
    let mut out = String::new();
    for value in &decl.values {
        out.push_str(&name);
        out.push(':');
        out.push_str(&value.to_string());
        out.push(';');
    }
    out
}

/// Render declarations in order, one string per declaration.
///
/// With `at_rule_forbidden` set (pseudo selector context), a declaration
/// named like an at-rule fails with [`CssError::AtRuleNestedInPseudo`].
pub fn render_properties<'a>(
    decls: impl IntoIterator<Item = &'a Declaration>,
    at_rule_forbidden: bool,
) -> CssResult<Vec<String>> {
    decls
        .into_iter()
        .map(|decl| {
            if at_rule_forbidden && KeyKind::of(&decl.name) == KeyKind::AtRule {
                return Err(CssError::at_rule_nested(decl.name.as_str()));
            }
            Ok(render_declaration(decl))
        })
        .collect()
}

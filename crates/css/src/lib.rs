//! Stylebuddy CSS
//!
//! Renders nested style descriptions (selectors mapped to declarations,
//! pseudo selectors and at-rules) into stylesheet text, optionally rewriting
//! each selector into a stable hashed class name.
//!
//! ```
//! use serde_json::json;
//! use stylebuddy_css::{ConfigOverride, StyleSheet};
//!
//! let mut sheet = StyleSheet::default();
//! let selectors = sheet
//!     .add_json(&json!({ "component": { "borderColor": "black" } }), &ConfigOverride::new())
//!     .unwrap();
//!
//! assert_eq!(selectors.get("component"), Some("_component_2513881194"));
//! assert_eq!(sheet.render(), "._component_2513881194{border-color:black;}");
//! ```

pub mod block;
pub mod config;
pub mod error;
pub mod properties;
pub mod render;
pub mod selector;
pub mod stylesheet;
pub mod value;

pub use block::{
    AtRuleBlock, BlockEntry, Classified, Declaration, KeyKind, PseudoBlock, StyleBlock,
    StyleSheetInput, MAX_NESTING_DEPTH,
};
pub use config::{ConfigOverride, RenderConfig};
pub use error::{CssError, CssResult};
pub use properties::{kebab_case, render_properties};
pub use render::{render, render_static, render_with_config, Rendered, Renderer};
pub use selector::{djb2, next_identifier, HashedNames, Passthrough, SelectorMap, SelectorNaming};
pub use stylesheet::{StaticSheet, StyleSheet};
pub use value::StyleValue;

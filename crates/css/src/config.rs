//! Render configuration
//!
//! [`RenderConfig`] is always fully populated. Sparse settings come in as a
//! [`ConfigOverride`] and are merged over a base config, never mutating it.

use serde::Deserialize;

/// Settings controlling how selectors are rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prepended to every rewritten selector (e.g., `.` for class names)
    pub prefix: String,
    /// Inserted before the selector segment and before the appended hash
    pub delimiter: String,
    /// Appended to every hash input
    pub salt: String,
    /// Replace the selector text with its hash
    pub hash_selector: bool,
    /// Append a secondary hash segment
    pub append_hash: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefix: ".".to_string(),
            delimiter: "_".to_string(),
            salt: String::new(),
            hash_selector: false,
            append_hash: true,
        }
    }
}

impl RenderConfig {
    /// Return a new config with every field set in `overrides` replaced
    pub fn merge(&self, overrides: &ConfigOverride) -> Self {
        Self {
            prefix: overrides.prefix.clone().unwrap_or_else(|| self.prefix.clone()),
            delimiter: overrides.delimiter.clone().unwrap_or_else(|| self.delimiter.clone()),
            salt: overrides.salt.clone().unwrap_or_else(|| self.salt.clone()),
            hash_selector: overrides.hash_selector.unwrap_or(self.hash_selector),
            append_hash: overrides.append_hash.unwrap_or(self.append_hash),
        }
    }
}

/// Sparse configuration; unset fields fall back to the base config
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub salt: Option<String>,
    pub hash_selector: Option<bool>,
    pub append_hash: Option<bool>,
}

impl ConfigOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    pub fn hash_selector(mut self, hash_selector: bool) -> Self {
        self.hash_selector = Some(hash_selector);
        self
    }

    pub fn append_hash(mut self, append_hash: bool) -> Self {
        self.append_hash = Some(append_hash);
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` win
    pub fn or(self, other: ConfigOverride) -> Self {
        Self {
            prefix: other.prefix.or(self.prefix),
            delimiter: other.delimiter.or(self.delimiter),
            salt: other.salt.or(self.salt),
            hash_selector: other.hash_selector.or(self.hash_selector),
            append_hash: other.append_hash.or(self.append_hash),
        }
    }

    /// Resolve against the defaults
    pub fn resolve(&self) -> RenderConfig {
        RenderConfig::default().merge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.prefix, ".");
        assert_eq!(config.delimiter, "_");
        assert_eq!(config.salt, "");
        assert!(!config.hash_selector);
        assert!(config.append_hash);
    }

    #[test]
    fn test_merge_keeps_base() {
        let base = ConfigOverride::new().salt("buddy").resolve();
        let merged = base.merge(&ConfigOverride::new().prefix("#").append_hash(false));

        assert_eq!(merged.prefix, "#");
        assert_eq!(merged.salt, "buddy");
        assert!(!merged.append_hash);
        assert_eq!(base.prefix, ".");
        assert!(base.append_hash);
    }

    #[test]
    fn test_override_layering() {
        let file = ConfigOverride::new().prefix("#").salt("a");
        let flags = ConfigOverride::new().salt("b");
        let layered = file.or(flags);
        assert_eq!(layered.prefix.as_deref(), Some("#"));
        assert_eq!(layered.salt.as_deref(), Some("b"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let overrides: ConfigOverride =
            serde_json::from_str(r#"{"hashSelector": true, "delimiter": "-", "unknown": 1}"#).unwrap();
        assert_eq!(overrides.hash_selector, Some(true));
        assert_eq!(overrides.delimiter.as_deref(), Some("-"));
        assert_eq!(overrides.prefix, None);
    }
}

//! Configuration types

use crate::error::{ConfigError, TabulaError, TabulaResult};
use crate::window::{canonical_threshold, WindowPolicy, DEFAULT_SIBLING_COUNT, MAX_SIBLING_COUNT};
use serde::{Deserialize, Serialize};

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What happens to the current page when a search or status change shrinks
/// the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FilterChangePolicy {
    /// Keep the page, clamped to `min(current_page, total_pages)`
    #[default]
    Clamp,
    /// Jump back to page 1 whenever a filter changes
    ResetToFirst,
}

/// Per-table configuration handed to [`crate::TableState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TableConfig {
    /// Fields the free-text search looks at (dotted paths allowed)
    pub search_keys: Vec<String>,
    /// Field the status dropdown compares against
    pub status_key: Option<String>,
    pub page_size: usize,
    pub window: WindowPolicy,
    #[serde(default)]
    pub on_filter_change: FilterChangePolicy,
}

impl TableConfig {
    /// Build a table configuration with environment-derived defaults.
    pub fn new<S: AsRef<str>>(search_keys: &[S]) -> Self {
        let defaults = TableDefaults::from_env();
        Self {
            search_keys: search_keys.iter().map(|k| k.as_ref().to_string()).collect(),
            status_key: None,
            page_size: defaults.page_size,
            window: defaults.window_policy(),
            on_filter_change: FilterChangePolicy::Clamp,
        }
    }

    pub fn with_status_key(mut self, key: impl Into<String>) -> Self {
        self.status_key = Some(key.into());
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_window(mut self, window: WindowPolicy) -> Self {
        self.window = window;
        self
    }

    pub fn with_filter_change(mut self, policy: FilterChangePolicy) -> Self {
        self.on_filter_change = policy;
        self
    }

    /// Validate the configuration.
    ///
    /// Validates:
    /// - at least one search key, none blank
    /// - status_key, when present, is not blank
    /// - page_size > 0
    /// - window.sibling_count <= MAX_SIBLING_COUNT
    pub fn validate(&self) -> TabulaResult<()> {
        if self.search_keys.is_empty() {
            return Err(TabulaError::Config(ConfigError::MissingRequired {
                field: "search_keys".to_string(),
            }));
        }

        if let Some(blank) = self.search_keys.iter().position(|k| k.trim().is_empty()) {
            return Err(TabulaError::Config(ConfigError::InvalidValue {
                field: format!("search_keys[{}]", blank),
                value: self.search_keys[blank].clone(),
                reason: "search key must not be blank".to_string(),
            }));
        }

        if let Some(key) = &self.status_key {
            if key.trim().is_empty() {
                return Err(TabulaError::Config(ConfigError::InvalidValue {
                    field: "status_key".to_string(),
                    value: key.clone(),
                    reason: "status_key must not be blank".to_string(),
                }));
            }
        }

        if self.page_size == 0 {
            return Err(TabulaError::Config(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                value: self.page_size.to_string(),
                reason: "page_size must be greater than 0".to_string(),
            }));
        }

        if self.window.sibling_count > MAX_SIBLING_COUNT {
            return Err(TabulaError::Config(ConfigError::InvalidValue {
                field: "window.sibling_count".to_string(),
                value: self.window.sibling_count.to_string(),
                reason: format!("sibling_count must be at most {}", MAX_SIBLING_COUNT),
            }));
        }

        Ok(())
    }

    /// Whether a status dropdown can be offered for this table.
    pub fn supports_status_filter(&self) -> bool {
        self.status_key.is_some()
    }
}

// ============================================================================
// TABLE DEFAULTS
// ============================================================================

/// Default values for table pagination.
///
/// These can be used by callers to fill in settings a table definition
/// leaves unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TableDefaults {
    pub page_size: usize,
    pub sibling_count: usize,
    pub collapse_threshold: usize,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sibling_count: DEFAULT_SIBLING_COUNT,
            collapse_threshold: canonical_threshold(DEFAULT_SIBLING_COUNT),
        }
    }
}

impl TableDefaults {
    /// Create from environment variables with fallback to defaults.
    ///
    /// Environment variables:
    /// - `TABULA_PAGE_SIZE`: Records per page (default: 10, must be > 0)
    /// - `TABULA_SIBLING_COUNT`: Page buttons beside the current page (default: 1,
    ///   at most `MAX_SIBLING_COUNT`)
    /// - `TABULA_COLLAPSE_THRESHOLD`: Largest page count shown without
    ///   ellipses (default: 2 * sibling count + 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let page_size = std::env::var("TABULA_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|size: &usize| *size > 0)
            .unwrap_or(defaults.page_size);
        let sibling_count = std::env::var("TABULA_SIBLING_COUNT")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|count: &usize| *count <= MAX_SIBLING_COUNT)
            .unwrap_or(defaults.sibling_count);
        let collapse_threshold = std::env::var("TABULA_COLLAPSE_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| canonical_threshold(sibling_count));

        Self {
            page_size,
            sibling_count,
            collapse_threshold,
        }
    }

    pub fn window_policy(&self) -> WindowPolicy {
        WindowPolicy::with_siblings(self.sibling_count).collapse_above(self.collapse_threshold)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> TableConfig {
        TableConfig {
            search_keys: vec!["name".to_string(), "vendor.name".to_string()],
            status_key: Some("status".to_string()),
            page_size: 10,
            window: WindowPolicy::default(),
            on_filter_change: FilterChangePolicy::Clamp,
        }
    }

    #[test]
    fn test_valid_config_accepted() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_missing_search_keys_rejected() {
        let mut config = base_config();
        config.search_keys.clear();
        let result = config.validate();
        assert!(matches!(
            result,
            Err(TabulaError::Config(ConfigError::MissingRequired { ref field })) if field == "search_keys"
        ));
    }

    #[test]
    fn test_blank_search_key_rejected() {
        let mut config = base_config();
        config.search_keys.push("  ".to_string());
        let result = config.validate();
        if let Err(TabulaError::Config(ConfigError::InvalidValue { field, .. })) = result {
            assert_eq!(field, "search_keys[2]");
        } else {
            panic!("Expected ConfigError::InvalidValue");
        }
    }

    #[test]
    fn test_blank_status_key_rejected() {
        let config = base_config().with_status_key("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = base_config().with_page_size(0);
        if let Err(TabulaError::Config(ConfigError::InvalidValue { field, .. })) = config.validate() {
            assert_eq!(field, "page_size");
        } else {
            panic!("Expected ConfigError::InvalidValue");
        }
    }

    #[test]
    fn test_defaults_canonical() {
        let defaults = TableDefaults::default();
        assert_eq!(defaults.page_size, 10);
        assert_eq!(defaults.window_policy(), WindowPolicy::default());
    }

    #[test]
    fn test_excessive_sibling_count_rejected() {
        let config = base_config().with_window(WindowPolicy::with_siblings(usize::MAX));
        if let Err(TabulaError::Config(ConfigError::InvalidValue { field, .. })) = config.validate() {
            assert_eq!(field, "window.sibling_count");
        } else {
            panic!("Expected ConfigError::InvalidValue");
        }
        let config = base_config().with_window(WindowPolicy::with_siblings(MAX_SIBLING_COUNT));
        assert!(config.validate().is_ok());
    }

    /// Env vars are process-global, so every `from_env` case runs in this one test.
    #[test]
    fn test_defaults_from_env() {
        const VARS: [&str; 3] = [
            "TABULA_PAGE_SIZE",
            "TABULA_SIBLING_COUNT",
            "TABULA_COLLAPSE_THRESHOLD",
        ];
        let clear = || VARS.iter().for_each(|var| std::env::remove_var(var));

        clear();
        assert_eq!(TableDefaults::from_env(), TableDefaults::default());

        std::env::set_var("TABULA_PAGE_SIZE", "25");
        std::env::set_var("TABULA_SIBLING_COUNT", "2");
        let defaults = TableDefaults::from_env();
        assert_eq!(defaults.page_size, 25);
        assert_eq!(defaults.sibling_count, 2);
        assert_eq!(defaults.collapse_threshold, 9);

        std::env::set_var("TABULA_COLLAPSE_THRESHOLD", "3");
        assert_eq!(TableDefaults::from_env().collapse_threshold, 3);

        std::env::set_var("TABULA_PAGE_SIZE", "0");
        std::env::set_var("TABULA_SIBLING_COUNT", "many");
        std::env::remove_var("TABULA_COLLAPSE_THRESHOLD");
        let defaults = TableDefaults::from_env();
        assert_eq!(defaults.page_size, 10);
        assert_eq!(defaults.sibling_count, 1);
        assert_eq!(defaults.collapse_threshold, 7);

        std::env::set_var("TABULA_PAGE_SIZE", "ten");
        std::env::set_var("TABULA_SIBLING_COUNT", usize::MAX.to_string());
        let defaults = TableDefaults::from_env();
        assert_eq!(defaults.page_size, 10);
        assert_eq!(defaults.sibling_count, 1);
        assert_eq!(defaults.window_policy(), WindowPolicy::default());

        clear();
    }

    #[test]
    fn test_filter_change_policy_serde() {
        let json = serde_json::to_string(&FilterChangePolicy::ResetToFirst).unwrap();
        assert_eq!(json, "\"reset_to_first\"");
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = TableConfig::new(&["title"])
            .with_status_key("state")
            .with_page_size(25)
            .with_window(WindowPolicy::with_siblings(2))
            .with_filter_change(FilterChangePolicy::ResetToFirst);
        assert_eq!(config.search_keys, vec!["title".to_string()]);
        assert!(config.supports_status_filter());
        assert_eq!(config.page_size, 25);
        assert_eq!(config.window.collapse_threshold, 9);
        assert_eq!(config.on_filter_change, FilterChangePolicy::ResetToFirst);
        assert!(config.validate().is_ok());
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any positive page size with non-blank keys validates
        #[test]
        fn prop_config_accepts_valid_values(
            page_size in 1usize..1000,
            keys in prop::collection::vec("[a-z][a-z._]{0,10}", 1..5),
            siblings in 0usize..5,
        ) {
            let config = TableConfig {
                search_keys: keys,
                status_key: Some("status".to_string()),
                page_size,
                window: WindowPolicy::with_siblings(siblings),
                on_filter_change: FilterChangePolicy::Clamp,
            };
            prop_assert!(config.validate().is_ok());
        }

        /// Whitespace-only keys are always rejected
        #[test]
        fn prop_config_rejects_blank_key(blank in "[ \t]{0,4}") {
            let config = TableConfig {
                search_keys: vec![blank],
                status_key: None,
                page_size: 10,
                window: WindowPolicy::default(),
                on_filter_change: FilterChangePolicy::Clamp,
            };
            prop_assert!(config.validate().is_err());
        }
    }
}

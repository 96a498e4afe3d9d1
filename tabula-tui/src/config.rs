//! Configuration loading for the Tabula TUI.
//!
//! All top-level fields are required. Per-table pagination settings fall back
//! to [`TableDefaults`] when omitted.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tabula_core::{
    FilterChangePolicy, TableConfig, TableDefaults, TabulaError, WindowPolicy, STATUS_ALL,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    pub refresh_interval_ms: u64,
    pub persistence_path: PathBuf,
    pub log_path: PathBuf,
    pub theme: ThemeConfig,
    pub tables: Vec<TableSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

/// One table of the dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    pub title: String,
    /// JSON file holding an array of record objects
    pub data_path: PathBuf,
    pub columns: Vec<ColumnSpec>,
    pub search_keys: Vec<String>,
    pub status_key: Option<String>,
    /// Values offered by the status selector, besides "all"
    #[serde(default)]
    pub status_options: Vec<String>,
    pub page_size: Option<usize>,
    pub sibling_count: Option<usize>,
    pub collapse_threshold: Option<usize>,
    #[serde(default)]
    pub on_filter_change: FilterChangePolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnSpec {
    /// Field name or dotted path into the record
    pub key: String,
    pub label: String,
    /// Relative column width
    #[serde(default = "default_column_width")]
    pub width: u16,
}

fn default_column_width() -> u16 {
    1
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or TABULA_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("Invalid settings for table '{table}': {source}")]
    Table {
        table: String,
        #[source]
        source: TabulaError,
    },
}

impl TableSpec {
    /// Resolve this table's settings into a core [`TableConfig`].
    pub fn table_config(&self, defaults: &TableDefaults) -> TableConfig {
        let window = match (self.sibling_count, self.collapse_threshold) {
            (None, None) => defaults.window_policy(),
            (Some(siblings), None) => WindowPolicy::with_siblings(siblings),
            (siblings, Some(threshold)) => {
                WindowPolicy::with_siblings(siblings.unwrap_or(defaults.sibling_count))
                    .collapse_above(threshold)
            }
        };

        TableConfig {
            search_keys: self.search_keys.clone(),
            status_key: self.status_key.clone(),
            page_size: self.page_size.unwrap_or(defaults.page_size),
            window,
            on_filter_change: self.on_filter_change,
        }
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| ConfigError::InvalidValue {
            field: format!("tables[{}].{}", index, field),
            reason: reason.to_string(),
        };

        if self.title.trim().is_empty() {
            return Err(invalid("title", "must not be empty"));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(invalid("data_path", "must not be empty"));
        }
        if self.columns.is_empty() {
            return Err(invalid("columns", "at least one column is required"));
        }
        if self.columns.iter().any(|c| c.key.trim().is_empty()) {
            return Err(invalid("columns", "column keys must not be empty"));
        }
        if self.columns.iter().any(|c| c.width == 0) {
            return Err(invalid("columns", "column widths must be > 0"));
        }
        if !self.status_options.is_empty() && self.status_key.is_none() {
            return Err(invalid("status_options", "requires status_key"));
        }
        if self
            .status_options
            .iter()
            .any(|o| o.trim().is_empty() || o.eq_ignore_ascii_case(STATUS_ALL))
        {
            return Err(invalid(
                "status_options",
                "options must be non-empty and must not repeat the 'all' entry",
            ));
        }

        self.table_config(&TableDefaults::default())
            .validate()
            .map_err(|source| ConfigError::Table {
                table: self.title.clone(),
                source,
            })
    }
}

impl TuiConfig {
    /// Config file named by `--config <path>`, else by `TABULA_TUI_CONFIG`.
    pub fn locate() -> Result<PathBuf, ConfigError> {
        config_path_from_args()
            .or_else(config_path_from_env)
            .ok_or(ConfigError::MissingConfigPath)
    }

    /// Read and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::from_path(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_ms".to_string(),
                reason: "must be > 0".to_string(),
            });
        }
        if self.persistence_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "persistence_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !self.theme.name.eq_ignore_ascii_case("synthbrute") {
            return Err(ConfigError::InvalidValue {
                field: "theme.name".to_string(),
                reason: "only 'synthbrute' is supported".to_string(),
            });
        }
        if self.tables.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "tables".to_string(),
                reason: "at least one table is required".to_string(),
            });
        }

        let mut titles = HashSet::new();
        for (index, table) in self.tables.iter().enumerate() {
            table.validate(index)?;
            if !titles.insert(table.title.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("tables[{}].title", index),
                    reason: format!("duplicate table title '{}'", table.title),
                });
            }
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("TABULA_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

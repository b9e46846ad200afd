use crate::config::DEFAULT_ZIP_NAME;
use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, SearchMode, SearchQuery, SearchScope};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub fixtures: FixturesConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturesConfig {
    pub courses: String,
    pub professors: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub query: Option<String>,
    pub department: Option<String>,
    pub scope: Option<String>,
    pub mode: Option<String>,
    pub quick_limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default)]
    pub output_formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            output_formats: Vec::new(),
            compression: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

fn default_output_path() -> String {
    "./output".to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FIXTURES_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_required("fixtures.courses", &self.fixtures.courses)?;
        validation::validate_path("fixtures.courses", &self.fixtures.courses)?;
        validation::validate_required("fixtures.professors", &self.fixtures.professors)?;
        validation::validate_path("fixtures.professors", &self.fixtures.professors)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;

        if let Some(scope) = &self.search.scope {
            scope.parse::<SearchScope>()?;
        }
        if let Some(mode) = &self.search.mode {
            mode.parse::<SearchMode>()?;
        }
        if let Some(limit) = self.search.quick_limit {
            validation::validate_positive_number("search.quick_limit", limit, 1)?;
        }

        if let Some(compression) = &self.load.compression {
            if compression.enabled && self.load.output_formats.is_empty() {
                return Err(CatalogError::ConfigValidationError {
                    field: "load.compression".to_string(),
                    message: "Compression is enabled but no output formats are configured"
                        .to_string(),
                });
            }
            if let Some(filename) = &compression.filename {
                validation::validate_non_empty_string("load.compression.filename", filename)?;
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl ConfigProvider for TomlConfig {
    fn courses_path(&self) -> &str {
        &self.fixtures.courses
    }

    fn professors_path(&self) -> &str {
        &self.fixtures.professors
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn search_query(&self) -> SearchQuery {
        let search = &self.search;
        SearchQuery::new(search.query.clone().unwrap_or_default())
            .with_department(
                search
                    .department
                    .clone()
                    .map(Into::into)
                    .unwrap_or_default(),
            )
            .with_scope(
                search
                    .scope
                    .as_deref()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_default(),
            )
            .with_mode(
                search
                    .mode
                    .as_deref()
                    .and_then(|m| m.parse().ok())
                    .unwrap_or_default(),
            )
    }

    fn quick_limit(&self) -> Option<usize> {
        self.search.quick_limit
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        self.load
            .output_formats
            .iter()
            .filter_map(|f| f.parse().ok())
            .collect()
    }

    fn compression_filename(&self) -> Option<&str> {
        self.load
            .compression
            .as_ref()
            .filter(|c| c.enabled)
            .map(|c| c.filename.as_deref().unwrap_or(DEFAULT_ZIP_NAME))
    }
}

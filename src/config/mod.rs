pub mod cli;
pub mod toml_config;

/// 壓縮輸出但未指定檔名時使用的 zip 名稱
pub const DEFAULT_ZIP_NAME: &str = "catalog_output.zip";

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, SearchMode, SearchQuery};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "college-catalog")]
#[command(about = "Search the college's faculty members and course catalog")]
pub struct CliConfig {
    #[arg(long, default_value = "fixtures/courses-data.json")]
    pub courses_path: String,

    #[arg(long, default_value = "fixtures/professors-data.json")]
    pub professors_path: String,

    /// Free-text query (case-sensitive substring)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// "all", "no-department" or part of a department name
    #[arg(short, long, default_value = "all")]
    pub department: String,

    /// all, professors or courses
    #[arg(long, default_value = "all")]
    pub scope: String,

    /// Show every record when the query is empty
    #[arg(long)]
    pub list_all: bool,

    /// Case-insensitive name/title lookup, capped by --limit
    #[arg(long)]
    pub quick: bool,

    #[arg(long, default_value = "5")]
    pub limit: usize,

    /// Show one department and its faculty instead of searching
    #[arg(long)]
    pub department_id: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Export formats: json, csv, tsv
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Bundle exported files into a single zip
    #[arg(long)]
    pub compress: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn courses_path(&self) -> &str {
        &self.courses_path
    }

    fn professors_path(&self) -> &str {
        &self.professors_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn search_query(&self) -> SearchQuery {
        let mode = if self.list_all {
            SearchMode::ListAll
        } else {
            SearchMode::Search
        };
        SearchQuery::new(self.query.clone())
            .with_department(self.department.clone().into())
            .with_scope(self.scope.parse().unwrap_or_default())
            .with_mode(mode)
    }

    fn quick_limit(&self) -> Option<usize> {
        self.quick.then_some(self.limit)
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        self.formats.iter().filter_map(|f| f.parse().ok()).collect()
    }

    fn compression_filename(&self) -> Option<&str> {
        self.compress.then_some(DEFAULT_ZIP_NAME)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_required("courses_path", &self.courses_path)?;
        validation::validate_path("courses_path", &self.courses_path)?;
        validation::validate_required("professors_path", &self.professors_path)?;
        validation::validate_path("professors_path", &self.professors_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        self.scope.parse::<crate::domain::model::SearchScope>()?;
        validation::validate_output_formats("formats", &self.formats)?;
        if self.quick {
            validation::validate_positive_number("limit", self.limit, 1)?;
        }
        Ok(())
    }
}

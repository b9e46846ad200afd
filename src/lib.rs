pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{catalog::Catalog, engine::CatalogEngine, pipeline::CatalogPipeline};
pub use domain::model::{
    Course, Department, DepartmentFilter, FlattenedCourse, Professor, SearchMode, SearchQuery,
    SearchResults, SearchScope,
};
pub use utils::error::{CatalogError, Result};

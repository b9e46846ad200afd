use crate::core::catalog::Catalog;
use crate::core::export;
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::{CatalogError, Result};
use chrono::Utc;

pub struct CatalogPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CatalogPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_fixture(&self, path: &str) -> Result<String> {
        tracing::debug!("Reading fixture: {}", path);
        let bytes = self.storage.read_file(path).await?;
        String::from_utf8(bytes).map_err(|e| CatalogError::FixtureError {
            fixture: path.to_string(),
            message: format!("not valid UTF-8: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CatalogPipeline<S, C> {
    async fn extract(&self) -> Result<Catalog> {
        let courses = self.read_fixture(self.config.courses_path()).await?;
        let professors = self.read_fixture(self.config.professors_path()).await?;

        let catalog = Catalog::from_json_str(&courses, &professors)?;
        tracing::debug!(
            "Fixtures parsed: {} professors, {} departments, {} courses",
            catalog.professors().len(),
            catalog.departments().len(),
            catalog.flattened_courses().len()
        );
        Ok(catalog)
    }

    async fn transform(&self, catalog: Catalog) -> Result<TransformResult> {
        let query = self.config.search_query();
        let quick_limit = self.config.quick_limit();

        let results = match quick_limit {
            Some(limit) => {
                tracing::debug!("Quick search for '{}' (limit {})", query.text, limit);
                catalog.quick_search(&query.text, limit)
            }
            None => {
                tracing::debug!(
                    "Running {} over {} with department filter '{}'",
                    query.mode.as_str(),
                    query.scope.as_str(),
                    query.department
                );
                catalog.run(&query)
            }
        };

        Ok(TransformResult {
            query,
            quick_limit,
            results,
            generated_at: Utc::now(),
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<Option<String>> {
        let formats = self.config.output_formats();
        if formats.is_empty() {
            tracing::debug!("No output formats requested, skipping export");
            return Ok(None);
        }

        let files = export::render(result, &formats)?;
        let output_dir = self.config.output_path().trim_end_matches('/');

        // 壓縮時只輸出一個 zip
        if let Some(zip_name) = self.config.compression_filename() {
            let zip_data = export::bundle(&files)?;
            let zip_path = format!("{}/{}", output_dir, zip_name);
            tracing::debug!("Writing ZIP file ({} bytes) to {}", zip_data.len(), zip_path);
            self.storage.write_file(&zip_path, &zip_data).await?;
            return Ok(Some(zip_path));
        }

        for file in &files {
            let path = format!("{}/{}", output_dir, file.name);
            tracing::debug!("Writing {} ({} bytes)", path, file.data.len());
            self.storage.write_file(&path, &file.data).await?;
        }
        Ok(Some(output_dir.to_string()))
    }
}

use crate::core::{Pipeline, TransformResult};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub result: TransformResult,
    /// 輸出位置，沒有匯出時為 `None`
    pub output_path: Option<String>,
}

pub struct CatalogEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CatalogEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Loading fixtures...");
        let catalog = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} professors and {} courses",
            catalog.professors().len(),
            catalog.flattened_courses().len()
        );

        let result = self.pipeline.transform(catalog).await?;
        tracing::info!(
            "Matched {} professors and {} courses",
            result.results.professors.len(),
            result.results.courses.len()
        );

        let output_path = self.pipeline.load(&result).await?;
        if let Some(path) = &output_path {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(RunReport {
            result,
            output_path,
        })
    }
}

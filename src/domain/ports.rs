use crate::core::catalog::Catalog;
use crate::domain::model::{OutputFormat, SearchQuery, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn courses_path(&self) -> &str;
    fn professors_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn search_query(&self) -> SearchQuery;
    /// `Some(limit)` 表示改用快速搜尋
    fn quick_limit(&self) -> Option<usize>;
    fn output_formats(&self) -> Vec<OutputFormat>;
    /// 需要壓縮輸出時的 zip 檔名
    fn compression_filename(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Catalog>;
    async fn transform(&self, catalog: Catalog) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<Option<String>>;
}

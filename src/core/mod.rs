pub mod catalog;
pub mod engine;
pub mod export;
pub mod filter;
pub mod flatten;
pub mod labels;
pub mod pipeline;

pub use crate::domain::model::{SearchResults, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::domain::model::{ExportFormat, ExportResult, GenerationRequest, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for exported text: a file on disk ("download") or stdout ("copy").
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn request(&self) -> GenerationRequest;
    fn format(&self) -> ExportFormat;
    fn seed(&self) -> Option<u64>;

    /// Overrides the timestamped default export file name.
    fn file_name(&self) -> Option<String> {
        None
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, records: Vec<Record>) -> Result<ExportResult>;
    async fn load(&self, result: &ExportResult) -> Result<String>;
}

use super::enums::OperationType;
use super::structs::ResolvedResource;
use crate::error::Result;
use async_trait::async_trait;

/// Where downloaded JSON ends up.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    async fn download(&self, filename: &str, body: &str) -> Result<()>;
}

/// Where JSON is rendered for a human to read.
#[async_trait]
pub trait DisplaySink: Send + Sync {
    async fn display(&self, data: &serde_json::Value) -> Result<()>;
}

#[async_trait]
pub trait ResultReporter: Send + Sync {
    async fn operation_result(
        &self,
        operation: OperationType,
        code: u32,
        message: String,
    ) -> Result<()>;
}

pub trait DeliverySink: DownloadSink + DisplaySink + ResultReporter {}
impl<T: DownloadSink + DisplaySink + ResultReporter> DeliverySink for T {}

pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, url: &str) -> Result<ResolvedResource>;
}

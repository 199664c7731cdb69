use crate::base::enums::OperationType;
use crate::base::traits::{DisplaySink, DownloadSink, ResultReporter};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub mod channel;
pub mod file;
pub mod stdout;

/// Discards everything handed to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

#[async_trait]
impl DownloadSink for NullSink {
    async fn download(&self, _filename: &str, _body: &str) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl DisplaySink for NullSink {
    async fn display(&self, _data: &serde_json::Value) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl ResultReporter for NullSink {
    async fn operation_result(&self, _operation: OperationType, _code: u32, _message: String) -> Result<()> {
        Ok(())
    }
}

/// Bundles independent download, display and result sinks into one delivery capability.
#[derive(Clone)]
pub struct Delivery {
    download: Arc<dyn DownloadSink>,
    display: Arc<dyn DisplaySink>,
    reporter: Arc<dyn ResultReporter>,
}

impl Delivery {
    pub fn new(
        download: Arc<dyn DownloadSink>,
        display: Arc<dyn DisplaySink>,
        reporter: Arc<dyn ResultReporter>,
    ) -> Self {
        Self { download, display, reporter }
    }
}

#[async_trait]
impl DownloadSink for Delivery {
    async fn download(&self, filename: &str, body: &str) -> Result<()> {
        self.download.download(filename, body).await
    }
}

#[async_trait]
impl DisplaySink for Delivery {
    async fn display(&self, data: &serde_json::Value) -> Result<()> {
        self.display.display(data).await
    }
}

#[async_trait]
impl ResultReporter for Delivery {
    async fn operation_result(&self, operation: OperationType, code: u32, message: String) -> Result<()> {
        self.reporter.operation_result(operation, code, message).await
    }
}

use crate::base::algorithms::pretty_json;
use crate::base::enums::{DeliveryEvent, OperationType};
use crate::base::traits::{DisplaySink, DownloadSink, ResultReporter};
use crate::error::Result;
use async_trait::async_trait;

/// Broadcasts every delivery as a [`DeliveryEvent`] for embedding hosts to consume.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    inner_tx: tokio::sync::broadcast::Sender<DeliveryEvent>,
    buffer_size: usize,
}

impl ChannelSink {
    pub fn new(buffer_size: usize) -> Self {
        let (inner_tx, _) = tokio::sync::broadcast::channel(buffer_size);
        Self { inner_tx, buffer_size }
    }

    /// Forward the broadcast stream into an mpsc receiver. The forwarder stops once
    /// the receiver is dropped or every sender is gone.
    pub fn subscribe_mpsc(&self) -> tokio::sync::mpsc::Receiver<DeliveryEvent> {
        let (tx, rx) = tokio::sync::mpsc::channel(self.buffer_size);
        let mut inner_rx = self.inner_tx.subscribe();

        tokio::spawn(async move {
            loop {
                match inner_rx.recv().await {
                    Ok(event) => {
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "delivery subscriber lagged");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        rx
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<DeliveryEvent> {
        self.inner_tx.subscribe()
    }

    /// Returns how many subscribers saw the event. No subscribers is not an error.
    pub fn send(&self, event: DeliveryEvent) -> usize {
        self.inner_tx.send(event).unwrap_or(0)
    }
}

#[async_trait]
impl DownloadSink for ChannelSink {
    async fn download(&self, filename: &str, body: &str) -> Result<()> {
        self.send(DeliveryEvent::Download {
            filename: filename.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl DisplaySink for ChannelSink {
    async fn display(&self, data: &serde_json::Value) -> Result<()> {
        self.send(DeliveryEvent::Display { body: pretty_json(data)? });
        Ok(())
    }
}

#[async_trait]
impl ResultReporter for ChannelSink {
    async fn operation_result(&self, operation: OperationType, code: u32, message: String) -> Result<()> {
        self.send(DeliveryEvent::OperationResult { operation, code, message });
        Ok(())
    }
}

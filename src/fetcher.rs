use crate::base::algorithms::pretty_json;
use crate::base::enums::OperationType;
use crate::base::structs::{FetchMeta, FetchOptions, FetchReport, Fetched, ResolvedResource};
use crate::base::traits::{DeliverySink, ResourceResolver};
use crate::error::Result;
use crate::resolvers::breadcrumbs::BreadcrumbsResolver;
use crate::resolvers::url::UrlResolver;
use crate::sinks::Delivery;
use crate::sinks::file::FileSink;
use crate::sinks::stdout::StdoutDisplay;

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Arguments for fetching an API URL the caller already knows.
pub struct ApiFetchArgs<'a, F> {
    pub api_url: &'a str,
    pub filename: Option<&'a str>,
    /// Render the JSON to the display sink as well.
    pub modify_document: bool,
    pub callback: F,
}

/// Resolves a content URL, fetches its JSON once and hands it to the delivery sinks.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    options: Arc<FetchOptions>,
    resolver: Arc<dyn ResourceResolver>,
    delivery: Arc<dyn DeliverySink>,
}

impl Fetcher {
    pub fn new(
        options: FetchOptions,
        resolver: Box<dyn ResourceResolver>,
        delivery: Box<dyn DeliverySink>,
    ) -> Result<Self> {
        let mut builder = reqwest::ClientBuilder::new();
        if let Some(agent) = &options.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        if options.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(options.timeout));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            options: Arc::new(options),
            resolver: Arc::from(resolver),
            delivery: Arc::from(delivery),
        })
    }

    /// Breadcrumbs resolver, downloads into `options.save_path`, display on stdout.
    pub fn with_defaults(options: FetchOptions) -> Result<Self> {
        let resolver = BreadcrumbsResolver::new(&options)?;
        let display = Arc::new(StdoutDisplay::new());
        let delivery = Delivery::new(
            Arc::new(FileSink::new(&options.save_path).with_create_dirs(options.create_dirs)),
            display.clone(),
            display,
        );
        Self::new(options, Box::new(resolver), Box::new(delivery))
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    pub fn resolve(&self, url: &str) -> Result<ResolvedResource> {
        self.resolver.resolve(url)
    }

    /// The one operation every calling convention below is built on.
    pub async fn fetch_full(&self, url: &str, filename: Option<&str>) -> Result<Fetched> {
        let resolved = match self.resolve(url) {
            Ok(resolved) => resolved,
            Err(e) => {
                self.report(OperationType::Resolve, 400, e.to_string()).await;
                return Err(e);
            }
        };
        self.fetch_resolved(resolved, filename, self.options.display).await
    }

    pub async fn fetch(&self, url: &str, filename: Option<&str>) -> Result<Value> {
        self.fetch_full(url, filename).await.map(|fetched| fetched.data)
    }

    /// Direct-return convention.
    pub async fn fetch_report(&self, url: &str, filename: Option<&str>) -> FetchReport {
        self.fetch(url, filename).await.into()
    }

    /// Callback convention. The callback runs exactly once.
    pub async fn fetch_with_callback<F>(&self, url: &str, filename: Option<&str>, callback: F)
    where
        F: FnOnce(FetchReport),
    {
        callback(self.fetch_report(url, filename).await);
    }

    /// Callback convention for a known API URL. Skips the content-URL patterns
    /// but still refuses anything that is not http(s).
    pub async fn fetch_api_url<F>(&self, args: ApiFetchArgs<'_, F>)
    where
        F: FnOnce(FetchReport),
    {
        let ApiFetchArgs { api_url, filename, modify_document, callback } = args;
        let resolved = match UrlResolver::with_headers(self.options.headers.clone()).resolve(api_url) {
            Ok(resolved) => resolved,
            Err(e) => {
                self.report(OperationType::Resolve, 400, e.to_string()).await;
                callback(FetchReport::Error(e.to_string()));
                return;
            }
        };
        let result = self
            .fetch_resolved(resolved, filename, modify_document)
            .await
            .map(|fetched| fetched.data);
        callback(result.into());
    }

    /// Runs the fetch on the current runtime and delivers the report to `callback`
    /// when it settles.
    pub fn spawn_with_callback<F>(
        &self,
        url: impl Into<String>,
        filename: Option<String>,
        callback: F,
    ) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(FetchReport) + Send + 'static,
    {
        let fetcher = self.clone();
        let url = url.into();
        tokio::spawn(async move {
            fetcher.fetch_with_callback(&url, filename.as_deref(), callback).await;
        })
    }

    /// Synchronous convention. Blocks until the response has been parsed and
    /// delivered; must not be called from inside an async runtime.
    pub fn fetch_blocking(&self, url: &str, filename: Option<&str>) -> FetchReport {
        if tokio::runtime::Handle::try_current().is_ok() {
            return FetchReport::Error("fetch_blocking called from within an async runtime".into());
        }
        let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(e) => return FetchReport::Error(e.to_string()),
        };
        runtime.block_on(self.fetch_report(url, filename))
    }

    async fn fetch_resolved(
        &self,
        resolved: ResolvedResource,
        filename: Option<&str>,
        display: bool,
    ) -> Result<Fetched> {
        match self.request_and_deliver(resolved, filename, display).await {
            Ok(fetched) => {
                // A parseable body is data whatever the status; the status only becomes the code.
                self.report(
                    OperationType::Fetch,
                    fetched.meta.status as u32,
                    format!("Fetched {} into {}", fetched.resolved.url, fetched.filename),
                )
                .await;
                Ok(fetched)
            }
            Err(e) => {
                tracing::warn!(error = %e, "fetch failed");
                self.report(OperationType::Fetch, 500, format!("Fetch failed: {}", e)).await;
                Err(e)
            }
        }
    }

    async fn request_and_deliver(
        &self,
        resolved: ResolvedResource,
        filename: Option<&str>,
        display: bool,
    ) -> Result<Fetched> {
        let mut request = self.client.get(&resolved.url);
        for (key, value) in &resolved.headers {
            request = request.header(key.as_str(), value.as_str());
        }

        tracing::debug!(url = %resolved.url, "requesting");
        let response = request.send().await?;
        let status = response.status();
        let meta = FetchMeta::from_response(status, response.headers());

        if !status.is_success() {
            tracing::warn!(url = %resolved.url, status = %status, "non-success status, delivering body as is");
        }

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body)?;

        let filename = filename
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.options.default_filename)
            .to_string();

        self.delivery.download(&filename, &pretty_json(&data)?).await?;
        if display {
            self.delivery.display(&data).await?;
        }

        tracing::info!(
            url = %resolved.url,
            status = meta.status,
            content_type = meta.content_type.as_deref().unwrap_or("-"),
            filename = %filename,
            "delivered"
        );

        Ok(Fetched {
            resolved,
            meta,
            filename,
            data,
        })
    }

    async fn report(&self, operation: OperationType, code: u32, message: String) {
        if let Err(e) = self.delivery.operation_result(operation, code, message).await {
            tracing::warn!(error = %e, "result reporter failed");
        }
    }
}

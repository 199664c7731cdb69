//! Resolve educational-content URLs (`/course/<id>`, `/lessons/<id>/`, ...) to their
//! backend breadcrumbs endpoint, fetch the JSON once and hand it to pluggable
//! download and display sinks.
//!
//! ```no_run
//! use crumbfetch::base::structs::FetchOptions;
//! use crumbfetch::fetcher::Fetcher;
//!
//! # async fn run() -> crumbfetch::error::Result<()> {
//! let fetcher = Fetcher::with_defaults(FetchOptions::default().with_save_path("out"))?;
//! let report = fetcher.fetch_report("https://example.com/lesson/xyz-1/", None).await;
//! println!("{}", serde_json::to_string(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod base;
pub mod config;
pub mod error;
pub mod fetcher;
#[cfg(feature = "cli")]
pub mod logging;
pub mod resolvers;
pub mod sinks;
pub mod template;

pub use base::enums::{Endpoint, ResourceType};
pub use base::structs::{FetchOptions, FetchReport, ResourceReference};
pub use error::{Error, ErrorKind, Result};
pub use fetcher::{ApiFetchArgs, Fetcher};
pub use resolvers::breadcrumbs::BreadcrumbsResolver;

/// Resolve `url` to its breadcrumbs API URL using the default API origin.
pub fn resolve(url: &str) -> Result<String> {
    use base::traits::ResourceResolver;
    BreadcrumbsResolver::new(&FetchOptions::default())?
        .resolve(url)
        .map(|resolved| resolved.url)
}

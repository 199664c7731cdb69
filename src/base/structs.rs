use super::enums::{Endpoint, ResourceType};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

pub const DEFAULT_API_BASE: &str = "https://prestable.pierce-admin.praktikum.yandex-team.ru";
pub const DEFAULT_FILENAME: &str = "download.json";

/// A resource type paired with the identifier pulled out of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReference {
    pub resource_type: ResourceType,
    pub id: String,
}

impl ResourceReference {
    pub fn new(resource_type: ResourceType, id: impl Into<String>) -> Self {
        Self {
            resource_type,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedResource {
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// `None` when the caller handed over an API URL directly.
    pub reference: Option<ResourceReference>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Origin the endpoint path is appended to.
    pub api_base: String,
    pub endpoint: Endpoint,
    /// Directory downloaded JSON files are written to.
    pub save_path: String,
    pub create_dirs: bool,
    /// Filename used when the caller does not supply one.
    pub default_filename: String,
    /// Render the fetched JSON to the display sink.
    pub display: bool,
    /// Drop `?query` and `#fragment` before matching.
    pub strip_query: bool,

    #[serde(default)]
    pub headers: Vec<(String, String)>,
    pub user_agent: Option<String>,
    /// Request timeout in seconds. 0 (the default) waits indefinitely.
    pub timeout: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            endpoint: Endpoint::default(),
            save_path: ".".to_string(),
            create_dirs: true,
            default_filename: DEFAULT_FILENAME.to_string(),
            display: false,
            strip_query: true,
            headers: Vec::new(),
            user_agent: Some(concat!("crumbfetch/", env!("CARGO_PKG_VERSION")).into()),
            timeout: 0,
        }
    }
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_save_path(mut self, path: impl Into<String>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    pub fn with_strip_query(mut self, strip: bool) -> Self {
        self.strip_query = strip;
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = secs;
        self
    }
}

/// Response metadata recorded alongside a fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchMeta {
    pub status: u16,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub fetched_at: DateTime<Utc>,
}

impl FetchMeta {
    pub fn from_response(status: reqwest::StatusCode, headers: &reqwest::header::HeaderMap) -> Self {
        let content_type = headers
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let content_length = headers
            .get(reqwest::header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());

        Self {
            status: status.as_u16(),
            content_type,
            content_length,
            fetched_at: Utc::now(),
        }
    }
}

/// Everything a successful fetch produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fetched {
    pub resolved: ResolvedResource,
    pub meta: FetchMeta,
    pub filename: String,
    pub data: serde_json::Value,
}

/// Caller-facing outcome: `{"data": ...}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchReport {
    Data(serde_json::Value),
    Error(String),
}

impl FetchReport {
    pub fn is_ok(&self) -> bool {
        matches!(self, FetchReport::Data(_))
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            FetchReport::Data(data) => Some(data),
            FetchReport::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchReport::Data(_) => None,
            FetchReport::Error(message) => Some(message),
        }
    }
}

impl<E: std::fmt::Display> From<std::result::Result<serde_json::Value, E>> for FetchReport {
    fn from(result: std::result::Result<serde_json::Value, E>) -> Self {
        match result {
            Ok(data) => FetchReport::Data(data),
            Err(e) => FetchReport::Error(e.to_string()),
        }
    }
}

/// One level of a breadcrumbs response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbLevel {
    #[serde(rename = "type")]
    pub level_type: String,
    pub id: String,
    pub name: Option<String>,
}

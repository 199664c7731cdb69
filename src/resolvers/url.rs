use crate::error::Result;
use crate::base::traits::ResourceResolver;
use crate::base::structs::ResolvedResource;

/// Passes an already-built API URL straight through.
#[derive(Debug, Clone, Default)]
pub struct UrlResolver {
    headers: Vec<(String, String)>,
}

impl UrlResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers(headers: Vec<(String, String)>) -> Self {
        Self { headers }
    }
}

impl ResourceResolver for UrlResolver {
    fn resolve(&self, url: &str) -> Result<ResolvedResource> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!("Unsupported API URL: {}", url).into());
        }
        Ok(ResolvedResource {
            url: url.to_string(),
            headers: self.headers.clone(),
            reference: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_http_urls_through() {
        let resolved = UrlResolver::new()
            .resolve("https://api.test/content/lessons/x/breadcrumbs/")
            .unwrap();
        assert_eq!(resolved.url, "https://api.test/content/lessons/x/breadcrumbs/");
        assert!(resolved.reference.is_none());
    }

    #[test]
    fn rejects_non_http_schemes() {
        let err = UrlResolver::new().resolve("ftp://api.test/x").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported API URL: ftp://api.test/x");
    }
}

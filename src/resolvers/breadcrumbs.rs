use crate::error::{Error, Result};
use crate::base::algorithms::strip_query;
use crate::base::enums::{Endpoint, ResourceType};
use crate::base::structs::{FetchOptions, ResolvedResource, ResourceReference};
use crate::base::traits::ResourceResolver;
use crate::template::EndpointRenderer;
use regex::Regex;

/// Maps content URLs such as `https://host/lesson/xyz-1/` onto the backend API.
#[derive(Debug, Clone)]
pub struct BreadcrumbsResolver {
    patterns: Vec<(ResourceType, Regex)>,
    renderer: EndpointRenderer,
    api_base: String,
    endpoint: Endpoint,
    strip_query: bool,
    headers: Vec<(String, String)>,
}

impl BreadcrumbsResolver {
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let patterns = ResourceType::CATALOG
            .into_iter()
            .map(|resource_type| {
                // ASCII-only: `\w` is [A-Za-z0-9_] and case folding ignores non-ASCII look-alikes.
                let pattern = format!(r"(?i-u)/{}s?/([\w\-]+)(/$|$)", regex::escape(resource_type.tag()));
                Ok((resource_type, Regex::new(&pattern)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            renderer: EndpointRenderer::new()?,
            api_base: options.api_base.trim_end_matches('/').to_string(),
            endpoint: options.endpoint,
            strip_query: options.strip_query,
            headers: options.headers.clone(),
        })
    }

    /// First catalog entry whose pattern matches the trailing `/<tag>/<id>` pair wins.
    pub fn identify(&self, url: &str) -> Result<ResourceReference> {
        let url = if self.strip_query { strip_query(url) } else { url };

        self.patterns
            .iter()
            .find_map(|(resource_type, re)| {
                re.captures(url)
                    .and_then(|caps| caps.get(1))
                    .map(|id| ResourceReference::new(*resource_type, id.as_str()))
            })
            .ok_or_else(Error::invalid_resource)
    }

    pub fn api_url(&self, reference: &ResourceReference) -> Result<String> {
        self.renderer.render(self.endpoint, &self.api_base, reference)
    }
}

impl ResourceResolver for BreadcrumbsResolver {
    fn resolve(&self, url: &str) -> Result<ResolvedResource> {
        let reference = self.identify(url)?;
        let api_url = self.api_url(&reference)?;
        tracing::debug!(
            resource = %reference.resource_type,
            id = %reference.id,
            api_url = %api_url,
            "resolved resource url"
        );
        Ok(ResolvedResource {
            url: api_url,
            headers: self.headers.clone(),
            reference: Some(reference),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "https://prestable.pierce-admin.praktikum.yandex-team.ru";

    fn resolver() -> BreadcrumbsResolver {
        BreadcrumbsResolver::new(&FetchOptions::default()).unwrap()
    }

    fn resolve(url: &str) -> Result<String> {
        resolver().resolve(url).map(|r| r.url)
    }

    #[test]
    fn every_tag_resolves_singular_and_plural() {
        for resource_type in ResourceType::CATALOG {
            let tag = resource_type.tag();
            let expected = format!("{}/content/{}s/id_1-a/breadcrumbs/", HOST, tag);
            for url in [
                format!("https://example.com/{}/id_1-a", tag),
                format!("https://example.com/{}/id_1-a/", tag),
                format!("https://example.com/{}s/id_1-a", tag),
                format!("https://example.com/{}s/id_1-a/", tag),
            ] {
                assert_eq!(resolve(&url).unwrap(), expected, "url: {}", url);
            }
        }
    }

    #[test]
    fn lesson_with_trailing_slash() {
        assert_eq!(
            resolve("https://example.com/lesson/xyz-1/").unwrap(),
            format!("{}/content/lessons/xyz-1/breadcrumbs/", HOST)
        );
    }

    #[test]
    fn plural_track_without_trailing_slash() {
        assert_eq!(
            resolve("https://example.com/tracks/abc").unwrap(),
            format!("{}/content/tracks/abc/breadcrumbs/", HOST)
        );
    }

    #[test]
    fn tag_match_ignores_case_but_id_keeps_it() {
        let lower = resolve("https://example.com/course/AbC").unwrap();
        let upper = resolve("https://example.com/Course/AbC").unwrap();
        let shouting = resolve("https://example.com/COURSES/AbC/").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, shouting);
        assert!(lower.ends_with("/content/courses/AbC/breadcrumbs/"));
    }

    #[test]
    fn unknown_segment_is_invalid_resource() {
        for url in [
            "https://example.com/unknown/abc",
            "https://example.com/foo/bar",
            "https://example.com/",
            "",
        ] {
            let err = resolve(url).unwrap_err();
            assert!(err.is_invalid_resource(), "url: {}", url);
            assert_eq!(err.to_string(), "Invalid URL or unsupported resource type");
        }
    }

    #[test]
    fn multi_segment_urls_resolve_by_trailing_pair() {
        // The end anchor means only the last `/<tag>/<id>` pair can match.
        let reference = resolver()
            .identify("https://example.com/course/abc/lesson/xyz/")
            .unwrap();
        assert_eq!(reference, ResourceReference::new(ResourceType::Lesson, "xyz"));

        let reference = resolver()
            .identify("https://example.com/lesson/xyz/track/abc")
            .unwrap();
        assert_eq!(reference, ResourceReference::new(ResourceType::Track, "abc"));
    }

    #[test]
    fn tag_must_be_a_whole_segment() {
        assert!(resolve("https://example.com/subtask/t-1").unwrap_err().is_invalid_resource());
        assert!(resolve("https://example.com/tasker/t-1").unwrap_err().is_invalid_resource());
    }

    #[test]
    fn identifier_charset_is_restricted() {
        for url in [
            "https://example.com/lesson/a.b",
            "https://example.com/lesson/a%20b",
            "https://example.com/lesson/a/b/c",
        ] {
            assert!(resolve(url).unwrap_err().is_invalid_resource(), "url: {}", url);
        }
    }

    #[test]
    fn non_ascii_identifier_is_rejected() {
        for url in [
            "https://example.com/lesson/привет",
            "https://example.com/lesson/caf\u{e9}/",
            "https://example.com/tasks/\u{0661}\u{0662}",
        ] {
            assert!(resolve(url).unwrap_err().is_invalid_resource(), "url: {}", url);
        }
    }

    #[test]
    fn non_ascii_tag_look_alike_is_rejected() {
        // KELVIN SIGN folds to `k` under Unicode case rules.
        assert!(resolve("https://example.com/trac\u{212A}/abc").unwrap_err().is_invalid_resource());
        // LATIN SMALL LETTER LONG S folds to `s`.
        assert!(resolve("https://example.com/\u{17F}ask/abc").unwrap_err().is_invalid_resource());
    }

    #[test]
    fn query_and_fragment_are_stripped_by_default() {
        assert_eq!(
            resolve("https://example.com/task/t-9/?tab=review#top").unwrap(),
            format!("{}/content/tasks/t-9/breadcrumbs/", HOST)
        );
    }

    #[test]
    fn query_fails_when_stripping_disabled() {
        let options = FetchOptions::default().with_strip_query(false);
        let resolver = BreadcrumbsResolver::new(&options).unwrap();
        assert!(resolver
            .resolve("https://example.com/task/t-9?tab=review")
            .unwrap_err()
            .is_invalid_resource());
    }

    #[test]
    fn custom_base_and_details_endpoint() {
        let options = FetchOptions::default()
            .with_api_base("http://127.0.0.1:9000/")
            .with_endpoint(Endpoint::Details);
        let resolver = BreadcrumbsResolver::new(&options).unwrap();
        assert_eq!(
            resolver.resolve("/facult/f1").unwrap().url,
            "http://127.0.0.1:9000/content/facults/f1/"
        );
    }
}

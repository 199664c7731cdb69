//! Environment-driven configuration layered over [`FetchOptions::default`].
//!
//! Variables (a `.env` file in the working directory is honoured):
//! `CRUMBFETCH_API_BASE`, `CRUMBFETCH_DOWNLOAD_DIR`, `CRUMBFETCH_DISPLAY`,
//! `CRUMBFETCH_TIMEOUT_SECS`, `CRUMBFETCH_USER_AGENT`.

use crate::base::structs::FetchOptions;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub const ENV_API_BASE: &str = "CRUMBFETCH_API_BASE";
pub const ENV_DOWNLOAD_DIR: &str = "CRUMBFETCH_DOWNLOAD_DIR";
pub const ENV_DISPLAY: &str = "CRUMBFETCH_DISPLAY";
pub const ENV_TIMEOUT_SECS: &str = "CRUMBFETCH_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "CRUMBFETCH_USER_AGENT";

/// Load `.env` from the working directory or one of its parents.
///
/// Returns the loaded path, `None` when there is no file, and an error when the
/// file exists but cannot be read or parsed. Nothing is logged here: the binary
/// calls this before its subscriber is installed.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Same as [`load_dotenv`] for an explicit file.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn from_env() -> Result<FetchOptions> {
    from_lookup(|key| std::env::var(key).ok())
}

pub fn from_lookup<F>(lookup: F) -> Result<FetchOptions>
where
    F: Fn(&str) -> Option<String>,
{
    let mut options = FetchOptions::default();
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(base) = get(ENV_API_BASE) {
        options = options.with_api_base(base.trim());
    }
    if let Some(dir) = get(ENV_DOWNLOAD_DIR) {
        options = options.with_save_path(dir);
    }
    if let Some(display) = get(ENV_DISPLAY) {
        options = options.with_display(parse_bool(ENV_DISPLAY, &display)?);
    }
    if let Some(timeout) = get(ENV_TIMEOUT_SECS) {
        let secs = timeout
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("{} must be a whole number of seconds, got {:?}", ENV_TIMEOUT_SECS, timeout))?;
        options = options.with_timeout(secs);
    }
    if let Some(agent) = get(ENV_USER_AGENT) {
        options = options.with_user_agent(agent);
    }

    Ok(options)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(format!("{} must be a boolean, got {:?}", key, value).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let options = from_lookup(lookup(&[])).unwrap();
        let defaults = FetchOptions::default();
        assert_eq!(options.api_base, defaults.api_base);
        assert_eq!(options.timeout, 0);
        assert!(!options.display);
    }

    #[test]
    fn overrides_apply() {
        let options = from_lookup(lookup(&[
            (ENV_API_BASE, "http://localhost:1234/"),
            (ENV_DOWNLOAD_DIR, "/tmp/crumbs"),
            (ENV_DISPLAY, "Yes"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_USER_AGENT, "tester"),
        ]))
        .unwrap();
        assert_eq!(options.api_base, "http://localhost:1234");
        assert_eq!(options.save_path, "/tmp/crumbs");
        assert!(options.display);
        assert_eq!(options.timeout, 5);
        assert_eq!(options.user_agent.as_deref(), Some("tester"));
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));

        let err = from_lookup(lookup(&[(ENV_DISPLAY, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(ENV_DISPLAY));
    }

    #[test]
    fn missing_dotenv_file_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let loaded = load_dotenv_from(&tmp.path().join(".env")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn malformed_dotenv_file_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".env");
        std::fs::write(&path, "CRUMBFETCH_TEST_BROKEN=\"unterminated\n").unwrap();

        let err = load_dotenv_from(&path).unwrap_err();
        assert!(matches!(err.kind(), crate::error::ErrorKind::DotenvError(_)));
        assert!(err.to_string().starts_with(".env: "));
    }

    #[test]
    fn valid_dotenv_file_is_loaded() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".env");
        std::fs::write(&path, "CRUMBFETCH_TEST_LOADED_MARKER=present\n").unwrap();

        assert_eq!(load_dotenv_from(&path).unwrap(), Some(path.clone()));
        assert_eq!(
            std::env::var("CRUMBFETCH_TEST_LOADED_MARKER").as_deref(),
            Ok("present")
        );
    }
}

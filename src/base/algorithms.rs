use crate::error::Result;
use crate::base::enums::ResourceType;
use crate::base::structs::BreadcrumbLevel;

use serde_json::Value;

// Level types the backend reports that are spelled differently from catalog tags.
const EXTRA_LEVEL_TYPES: [&str; 2] = ["faculty", "sprint"];

/// Cut a URL at its first `?` or `#`.
pub fn strip_query(url: &str) -> &str {
    match url.find(['?', '#']) {
        Some(pos) => &url[..pos],
        None => url,
    }
}

pub fn pretty_json(data: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Replace path separators and reserved characters so the name stays inside the target dir.
pub fn sanitize_filename(name: &str) -> String {
    let replace_char = '_';
    let blacklist = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

    let sanitized: String = name
        .chars()
        .map(|c| if blacklist.contains(&c) || c.is_control() { replace_char } else { c })
        .collect();

    match sanitized.trim() {
        "" | "." | ".." => replace_char.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Read `{type, id, name}` entries out of a breadcrumbs response.
///
/// Anything that is not an array of objects yields an empty list; entries with an
/// unknown `type` or a missing `id` are skipped. Numeric ids are rendered as strings.
pub fn breadcrumb_levels(data: &Value) -> Vec<BreadcrumbLevel> {
    let Some(items) = data.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let level_type = item.get("type")?.as_str()?;
            if !is_known_level(level_type) {
                return None;
            }
            let id = match item.get("id")? {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            let name = item.get("name").and_then(Value::as_str).map(str::to_string);
            Some(BreadcrumbLevel {
                level_type: level_type.to_string(),
                id,
                name,
            })
        })
        .collect()
}

fn is_known_level(level_type: &str) -> bool {
    ResourceType::from_tag(level_type).is_some()
        || EXTRA_LEVEL_TYPES.iter().any(|t| t.eq_ignore_ascii_case(level_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strip_query_cuts_query_and_fragment() {
        assert_eq!(strip_query("https://x/lesson/a?b=1"), "https://x/lesson/a");
        assert_eq!(strip_query("https://x/lesson/a/#top"), "https://x/lesson/a/");
        assert_eq!(strip_query("https://x/lesson/a"), "https://x/lesson/a");
    }

    #[test]
    fn sanitize_filename_blocks_traversal() {
        assert_eq!(sanitize_filename("../etc/passwd"), ".._etc_passwd");
        assert_eq!(sanitize_filename(".."), "_");
        assert_eq!(sanitize_filename("  "), "_");
        assert_eq!(sanitize_filename("lesson.json"), "lesson.json");
    }

    #[test]
    fn breadcrumb_levels_keeps_known_types() {
        let data = json!([
            { "type": "faculty", "id": "f-1", "name": "Dev" },
            { "type": "sprint", "id": 7 },
            { "type": "lesson", "id": "xyz-1", "name": "Intro" },
            { "type": "banner", "id": "b", "name": "skip me" },
            { "type": "task" }
        ]);
        let levels = breadcrumb_levels(&data);
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].level_type, "faculty");
        assert_eq!(levels[1].id, "7");
        assert_eq!(levels[1].name, None);
        assert_eq!(levels[2].name.as_deref(), Some("Intro"));
    }

    #[test]
    fn breadcrumb_levels_of_non_array_is_empty() {
        assert!(breadcrumb_levels(&json!({ "lesson_id": "x" })).is_empty());
    }
}

use serde::{Serialize, Deserialize};

/// Recognised content categories, in the order the resolver tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Facult,
    Profession,
    Track,
    Course,
    Topic,
    Lesson,
    Task,
}

impl ResourceType {
    /// The fixed catalog. Earlier entries win when a URL matches several.
    pub const CATALOG: [ResourceType; 7] = [
        ResourceType::Facult,
        ResourceType::Profession,
        ResourceType::Track,
        ResourceType::Course,
        ResourceType::Topic,
        ResourceType::Lesson,
        ResourceType::Task,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ResourceType::Facult => "facult",
            ResourceType::Profession => "profession",
            ResourceType::Track => "track",
            ResourceType::Course => "course",
            ResourceType::Topic => "topic",
            ResourceType::Lesson => "lesson",
            ResourceType::Task => "task",
        }
    }

    pub fn plural(&self) -> String {
        format!("{}s", self.tag())
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::CATALOG
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(tag))
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Which backend view of a resource to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    #[default]
    Breadcrumbs,
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    Resolve,
    Fetch,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperationType::Resolve => "Resolve",
            OperationType::Fetch => "Fetch",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeliveryEvent {
    Download { filename: String, body: String },
    Display { body: String },
    OperationResult { operation: OperationType, code: u32, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_fixed() {
        let tags: Vec<&str> = ResourceType::CATALOG.iter().map(|t| t.tag()).collect();
        assert_eq!(tags, ["facult", "profession", "track", "course", "topic", "lesson", "task"]);
    }

    #[test]
    fn plural_appends_s() {
        assert_eq!(ResourceType::Facult.plural(), "facults");
        assert_eq!(ResourceType::Lesson.plural(), "lessons");
    }

    #[test]
    fn from_tag_ignores_case() {
        assert_eq!(ResourceType::from_tag("COURSE"), Some(ResourceType::Course));
        assert_eq!(ResourceType::from_tag("sprint"), None);
    }
}

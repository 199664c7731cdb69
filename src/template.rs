use crate::error::Result;
use crate::base::enums::Endpoint;
use crate::base::structs::ResourceReference;
use handlebars::Handlebars;

const BREADCRUMBS_TEMPLATE: &str = "{{base}}/content/{{plural}}/{{id}}/breadcrumbs/";
const DETAILS_TEMPLATE: &str = "{{base}}/content/{{plural}}/{{id}}/";

/// Renders API URLs for a resolved resource.
#[derive(Debug, Clone)]
pub struct EndpointRenderer {
    registry: Handlebars<'static>,
}

impl EndpointRenderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);

        registry.register_template_string(template_name(Endpoint::Breadcrumbs), BREADCRUMBS_TEMPLATE)?;
        registry.register_template_string(template_name(Endpoint::Details), DETAILS_TEMPLATE)?;

        Ok(Self { registry })
    }

    pub fn render(
        &self,
        endpoint: Endpoint,
        base: &str,
        reference: &ResourceReference,
    ) -> Result<String> {
        let data = serde_json::json!({
            "base": base.trim_end_matches('/'),
            "plural": reference.resource_type.plural(),
            "id": reference.id,
        });

        Ok(self.registry.render(template_name(endpoint), &data)?)
    }
}

fn template_name(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Breadcrumbs => "breadcrumbs",
        Endpoint::Details => "details",
    }
}

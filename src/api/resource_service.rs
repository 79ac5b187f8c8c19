use handlebars::Handlebars;
use serde::Serialize;
use crate::api::models::resources_xml::ResourcesElement;

/// Looks up operator and client facing messages by name.
#[derive(Clone)]
pub struct ResourceService {
    resource_element: ResourcesElement
}

impl ResourceService {
    pub fn new(resource_element: ResourcesElement) -> ResourceService {
        ResourceService {
            resource_element
        }
    }

    pub fn get_resource_string_by_name(&self, name: &str) -> Option<String> {
        self.resource_element.strings
            .iter()
            .find(|string_element| string_element.is_named(name))
            .map(|string_element| string_element.content.clone())
    }

    pub fn render_resource_template_string_by_name<T: Serialize>(&self, name: &str, data: &T) -> Option<String> {
        let mut handlebars = Handlebars::new();
        // Messages are logged or sent as JSON, never as HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        let template_string = self.get_resource_string_by_name(name)?;
        match handlebars.render_template(template_string.as_str(), data) {
            Ok(rendered) => Some(rendered),
            Err(error) => {
                log::warn!("Couldn't render resource \"{}\": {}", name, error);
                None
            }
        }
    }

    /// Renders `name`, falling back to the name itself so a missing resource never hides a message.
    pub fn message<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.render_resource_template_string_by_name(name, data)
            .unwrap_or_else(|| name.to_string())
    }
}

use hard_xml::{ XmlRead, XmlWrite };

/// One named message. Templates use handlebars placeholders.
#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone)]
#[xml(tag = "string")]
pub struct StringElement {
    #[xml(attr = "name")]
    pub name: String,
    #[xml(text)]
    pub content: String,
}

impl StringElement {
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

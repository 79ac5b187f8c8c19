use hard_xml::{ XmlRead, XmlWrite };
use crate::api::models::resources_xml::StringElement;

/// Root of a strings resource file: `<resources><string name="...">...</string></resources>`.
#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone)]
#[xml(tag = "resources")]
pub struct ResourcesElement {
    #[xml(child = "string")]
    pub strings: Vec<StringElement>,
}

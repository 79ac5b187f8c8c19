use std::fs;
use hard_xml::XmlRead;
use crate::api::models::resources_xml::ResourcesElement;
use crate::api::ResourceService;

const BUNDLED_STRINGS_XML: &str = include_str!("../../resources/strings.xml");

pub struct ResourceServiceFactory {}

impl ResourceServiceFactory {
    /// Loads `STRINGS_XML_FILE_PATH` (relative to the home directory) when set, the bundled strings otherwise.
    pub fn create_or_panic() -> ResourceService {
        match dotenv::var("STRINGS_XML_FILE_PATH") {
            Ok(strings_xml_file_path) => {
                let home_dir = dirs::home_dir().unwrap_or_else(|| panic!("Couldn't find the home directory"));
                let file_path = home_dir.join(strings_xml_file_path);
                let resource_xml_content = fs::read_to_string(&file_path)
                    .unwrap_or_else(|error| panic!("Couldn't read {}: {}", file_path.display(), error));
                Self::from_xml_or_panic(&resource_xml_content)
            },
            Err(_) => Self::create_bundled()
        }
    }

    pub fn create_bundled() -> ResourceService {
        Self::from_xml_or_panic(BUNDLED_STRINGS_XML)
    }

    fn from_xml_or_panic(resource_xml_content: &str) -> ResourceService {
        match ResourcesElement::from_str(resource_xml_content) {
            Ok(resource_element) => ResourceService::new(resource_element),
            Err(error) => panic!("Couldn't parse strings resources: {:?}", error)
        }
    }
}

mod string_element;
mod resources_element;

pub use string_element::*;
pub use resources_element::*;

mod beer_style_matcher;
mod default_image_resolver;
mod drink_normalizer;
mod drink_service;
mod drink_service_factory;
mod resource_service;
mod resource_service_factory;
mod upstream_fetcher;
pub mod models;

pub use beer_style_matcher::*;
pub use default_image_resolver::*;
pub use drink_service::*;
pub use drink_service_factory::*;
pub use resource_service::*;
pub use resource_service_factory::*;
pub use upstream_fetcher::*;

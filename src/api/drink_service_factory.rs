use std::sync::Arc;
use std::time::Duration;
use serde_json::json;
use crate::api::{ DrinkService, HttpUpstreamFetcher, ResourceService };

const DEFAULT_COFFEE_API_URL: &str = "https://api.sampleapis.com/coffee/hot";
const DEFAULT_BEER_API_URL: &str = "https://api.sampleapis.com/beers/ale";
const DEFAULT_IMAGE_API_URL: &str = "https://coffee.alexflipnote.dev/random.json";
const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 10;

pub struct DrinkServiceFactory {}

impl DrinkServiceFactory {
    pub fn create_or_panic(resource_service: ResourceService) -> DrinkService {
        let coffee_url = dotenv::var("COFFEE_API_URL").unwrap_or_else(|_| DEFAULT_COFFEE_API_URL.to_string());
        let beer_url = dotenv::var("BEER_API_URL").unwrap_or_else(|_| DEFAULT_BEER_API_URL.to_string());
        let default_image_url = dotenv::var("DEFAULT_IMAGE_API_URL").unwrap_or_else(|_| DEFAULT_IMAGE_API_URL.to_string());
        let timeout_seconds = Self::get_timeout_seconds(&resource_service, dotenv::var("UPSTREAM_TIMEOUT_SECONDS").ok());

        let fetcher = match HttpUpstreamFetcher::new(Duration::from_secs(timeout_seconds)) {
            Ok(fetcher) => fetcher,
            Err(error) => panic!("Couldn't create upstream HTTP client: {}", error)
        };
        let message_data = &json!({ "coffee_url": coffee_url, "beer_url": beer_url, "timeout": timeout_seconds });
        log::info!("{}", resource_service.message("drink_service_created_info_message_template", message_data));

        DrinkService::new(resource_service, Arc::new(fetcher), coffee_url, beer_url, default_image_url)
    }

    fn get_timeout_seconds(resource_service: &ResourceService, value: Option<String>) -> u64 {
        let value = match value {
            Some(value) => value,
            None => return DEFAULT_UPSTREAM_TIMEOUT_SECONDS
        };
        match value.trim().parse::<u64>() {
            Ok(seconds) if seconds > 0 => seconds,
            _ => {
                let message_data = &json!({ "value": value, "default": DEFAULT_UPSTREAM_TIMEOUT_SECONDS });
                log::warn!("{}", resource_service.message("invalid_timeout_warning_message_template", message_data));
                DEFAULT_UPSTREAM_TIMEOUT_SECONDS
            }
        }
    }
}

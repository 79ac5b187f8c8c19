use std::sync::Arc;
use rocket::tokio::sync::OnceCell;
use serde_json::json;
use crate::api::{ ResourceService, UpstreamFetcher };

const IMAGE_FIELD: &str = "file";

/// Resolves the image shared by every coffee drink. The upstream is asked once per process.
pub struct DefaultImageResolver {
    url: String,
    fetcher: Arc<dyn UpstreamFetcher>,
    resource_service: ResourceService,
    image: OnceCell<String>
}

impl DefaultImageResolver {
    pub fn new(url: String, fetcher: Arc<dyn UpstreamFetcher>, resource_service: ResourceService) -> DefaultImageResolver {
        DefaultImageResolver {
            url,
            fetcher,
            resource_service,
            image: OnceCell::new()
        }
    }

    pub async fn get_default_fallback_image(&self) -> &str {
        self.image.get_or_init(|| self.resolve()).await
    }

    async fn resolve(&self) -> String {
        let body = self.fetcher.fetch(&self.url).await;
        match body.get(IMAGE_FIELD).and_then(|file| file.as_str()) {
            Some(image) => {
                let message = self.resource_service.message("default_image_resolved_info_message_template", &json!({ "image": image }));
                log::info!("{}", message);
                image.to_string()
            },
            None => {
                let message = self.resource_service.message("default_image_missing_warning_message_template", &json!({ "url": self.url }));
                log::warn!("{}", message);
                String::new()
            }
        }
    }
}

use std::cmp::Ordering;
use std::sync::Arc;
use serde_json::{ json, Value };
use crate::api::{ BeerStyleMatcher, DefaultImageResolver, ResourceService, UpstreamFetcher };
use crate::api::drink_normalizer::{ self, NormalizedDrinks };
use crate::api::models::{ DrinkRecord, DrinkSelection };

pub struct DrinkService {
    resource_service: ResourceService,
    fetcher: Arc<dyn UpstreamFetcher>,
    coffee_url: String,
    beer_url: String,
    default_image_resolver: DefaultImageResolver,
    beer_style_matcher: BeerStyleMatcher
}

impl DrinkService {
    pub fn new(
        resource_service: ResourceService,
        fetcher: Arc<dyn UpstreamFetcher>,
        coffee_url: String,
        beer_url: String,
        default_image_url: String
    ) -> DrinkService {
        let default_image_resolver = DefaultImageResolver::new(default_image_url, fetcher.clone(), resource_service.clone());
        DrinkService {
            resource_service,
            fetcher,
            coffee_url,
            beer_url,
            default_image_resolver,
            beer_style_matcher: BeerStyleMatcher::new()
        }
    }

    pub async fn get_drinks(&self, selection: DrinkSelection) -> Vec<DrinkRecord> {
        match selection {
            DrinkSelection::All => self.get_all_drinks().await,
            DrinkSelection::Coffee => self.get_coffee_drinks().await,
            DrinkSelection::Beer => self.get_beer_drinks().await
        }
    }

    pub async fn get_coffee_drinks(&self) -> Vec<DrinkRecord> {
        let rows = self.fetch_rows(&self.coffee_url).await;
        if rows.iter().all(drink_normalizer::is_empty_row) {
            return vec![];
        }
        let image = self.default_image_resolver.get_default_fallback_image().await;
        let normalized = drink_normalizer::normalize_coffee(rows, image, &mut rand::thread_rng());
        self.report_dropped(normalized)
    }

    pub async fn get_beer_drinks(&self) -> Vec<DrinkRecord> {
        let rows = self.fetch_rows(&self.beer_url).await;
        let normalized = drink_normalizer::normalize_beer(rows, &self.beer_style_matcher);
        self.report_dropped(normalized)
    }

    /// Coffee then beer, fetched one after the other, highest rating first.
    pub async fn get_all_drinks(&self) -> Vec<DrinkRecord> {
        let mut drinks = self.get_coffee_drinks().await;
        drinks.extend(self.get_beer_drinks().await);
        sort_by_rating(&mut drinks);
        drinks
    }

    async fn fetch_rows(&self, url: &str) -> Vec<Value> {
        match self.fetcher.fetch(url).await {
            Value::Array(rows) => rows,
            _ => {
                let message = self.resource_service.message("upstream_not_a_list_warning_message_template", &json!({ "url": url }));
                log::warn!("{}", message);
                vec![]
            }
        }
    }

    fn report_dropped(&self, normalized: NormalizedDrinks) -> Vec<DrinkRecord> {
        for dropped in &normalized.dropped {
            let message_data = &json!({ "row": dropped.row.to_string(), "reason": dropped.reason });
            let message = self.resource_service.message("row_dropped_warning_message_template", message_data);
            log::warn!("{}", message);
        }
        normalized.drinks
    }
}

/// Stable, so equal ratings keep their input order.
pub fn sort_by_rating(drinks: &mut [DrinkRecord]) {
    drinks.sort_by(|left, right| right.rating_value().partial_cmp(&left.rating_value()).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;
    use crate::api::ResourceServiceFactory;
    use crate::api::stub::StubUpstreamFetcher;

    const COFFEE_URL: &str = "http://coffee/hot";
    const BEER_URL: &str = "http://beers/ale";
    const IMAGE_URL: &str = "http://image/random.json";

    fn beer(name: &str, average: f64) -> Value {
        json!({ "name": name, "price": "$10.00", "rating": { "average": average }, "image": format!("https://beer/{}.png", name) })
    }

    fn drink_service(fetcher: &Arc<StubUpstreamFetcher>) -> DrinkService {
        DrinkService::new(
            ResourceServiceFactory::create_bundled(),
            fetcher.clone(),
            COFFEE_URL.to_string(),
            BEER_URL.to_string(),
            IMAGE_URL.to_string()
        )
    }

    fn full_fetcher() -> StubUpstreamFetcher {
        StubUpstreamFetcher::new()
            .with_response(COFFEE_URL, json!([
                { "title": "Latte", "description": "Milky" },
                null,
                { "title": "Americano" },
                { "title": "Mocha", "description": "Chocolatey" }
            ]))
            .with_response(BEER_URL, json!([beer("Porter", 4.2), beer("Pale Ale", 1.5), beer("Double IPA", 4.9)]))
            .with_response(IMAGE_URL, json!({ "file": "https://coffee/1.png" }))
    }

    fn record(name: &str, rating: &str) -> DrinkRecord {
        DrinkRecord {
            name: name.to_string(),
            price: String::from("$9.99"),
            rating: rating.to_string(),
            description: String::new(),
            image: String::new(),
            id: uuid::Uuid::new_v4()
        }
    }

    #[test]
    fn sorts_by_numeric_rating_descending_and_keeps_ties_in_order() {
        let mut drinks = vec![
            record("coffee-a", "3.000"),
            record("coffee-b", "10.000"),
            record("coffee-c", "4.500"),
            record("beer-a", "3.000"),
            record("beer-b", "4.500")
        ];
        sort_by_rating(&mut drinks);
        let names: Vec<&str> = drinks.iter().map(|drink| drink.name.as_str()).collect();
        assert_eq!(names, vec!["coffee-b", "coffee-c", "beer-b", "coffee-a", "beer-a"]);
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let mut drinks = vec![record("first", "-0.000"), record("second", "0.000"), record("third", "0.500")];
        sort_by_rating(&mut drinks);
        let names: Vec<&str> = drinks.iter().map(|drink| drink.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[rocket::async_test]
    async fn coffee_drinks_share_the_default_image() {
        let fetcher = Arc::new(full_fetcher());
        let drinks = drink_service(&fetcher).get_coffee_drinks().await;

        let names: Vec<&str> = drinks.iter().map(|drink| drink.name.as_str()).collect();
        assert_eq!(names, vec!["Latte", "Mocha"]);
        assert!(drinks.iter().all(|drink| drink.image == "https://coffee/1.png"));
    }

    #[rocket::async_test]
    async fn default_image_is_fetched_once_across_requests() {
        let fetcher = Arc::new(full_fetcher());
        let drink_service = drink_service(&fetcher);
        drink_service.get_coffee_drinks().await;
        drink_service.get_all_drinks().await;
        assert_eq!(fetcher.calls_to(COFFEE_URL), 2);
        assert_eq!(fetcher.calls_to(IMAGE_URL), 1);
    }

    #[rocket::async_test]
    async fn beer_drinks_keep_upstream_order() {
        let fetcher = Arc::new(full_fetcher());
        let drinks = drink_service(&fetcher).get_beer_drinks().await;
        let names: Vec<&str> = drinks.iter().map(|drink| drink.name.as_str()).collect();
        assert_eq!(names, vec!["Porter", "Pale Ale", "Double IPA"]);
        assert_eq!(fetcher.calls_to(IMAGE_URL), 0);
    }

    #[rocket::async_test]
    async fn all_drinks_are_merged_and_sorted() {
        let fetcher = Arc::new(full_fetcher());
        let drinks = drink_service(&fetcher).get_all_drinks().await;

        assert_eq!(drinks.len(), 5);
        assert!(drinks.windows(2).all(|pair| pair[0].rating_value() >= pair[1].rating_value()));
        let beers: Vec<&str> = drinks.iter()
            .filter(|drink| drink.image.starts_with("https://beer/"))
            .map(|drink| drink.name.as_str())
            .collect();
        assert_eq!(beers, vec!["Double IPA", "Porter", "Pale Ale"]);
    }

    #[rocket::async_test]
    async fn failed_coffee_upstream_degrades_to_beer_only() {
        let fetcher = Arc::new(
            StubUpstreamFetcher::new()
                .with_response(BEER_URL, json!([beer("Stout", 3.3), beer("Brown Ale", 4.4)]))
                .with_response(IMAGE_URL, json!({ "file": "https://coffee/1.png" }))
        );
        let drink_service = drink_service(&fetcher);

        assert!(drink_service.get_coffee_drinks().await.is_empty());
        let names: Vec<String> = drink_service.get_all_drinks().await.into_iter().map(|drink| drink.name).collect();
        assert_eq!(names, vec!["Brown Ale", "Stout"]);
        assert_eq!(fetcher.calls_to(IMAGE_URL), 0);
    }

    #[rocket::async_test]
    async fn failed_image_upstream_leaves_coffee_images_empty() {
        let fetcher = Arc::new(
            StubUpstreamFetcher::new().with_response(COFFEE_URL, json!([{ "title": "Latte", "description": "Milky" }]))
        );
        let drinks = drink_service(&fetcher).get_coffee_drinks().await;
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].image, "");
    }

    #[rocket::async_test]
    async fn non_list_upstream_body_is_treated_as_empty() {
        let fetcher = Arc::new(
            StubUpstreamFetcher::new().with_response(BEER_URL, json!({ "error": "rate limited" }))
        );
        assert!(drink_service(&fetcher).get_beer_drinks().await.is_empty());
    }

    #[rocket::async_test]
    async fn selection_dispatches_to_the_matching_catalog() {
        let fetcher = Arc::new(full_fetcher());
        let drink_service = drink_service(&fetcher);
        assert_eq!(drink_service.get_drinks(DrinkSelection::Coffee).await.len(), 2);
        assert_eq!(drink_service.get_drinks(DrinkSelection::Beer).await.len(), 3);
        assert_eq!(drink_service.get_drinks(DrinkSelection::All).await.len(), 5);
    }
}

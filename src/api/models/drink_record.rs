use uuid::Uuid;
use rocket::serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct DrinkRecord {
    pub name: String,
    pub price: String,
    pub rating: String,
    pub description: String,
    pub image: String,
    pub id: Uuid
}

impl DrinkRecord {
    /// Numeric value of the formatted rating, used for ordering.
    pub fn rating_value(&self) -> f64 {
        self.rating.parse::<f64>().unwrap_or(f64::NEG_INFINITY)
    }
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.3}", rating)
}

use serde::Deserialize;

/// A row of the coffee catalog. Extra fields are ignored.
#[derive(Deserialize, Debug)]
pub struct CoffeeRow {
    pub title: String,
    pub description: String
}

#[derive(Deserialize, Debug)]
pub struct BeerRow {
    pub name: String,
    pub price: String,
    pub rating: BeerRating,
    pub image: String
}

#[derive(Deserialize, Debug)]
pub struct BeerRating {
    pub average: f64
}

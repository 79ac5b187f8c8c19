use rand::Rng;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;
use crate::api::BeerStyleMatcher;
use crate::api::models::{ format_rating, BeerRow, CoffeeRow, DrinkRecord, DroppedRow };

/// Records built from one upstream batch, in input order, plus the rows that were left out.
#[derive(Debug, Default)]
pub struct NormalizedDrinks {
    pub drinks: Vec<DrinkRecord>,
    pub dropped: Vec<DroppedRow>
}

pub fn normalize_coffee<R: Rng>(rows: Vec<Value>, image: &str, rng: &mut R) -> NormalizedDrinks {
    normalize::<CoffeeRow, _>(rows, |coffee| DrinkRecord {
        name: coffee.title,
        price: format!("${}.99", rng.gen_range(8..=19)),
        rating: format_rating(rng.gen_range(1.0..5.0)),
        description: coffee.description,
        image: image.to_string(),
        id: Uuid::new_v4()
    })
}

pub fn normalize_beer(rows: Vec<Value>, style_matcher: &BeerStyleMatcher) -> NormalizedDrinks {
    normalize::<BeerRow, _>(rows, |beer| DrinkRecord {
        description: style_matcher.match_style(&beer.name).to_string(),
        name: beer.name,
        price: beer.price,
        rating: format_rating(beer.rating.average),
        image: beer.image,
        id: Uuid::new_v4()
    })
}

/// Whether a row carries nothing at all and is skipped without being reported.
pub fn is_empty_row(row: &Value) -> bool {
    match row {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty()
    }
}

fn normalize<T, F>(rows: Vec<Value>, mut to_record: F) -> NormalizedDrinks
where
    T: DeserializeOwned,
    F: FnMut(T) -> DrinkRecord
{
    let mut normalized = NormalizedDrinks::default();
    for row in rows {
        if is_empty_row(&row) {
            continue;
        }
        match T::deserialize(&row) {
            Ok(source) => normalized.drinks.push(to_record(source)),
            Err(error) => normalized.dropped.push(DroppedRow { row, reason: error.to_string() })
        }
    }
    normalized
}

/// Which catalog(s) a `/drinks` request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkSelection {
    All,
    Coffee,
    Beer
}

impl DrinkSelection {
    /// Maps the raw `type` query value. Absent and empty both mean every drink.
    pub fn from_query(drink_type: Option<&str>) -> Result<DrinkSelection, String> {
        match drink_type {
            None | Some("") => Ok(DrinkSelection::All),
            Some("coffee") => Ok(DrinkSelection::Coffee),
            Some("beer") => Ok(DrinkSelection::Beer),
            Some(other) => Err(other.to_string())
        }
    }
}

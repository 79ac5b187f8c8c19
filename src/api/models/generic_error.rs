use rocket::serde::Serialize;

/// JSON body of every response Rocket's catchers produce.
#[derive(Serialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct GenericError {
    pub message: String
}

impl From<String> for GenericError {
    fn from(message: String) -> Self {
        GenericError { message }
    }
}

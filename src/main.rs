mod api;

#[macro_use] extern crate rocket;
extern crate env_logger;
use rocket::{ Build, Request, Rocket, State };
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use serde_json::json;
use crate::api::models::{ DrinkRecord, DrinkSelection, GenericError };
use crate::api::{ DrinkService, DrinkServiceFactory, ResourceService, ResourceServiceFactory };

#[derive(FromForm)]
struct DrinksQuery {
    // Every occurrence is kept; the first one decides
    #[field(name = "type")]
    drink_type: Vec<String>
}

#[get("/drinks?<query..>")]
async fn drinks_get(
    drink_service: &State<DrinkService>,
    resource_service: &State<ResourceService>,
    query: DrinksQuery
) -> Result<Json<Vec<DrinkRecord>>, status::Custom<Json<String>>> {
    match DrinkSelection::from_query(query.drink_type.first().map(String::as_str)) {
        Ok(selection) => {
            let drinks = drink_service.get_drinks(selection).await;
            let message_data = &json!({ "count": drinks.len(), "selection": format!("{:?}", selection).to_lowercase() });
            log::debug!("{}", resource_service.message("drinks_served_debug_message_template", message_data));
            Ok(Json(drinks))
        },
        Err(drink_type) => {
            log::warn!("{}", resource_service.message("invalid_drink_type_warning_message_template", &json!({ "drink_type": drink_type })));
            let message = resource_service.message("invalid_drink_type_error_message", &json!({}));
            Err(status::Custom(Status::InternalServerError, Json(message)))
        }
    }
}

#[catch(404)]
fn not_found(request: &Request) -> Json<GenericError> {
    let message = match request.rocket().state::<ResourceService>() {
        Some(resource_service) => resource_service.message("not_found_error_message_template", &json!({ "path": request.uri().path().as_str() })),
        None => String::from("Not found")
    };
    Json(GenericError::from(message))
}

#[catch(default)]
fn default_catcher(status: Status, request: &Request) -> status::Custom<Json<GenericError>> {
    let message = match request.rocket().state::<ResourceService>() {
        Some(resource_service) => resource_service.message("generic_error_message_template", &json!({ "status": status.code })),
        None => status.to_string()
    };
    status::Custom(status, Json(GenericError::from(message)))
}

fn build_rocket(resource_service: ResourceService, drink_service: DrinkService) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![drinks_get])
        .register("/", catchers![not_found, default_catcher])
        .manage(resource_service)
        .manage(drink_service)
}

#[launch]
fn rocket() -> _ {
    env_logger::init();
    let resource_service = ResourceServiceFactory::create_or_panic();
    let drink_service = DrinkServiceFactory::create_or_panic(resource_service.clone());
    build_rocket(resource_service, drink_service)
}

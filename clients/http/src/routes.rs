use actix_web::{delete, get, post, put, web, HttpResponse};
use database::{consts::consts::PersonId, database::database::Database};
use person_service::{
    request::{PageQuery, PersonRequest, SearchQuery},
    service::PersonService,
};

use crate::api_error::{json_config, path_config, query_config, ApiError};

pub type AppService = PersonService<Database>;

/// Store the person, answers 201 with the stored record
#[post("/persons")]
async fn save(
    service: web::Data<AppService>,
    body: web::Json<PersonRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().validate()?;

    let person = web::block(move || service.save(input)).await??;

    Ok(HttpResponse::Created().json(person))
}

#[get("/persons")]
async fn find_all(
    service: web::Data<AppService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    query.validate()?;

    let people = web::block(move || {
        service.find_all(query.page_no, query.page_size, &query.sort_by)
    })
    .await??;

    Ok(HttpResponse::Ok().json(people))
}

/// Matches on first OR last name, by prefix or substring, ignoring case
#[get("/persons/search")]
async fn find_all_by_name(
    service: web::Data<AppService>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let SearchQuery {
        first_name,
        last_name,
    } = query.into_inner();

    let people = web::block(move || {
        service.find_all_by_name(first_name.as_deref(), last_name.as_deref())
    })
    .await??;

    Ok(HttpResponse::Ok().json(people))
}

#[get("/persons/{id}")]
async fn find_by_id(
    service: web::Data<AppService>,
    id: web::Path<PersonId>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();

    let person = web::block(move || service.find_by_id(id)).await??;

    Ok(HttpResponse::Ok().json(person))
}

#[delete("/persons/{id}")]
async fn delete_person(
    service: web::Data<AppService>,
    id: web::Path<PersonId>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();

    web::block(move || service.delete(id)).await??;

    Ok(HttpResponse::Ok().finish())
}

#[put("/persons/{id}")]
async fn update(
    service: web::Data<AppService>,
    id: web::Path<PersonId>,
    body: web::Json<PersonRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let input = body.into_inner().validate()?;

    web::block(move || service.update(id, input)).await??;

    Ok(HttpResponse::Ok().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(save)
        .service(find_all)
        // Before `/persons/{id}`, otherwise "search" is taken for an id
        .service(find_all_by_name)
        .service(find_by_id)
        .service(delete_person)
        .service(update);
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use database::model::person::Person;
    use serde_json::{json, Value};

    use super::*;

    fn service_data() -> web::Data<AppService> {
        web::Data::new(PersonService::new(Database::new_in_memory()))
    }

    fn saurav_json() -> Value {
        json!({
            "first_name": "Saurav",
            "last_name": "Singh",
            "age": 30,
            "favourite_colour": "Black",
        })
    }

    fn create_request(body: Value) -> actix_web::test::TestRequest {
        test::TestRequest::post().uri("/persons").set_json(body)
    }

    #[actix_web::test]
    async fn save_then_find_by_id() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;

        let resp = test::call_service(&app, create_request(saurav_json()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Person = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri(&format!("/persons/{}", created.id))
            .to_request();
        let found: Person = test::call_and_read_body_json(&app, req).await;

        assert_eq!(found, created);
        assert_eq!(found.first_name, "Saurav");
    }

    #[actix_web::test]
    async fn save_with_missing_fields_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/persons")
            .set_json(json!({ "first_name": "Saurav", "last_name": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "One or more field is invalid");
        assert_eq!(
            body["errors"],
            json!([
                "Person last name can't be empty.",
                "Person age can't be empty.",
                "Person favourite colour can't be empty."
            ])
        );
    }

    #[actix_web::test]
    async fn malformed_json_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/persons")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_id_is_not_found_with_source() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/persons/42").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["source"], "findById");
        assert_eq!(body["message"], "No person found with id 42");
    }

    #[actix_web::test]
    async fn non_numeric_id_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/persons/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn id_beyond_u64_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;

        let req = test::TestRequest::delete()
            .uri("/persons/18446744073709551616")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn find_all_pages_and_sorts() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;

        for name in ["Charlie", "Alice", "Bob"] {
            let mut body = saurav_json();
            body["first_name"] = json!(name);
            let _: Person =
                test::call_and_read_body_json(&app, create_request(body).to_request()).await;
        }

        let req = test::TestRequest::get()
            .uri("/persons?pageNo=0&pageSize=2&sortBy=firstName")
            .to_request();
        let people: Vec<Person> = test::call_and_read_body_json(&app, req).await;

        let names: Vec<&str> = people.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        let req = test::TestRequest::get().uri("/persons").to_request();
        let people: Vec<Person> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(people.len(), 3);
    }

    #[actix_web::test]
    async fn find_all_with_unknown_sort_field_is_internal() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/persons?sortBy=email")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["source"], "findAll");
    }

    #[actix_web::test]
    async fn search_by_first_and_last_name() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;
        let created: Person =
            test::call_and_read_body_json(&app, create_request(saurav_json()).to_request())
                .await;

        let req = test::TestRequest::get()
            .uri("/persons/search?firstName=Sau")
            .to_request();
        let people: Vec<Person> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(people, vec![created.clone()]);

        let req = test::TestRequest::get()
            .uri("/persons/search?firstName=Singh")
            .to_request();
        let people: Vec<Person> = test::call_and_read_body_json(&app, req).await;
        assert!(people.is_empty());

        let req = test::TestRequest::get()
            .uri("/persons/search?lastName=singh")
            .to_request();
        let people: Vec<Person> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(people, vec![created]);
    }

    #[actix_web::test]
    async fn update_then_delete() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;
        let created: Person =
            test::call_and_read_body_json(&app, create_request(saurav_json()).to_request())
                .await;

        // Update
        let req = test::TestRequest::put()
            .uri(&format!("/persons/{}", created.id))
            .set_json(json!({
                "first_name": "John",
                "last_name": "Keynes",
                "age": 62,
                "favourite_colour": "Blue",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/persons/{}", created.id))
            .to_request();
        let found: Person = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.id, created.id);
        assert_eq!(found.last_name, "Keynes");

        // Delete
        let req = test::TestRequest::delete()
            .uri(&format!("/persons/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/persons/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["source"], "delete");
    }

    #[actix_web::test]
    async fn update_unknown_id_is_not_found() {
        let app =
            test::init_service(App::new().app_data(service_data()).configure(configure)).await;

        let req = test::TestRequest::put()
            .uri("/persons/8")
            .set_json(saurav_json())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["source"], "update");
    }
}

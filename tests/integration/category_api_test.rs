// Full HTTP tests for the category endpoints, running against an in-memory
// SQLite database.

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::json;

use menucraft::app;

macro_rules! spawn_app {
    () => {{
        let pool = helpers::test_pool().await;
        test::init_service(App::new().configure(app::configure(pool))).await
    }};
}

#[actix_web::test]
async fn liveness_and_unknown_route() {
    let app = spawn_app!();

    let (status, body) = request_json!(app, get, "/");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Menu Management API is running!");

    let (status, body) = request_json!(app, get, "/api/nope/nothing");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route not found");
}

#[actix_web::test]
async fn create_category_with_tax() {
    let app = spawn_app!();

    let (status, body) = request_json!(
        app,
        post,
        "/api/categories",
        &json!({
            "name": "Beverages",
            "image": "https://cdn.example.com/bev.png",
            "description": "Hot and cold drinks",
            "taxApplicability": true,
            "tax": 5
        })
    );

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Category created successfully");
    assert_eq!(body["data"]["name"], "Beverages");
    assert_eq!(body["data"]["tax"], 5.0);
    assert_eq!(body["data"]["taxType"], "percentage");
    assert_eq!(body["data"]["id"].as_str().unwrap().len(), 24);
}

#[actix_web::test]
async fn create_category_without_applicability_forces_zero_tax() {
    let app = spawn_app!();

    let (status, body) = request_json!(
        app,
        post,
        "/api/categories",
        &json!({
            "name": "Starters",
            "image": "https://cdn.example.com/starters.png",
            "description": "Small plates",
            "taxApplicability": false,
            "tax": 50
        })
    );

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["tax"], 0.0);
    assert_eq!(body["data"]["taxApplicability"], false);
}

#[actix_web::test]
async fn create_category_applicable_without_tax_is_rejected() {
    let app = spawn_app!();

    let (status, body) = request_json!(
        app,
        post,
        "/api/categories",
        &json!({
            "name": "Mains",
            "image": "https://cdn.example.com/mains.png",
            "description": "Large plates",
            "taxApplicability": true
        })
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("tax"));
}

#[actix_web::test]
async fn create_category_missing_description_is_rejected() {
    let app = spawn_app!();

    let (status, body) = request_json!(
        app,
        post,
        "/api/categories",
        &json!({
            "name": "Mains",
            "image": "https://cdn.example.com/mains.png"
        })
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("description is required"));
}

#[actix_web::test]
async fn duplicate_category_name_conflicts() {
    let app = spawn_app!();

    let body = json!({
        "name": "Beverages",
        "image": "https://cdn.example.com/bev.png",
        "description": "Drinks",
        "taxApplicability": false
    });

    let (status, _) = request_json!(app, post, "/api/categories", &body);
    assert_eq!(status, StatusCode::CREATED);

    let (status, response) = request_json!(app, post, "/api/categories", &body);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Category with this name already exists");
}

#[actix_web::test]
async fn list_categories_newest_first_with_count() {
    let app = spawn_app!();

    for name in ["Starters", "Mains", "Desserts"] {
        let (status, _) = request_json!(
            app,
            post,
            "/api/categories",
            &json!({
                "name": name,
                "image": "https://cdn.example.com/c.png",
                "description": "Plates",
                "taxApplicability": false
            })
        );
        assert_eq!(status, StatusCode::CREATED);
        helpers::tick().await;
    }

    let (status, body) = request_json!(app, get, "/api/categories");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Desserts", "Mains", "Starters"]);
}

#[actix_web::test]
async fn get_category_by_id_and_by_name_fragment() {
    let app = spawn_app!();

    let (_, created) = request_json!(
        app,
        post,
        "/api/categories",
        &json!({
            "name": "Beverages",
            "image": "https://cdn.example.com/bev.png",
            "description": "Drinks",
            "taxApplicability": true,
            "tax": 5
        })
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request_json!(app, get, &format!("/api/categories/{id}"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Beverages");

    // Case-insensitive substring match
    let (status, body) = request_json!(app, get, "/api/categories/bever");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());

    let (status, body) = request_json!(app, get, "/api/categories/nonexistent");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");

    // Well-formed but unknown key
    let unknown = "0123456789abcdef01234567";
    let (status, _) = request_json!(app, get, &format!("/api/categories/{unknown}"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_category_disabling_tax_forces_zero() {
    let app = spawn_app!();

    let (_, created) = request_json!(
        app,
        post,
        "/api/categories",
        &json!({
            "name": "Beverages",
            "image": "https://cdn.example.com/bev.png",
            "description": "Drinks",
            "taxApplicability": true,
            "tax": 5
        })
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request_json!(
        app,
        put,
        &format!("/api/categories/{id}"),
        &json!({ "taxApplicability": false, "tax": 12 })
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category updated successfully");
    assert_eq!(body["data"]["taxApplicability"], false);
    assert_eq!(body["data"]["tax"], 0.0);
}

#[actix_web::test]
async fn update_category_retains_unspecified_fields() {
    let app = spawn_app!();

    let (_, created) = request_json!(
        app,
        post,
        "/api/categories",
        &json!({
            "name": "Beverages",
            "image": "https://cdn.example.com/bev.png",
            "description": "Drinks",
            "taxApplicability": true,
            "tax": 5
        })
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request_json!(
        app,
        put,
        &format!("/api/categories/{id}"),
        &json!({ "description": "Hot and cold drinks" })
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Beverages");
    assert_eq!(body["data"]["description"], "Hot and cold drinks");
    assert_eq!(body["data"]["tax"], 5.0);
}

#[actix_web::test]
async fn update_unknown_category_is_not_found() {
    let app = spawn_app!();

    let (status, body) = request_json!(
        app,
        put,
        "/api/categories/0123456789abcdef01234567",
        &json!({ "description": "anything" })
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");
}

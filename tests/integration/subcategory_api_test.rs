// Full HTTP tests for the sub-category endpoints: tax inheritance from the
// parent category, scoped name uniqueness, and enriched responses.

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use menucraft::app;

macro_rules! spawn_app {
    () => {{
        let pool = helpers::test_pool().await;
        test::init_service(App::new().configure(app::configure(pool))).await
    }};
}

macro_rules! seed_category {
    ($app:expr, $name:expr, $tax_applicability:expr, $tax:expr) => {{
        let (status, body) = request_json!(
            $app,
            post,
            "/api/categories",
            &json!({
                "name": $name,
                "image": "https://cdn.example.com/cat.png",
                "description": "Seeded category",
                "taxApplicability": $tax_applicability,
                "tax": $tax
            })
        );
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_str().unwrap().to_string()
    }};
}

fn sub_category_body(name: &str, category_id: &str) -> Value {
    json!({
        "name": name,
        "image": "https://cdn.example.com/sub.png",
        "description": "Seeded sub-category",
        "category": category_id
    })
}

#[actix_web::test]
async fn create_inherits_parent_tax_snapshot() {
    let app = spawn_app!();
    let category_id = seed_category!(app, "Beverages", true, 5);

    let (status, body) = request_json!(
        app,
        post,
        "/api/subcategories",
        &sub_category_body("Hot Drinks", &category_id)
    );

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Sub-category created successfully");
    assert_eq!(body["data"]["taxApplicability"], true);
    assert_eq!(body["data"]["tax"], 5.0);
    // Enriched with the parent summary
    assert_eq!(body["data"]["category"]["name"], "Beverages");
    assert_eq!(body["data"]["category"]["description"], "Seeded category");
}

#[actix_web::test]
async fn inheritance_is_a_one_time_snapshot() {
    let app = spawn_app!();
    let category_id = seed_category!(app, "Beverages", true, 5);

    let (_, created) = request_json!(
        app,
        post,
        "/api/subcategories",
        &sub_category_body("Hot Drinks", &category_id)
    );
    let sub_id = created["data"]["id"].as_str().unwrap().to_string();

    // Raise the parent's tax afterwards; the sub-category must keep 5
    let (status, _) = request_json!(
        app,
        put,
        &format!("/api/categories/{category_id}"),
        &json!({ "tax": 9 })
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request_json!(app, get, &format!("/api/subcategories/{sub_id}"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tax"], 5.0);
    // The detail projection exposes the parent's current tax fields
    assert_eq!(body["data"]["category"]["tax"], 9.0);
}

#[actix_web::test]
async fn explicit_tax_fields_override_inheritance() {
    let app = spawn_app!();
    let category_id = seed_category!(app, "Beverages", true, 5);

    let mut body = sub_category_body("Water", &category_id);
    body["taxApplicability"] = json!(false);
    body["tax"] = json!(0);

    let (status, response) = request_json!(app, post, "/api/subcategories", &body);
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["data"]["taxApplicability"], false);
    assert_eq!(response["data"]["tax"], 0.0);
}

#[actix_web::test]
async fn create_with_unknown_parent_is_not_found() {
    let app = spawn_app!();

    let (status, body) = request_json!(
        app,
        post,
        "/api/subcategories",
        &sub_category_body("Hot Drinks", "0123456789abcdef01234567")
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Parent category not found");
}

#[actix_web::test]
async fn duplicate_name_conflicts_only_within_same_category() {
    let app = spawn_app!();
    let beverages = seed_category!(app, "Beverages", false, 0);
    let desserts = seed_category!(app, "Desserts", false, 0);

    let (status, _) = request_json!(
        app,
        post,
        "/api/subcategories",
        &sub_category_body("Specials", &beverages)
    );
    assert_eq!(status, StatusCode::CREATED);

    // Same name, same category: conflict
    let (status, body) = request_json!(
        app,
        post,
        "/api/subcategories",
        &sub_category_body("Specials", &beverages)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Sub-category with this name already exists in this category"
    );

    // Same name, different category: allowed
    let (status, _) = request_json!(
        app,
        post,
        "/api/subcategories",
        &sub_category_body("Specials", &desserts)
    );
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_web::test]
async fn list_by_category_is_enriched_and_scoped() {
    let app = spawn_app!();
    let beverages = seed_category!(app, "Beverages", false, 0);
    let desserts = seed_category!(app, "Desserts", false, 0);

    for name in ["Hot Drinks", "Cold Drinks"] {
        let (status, _) = request_json!(
            app,
            post,
            "/api/subcategories",
            &sub_category_body(name, &beverages)
        );
        assert_eq!(status, StatusCode::CREATED);
        helpers::tick().await;
    }
    let (status, _) = request_json!(
        app,
        post,
        "/api/subcategories",
        &sub_category_body("Cakes", &desserts)
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request_json!(
        app,
        get,
        &format!("/api/subcategories/category/{beverages}")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cold Drinks", "Hot Drinks"]);

    // List projection carries the parent summary without tax fields
    let first = &body["data"][0];
    assert_eq!(first["category"]["name"], "Beverages");
    assert!(first["category"].get("tax").is_none());

    let (status, body) = request_json!(app, get, "/api/subcategories");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);

    let (status, body) = request_json!(
        app,
        get,
        "/api/subcategories/category/0123456789abcdef01234567"
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");
}

#[actix_web::test]
async fn get_by_name_fragment() {
    let app = spawn_app!();
    let category_id = seed_category!(app, "Beverages", false, 0);

    let (_, created) = request_json!(
        app,
        post,
        "/api/subcategories",
        &sub_category_body("Hot Drinks", &category_id)
    );
    let sub_id = created["data"]["id"].as_str().unwrap();

    let (status, body) = request_json!(app, get, "/api/subcategories/hot");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], sub_id);

    let (status, body) = request_json!(app, get, "/api/subcategories/unknown");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Sub-category not found");
}

#[actix_web::test]
async fn update_merges_partial_fields() {
    let app = spawn_app!();
    let category_id = seed_category!(app, "Beverages", true, 5);

    let (_, created) = request_json!(
        app,
        post,
        "/api/subcategories",
        &sub_category_body("Hot Drinks", &category_id)
    );
    let sub_id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request_json!(
        app,
        put,
        &format!("/api/subcategories/{sub_id}"),
        &json!({ "description": "Teas and coffees" })
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Sub-category updated successfully");
    assert_eq!(body["data"]["name"], "Hot Drinks");
    assert_eq!(body["data"]["description"], "Teas and coffees");
    assert_eq!(body["data"]["tax"], 5.0);

    let (status, body) = request_json!(
        app,
        put,
        "/api/subcategories/0123456789abcdef01234567",
        &json!({ "description": "anything" })
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Sub-category not found");
}

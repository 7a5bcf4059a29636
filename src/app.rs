//! Application wiring: services, routes, and the fallback handler.
//!
//! Shared between the binary and the integration tests so both run the exact
//! same route tree against whatever pool they provide.

use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::core::ApiResponse;
use crate::modules::categories::controllers::category_controller;
use crate::modules::categories::{CategoryRepository, CategoryService};
use crate::modules::items::controllers::item_controller;
use crate::modules::items::{ItemRepository, ItemService};
use crate::modules::subcategories::controllers::sub_category_controller;
use crate::modules::subcategories::{SubCategoryRepository, SubCategoryService};

/// Liveness banner
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Menu Management API is running!"
    }))
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure("Route not found"))
}

/// Build the full application configuration on top of `pool`
pub fn configure(pool: SqlitePool) -> impl FnOnce(&mut web::ServiceConfig) {
    let category_repo = CategoryRepository::new(pool.clone());
    let sub_category_repo = SubCategoryRepository::new(pool.clone());
    let item_repo = ItemRepository::new(pool);

    let category_service = CategoryService::new(category_repo.clone());
    let sub_category_service =
        SubCategoryService::new(sub_category_repo.clone(), category_repo.clone());
    let item_service = ItemService::new(item_repo, category_repo, sub_category_repo);

    move |cfg| {
        cfg.app_data(web::Data::new(category_service))
            .app_data(web::Data::new(sub_category_service))
            .app_data(web::Data::new(item_service))
            .route("/", web::get().to(liveness))
            .service(
                web::scope("/api")
                    .configure(category_controller::configure)
                    .configure(sub_category_controller::configure)
                    .configure(item_controller::configure),
            )
            .default_service(web::route().to(route_not_found));
    }
}

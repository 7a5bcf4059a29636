use actix_web::{web, HttpResponse};

use crate::core::{ApiResponse, AppError};
use crate::modules::items::models::{CreateItemRequest, UpdateItemRequest};
use crate::modules::items::services::ItemService;

/// Create a new item under a category or sub-category
/// POST /api/items
pub async fn create_item(
    service: web::Data<ItemService>,
    request: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let item = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::with_message("Item created successfully", item)))
}

/// Get all items, newest first
/// GET /api/items
pub async fn list_items(service: web::Data<ItemService>) -> Result<HttpResponse, AppError> {
    let items = service.list_all().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(items)))
}

/// Get all items under a specific category
/// GET /api/items/category/{categoryId}
pub async fn list_items_by_category(
    service: web::Data<ItemService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let items = service.list_by_category(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(items)))
}

/// Get all items under a specific sub-category
/// GET /api/items/subcategory/{subCategoryId}
pub async fn list_items_by_sub_category(
    service: web::Data<ItemService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let items = service.list_by_sub_category(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(items)))
}

/// Search items by name fragment; the envelope echoes the query
/// GET /api/items/search/{query}
pub async fn search_items(
    service: web::Data<ItemService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let query = path.into_inner();
    let items = service.search_by_name(&query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(items).with_query(query)))
}

/// Get item by surrogate key or name fragment
/// GET /api/items/{identifier}
pub async fn get_item(
    service: web::Data<ItemService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let item = service.get_by_identifier(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::data(item)))
}

/// Partially update an item
/// PUT /api/items/{id}
pub async fn update_item(
    service: web::Data<ItemService>,
    path: web::Path<String>,
    request: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let item = service
        .update(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message("Item updated successfully", item)))
}

/// Configure item routes.
/// Static sub-paths come before the identifier wildcard so they are not
/// shadowed.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/items")
            .route("", web::post().to(create_item))
            .route("", web::get().to(list_items))
            .route("/category/{categoryId}", web::get().to(list_items_by_category))
            .route(
                "/subcategory/{subCategoryId}",
                web::get().to(list_items_by_sub_category),
            )
            .route("/search/{query}", web::get().to(search_items))
            .route("/{identifier}", web::get().to(get_item))
            .route("/{id}", web::put().to(update_item)),
    );
}

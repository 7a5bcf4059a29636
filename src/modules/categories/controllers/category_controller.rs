use actix_web::{web, HttpResponse};

use crate::core::{ApiResponse, AppError};
use crate::modules::categories::models::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::modules::categories::services::CategoryService;

/// Create a new category
/// POST /api/categories
pub async fn create_category(
    service: web::Data<CategoryService>,
    request: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let category = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created()
        .json(ApiResponse::with_message("Category created successfully", category)))
}

/// Get all categories, newest first
/// GET /api/categories
pub async fn list_categories(
    service: web::Data<CategoryService>,
) -> Result<HttpResponse, AppError> {
    let categories = service.list_all().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(categories)))
}

/// Get category by surrogate key or name fragment
/// GET /api/categories/{identifier}
pub async fn get_category(
    service: web::Data<CategoryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let category = service.get_by_identifier(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::data(category)))
}

/// Partially update a category
/// PUT /api/categories/{id}
pub async fn update_category(
    service: web::Data<CategoryService>,
    path: web::Path<String>,
    request: web::Json<UpdateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let category = service
        .update(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::with_message("Category updated successfully", category)))
}

/// Configure category routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::post().to(create_category))
            .route("", web::get().to(list_categories))
            .route("/{identifier}", web::get().to(get_category))
            .route("/{id}", web::put().to(update_category)),
    );
}

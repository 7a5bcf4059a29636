use actix_web::{web, HttpResponse};

use crate::core::{ApiResponse, AppError};
use crate::modules::subcategories::models::{
    CreateSubCategoryRequest, UpdateSubCategoryRequest,
};
use crate::modules::subcategories::services::SubCategoryService;

/// Create a new sub-category under a category
/// POST /api/subcategories
pub async fn create_sub_category(
    service: web::Data<SubCategoryService>,
    request: web::Json<CreateSubCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let sub_category = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        "Sub-category created successfully",
        sub_category,
    )))
}

/// Get all sub-categories, newest first
/// GET /api/subcategories
pub async fn list_sub_categories(
    service: web::Data<SubCategoryService>,
) -> Result<HttpResponse, AppError> {
    let sub_categories = service.list_all().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(sub_categories)))
}

/// Get all sub-categories under a specific category
/// GET /api/subcategories/category/{categoryId}
pub async fn list_sub_categories_by_category(
    service: web::Data<SubCategoryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sub_categories = service.list_by_category(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(sub_categories)))
}

/// Get sub-category by surrogate key or name fragment
/// GET /api/subcategories/{identifier}
pub async fn get_sub_category(
    service: web::Data<SubCategoryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sub_category = service.get_by_identifier(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::data(sub_category)))
}

/// Partially update a sub-category
/// PUT /api/subcategories/{id}
pub async fn update_sub_category(
    service: web::Data<SubCategoryService>,
    path: web::Path<String>,
    request: web::Json<UpdateSubCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let sub_category = service
        .update(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        "Sub-category updated successfully",
        sub_category,
    )))
}

/// Configure sub-category routes.
/// The static `category/…` path is registered before the identifier wildcard
/// so it is not shadowed.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/subcategories")
            .route("", web::post().to(create_sub_category))
            .route("", web::get().to(list_sub_categories))
            .route(
                "/category/{categoryId}",
                web::get().to(list_sub_categories_by_category),
            )
            .route("/{identifier}", web::get().to(get_sub_category))
            .route("/{id}", web::put().to(update_sub_category)),
    );
}

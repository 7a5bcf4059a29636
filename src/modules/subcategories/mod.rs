// Sub-categories module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{SubCategory, SubCategoryRef, SubCategoryResponse};
pub use repositories::SubCategoryRepository;
pub use services::SubCategoryService;

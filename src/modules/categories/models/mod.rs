mod category;

pub use category::{
    Category, CategoryRef, CreateCategoryRequest, TaxType, UpdateCategoryRequest,
};

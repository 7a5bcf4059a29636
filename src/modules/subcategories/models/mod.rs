mod sub_category;

pub use sub_category::{
    CreateSubCategoryRequest, SubCategory, SubCategoryRef, SubCategoryResponse,
    UpdateSubCategoryRequest,
};

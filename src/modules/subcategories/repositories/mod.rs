mod sub_category_repository;

pub use sub_category_repository::{SubCategoryRepository, SubCategoryWithParent};

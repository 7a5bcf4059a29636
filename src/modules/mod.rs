pub mod categories;
pub mod items;
pub mod subcategories;

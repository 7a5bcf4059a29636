//! Menucraft — three-tier menu catalog API.
//!
//! Category → SubCategory → Item CRUD with tax-inheritance rules, a derived
//! `totalAmount` pricing field, and dual id-or-name lookup endpoints.

pub mod app;
pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::categories;
pub use modules::items;
pub use modules::subcategories;

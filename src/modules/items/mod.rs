// Items module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Item, ItemResponse};
pub use repositories::ItemRepository;
pub use services::ItemService;

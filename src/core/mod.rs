pub mod error;
pub mod identifier;
pub mod response;

pub use error::{AppError, Result};
pub use identifier::{new_entity_id, Identifier};
pub use response::ApiResponse;

use crate::core::{AppError, Identifier, Result};
use crate::modules::categories::models::{
    Category, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::modules::categories::repositories::CategoryRepository;

/// Business logic for top-level catalog nodes
pub struct CategoryService {
    repo: CategoryRepository,
}

impl CategoryService {
    pub fn new(repo: CategoryRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, request: CreateCategoryRequest) -> Result<Category> {
        let category = Category::new(request)?;

        // Check-then-insert; the unique index backstops concurrent creates.
        if self.repo.exists_by_name(&category.name).await? {
            return Err(AppError::conflict(
                "Category with this name already exists",
            ));
        }

        self.repo.insert(&category).await?;

        tracing::info!(category_id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    pub async fn list_all(&self) -> Result<Vec<Category>> {
        self.repo.list_all().await
    }

    /// Dual-mode lookup: surrogate key, or first case-insensitive name match
    pub async fn get_by_identifier(&self, identifier: &str) -> Result<Category> {
        let found = match Identifier::classify(identifier) {
            Identifier::Key(id) => self.repo.find_by_id(id).await?,
            Identifier::Name(fragment) => self.repo.find_first_by_name(fragment).await?,
        };

        found.ok_or_else(|| AppError::not_found("Category not found"))
    }

    pub async fn update(&self, id: &str, patch: UpdateCategoryRequest) -> Result<Category> {
        let mut category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        category.apply_update(patch)?;
        self.repo.update(&category).await?;

        tracing::info!(category_id = %category.id, "category updated");
        Ok(category)
    }
}

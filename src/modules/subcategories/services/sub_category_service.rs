use crate::core::{AppError, Identifier, Result};
use crate::modules::categories::models::CategoryRef;
use crate::modules::categories::repositories::CategoryRepository;
use crate::modules::subcategories::models::{
    CreateSubCategoryRequest, SubCategory, SubCategoryResponse, UpdateSubCategoryRequest,
};
use crate::modules::subcategories::repositories::{
    SubCategoryRepository, SubCategoryWithParent,
};

/// Business logic for second-level catalog nodes
pub struct SubCategoryService {
    repo: SubCategoryRepository,
    category_repo: CategoryRepository,
}

impl SubCategoryService {
    pub fn new(repo: SubCategoryRepository, category_repo: CategoryRepository) -> Self {
        Self {
            repo,
            category_repo,
        }
    }

    pub async fn create(&self, request: CreateSubCategoryRequest) -> Result<SubCategoryResponse> {
        let category_id = request
            .category
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::validation("category: Category reference is required for sub-category")
            })?
            .to_string();

        let parent = self
            .category_repo
            .find_by_id(&category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Parent category not found"))?;

        let sub_category = SubCategory::new(request, &parent)?;

        if self
            .repo
            .exists_in_category(&sub_category.name, &parent.id)
            .await?
        {
            return Err(AppError::conflict(
                "Sub-category with this name already exists in this category",
            ));
        }

        self.repo.insert(&sub_category).await?;

        tracing::info!(
            sub_category_id = %sub_category.id,
            category_id = %parent.id,
            "sub-category created"
        );
        Ok(sub_category.into_response(parent.to_ref(false)))
    }

    pub async fn list_all(&self) -> Result<Vec<SubCategoryResponse>> {
        let rows = self.repo.list_all_joined().await?;
        Ok(rows.into_iter().map(|r| to_response(r, false)).collect())
    }

    pub async fn list_by_category(&self, category_id: &str) -> Result<Vec<SubCategoryResponse>> {
        // Surface a dangling parent as 404 rather than an empty list
        self.category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        let rows = self.repo.list_joined_by_category(category_id).await?;
        Ok(rows.into_iter().map(|r| to_response(r, false)).collect())
    }

    /// Dual-mode lookup; the detail projection includes the parent's tax fields
    pub async fn get_by_identifier(&self, identifier: &str) -> Result<SubCategoryResponse> {
        let found = match Identifier::classify(identifier) {
            Identifier::Key(id) => self.repo.find_joined_by_id(id).await?,
            Identifier::Name(fragment) => self.repo.find_first_joined_by_name(fragment).await?,
        };

        found
            .map(|r| to_response(r, true))
            .ok_or_else(|| AppError::not_found("Sub-category not found"))
    }

    pub async fn update(
        &self,
        id: &str,
        patch: UpdateSubCategoryRequest,
    ) -> Result<SubCategoryResponse> {
        let mut sub_category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Sub-category not found"))?;

        sub_category.apply_update(patch)?;
        self.repo.update(&sub_category).await?;

        tracing::info!(sub_category_id = %sub_category.id, "sub-category updated");

        let row = self
            .repo
            .find_joined_by_id(&sub_category.id)
            .await?
            .ok_or_else(|| AppError::internal("sub-category vanished after update"))?;
        Ok(to_response(row, false))
    }
}

fn to_response(row: SubCategoryWithParent, include_parent_tax: bool) -> SubCategoryResponse {
    SubCategoryResponse {
        id: row.id,
        name: row.name,
        image: row.image,
        description: row.description,
        category: CategoryRef {
            id: row.category_id,
            name: row.category_name,
            description: row.category_description,
            tax_applicability: include_parent_tax.then_some(row.category_tax_applicability),
            tax: include_parent_tax.then_some(row.category_tax),
        },
        tax_applicability: row.tax_applicability,
        tax: row.tax,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

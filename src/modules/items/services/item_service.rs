use crate::core::{AppError, Identifier, Result};
use crate::modules::categories::models::CategoryRef;
use crate::modules::categories::repositories::CategoryRepository;
use crate::modules::items::models::{CreateItemRequest, Item, ItemResponse, UpdateItemRequest};
use crate::modules::items::repositories::{ItemRepository, ItemWithParents};
use crate::modules::subcategories::models::SubCategoryRef;
use crate::modules::subcategories::repositories::SubCategoryRepository;

/// Business logic for priced menu entries
pub struct ItemService {
    repo: ItemRepository,
    category_repo: CategoryRepository,
    sub_category_repo: SubCategoryRepository,
}

impl ItemService {
    pub fn new(
        repo: ItemRepository,
        category_repo: CategoryRepository,
        sub_category_repo: SubCategoryRepository,
    ) -> Self {
        Self {
            repo,
            category_repo,
            sub_category_repo,
        }
    }

    pub async fn create(&self, request: CreateItemRequest) -> Result<ItemResponse> {
        let category_id = request
            .category
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::validation("category: Category reference is required for item")
            })?
            .to_string();

        let category = self
            .category_repo
            .find_by_id(&category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        // A sub-category under a different category is treated as not found
        let sub_category = match request
            .sub_category
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
        {
            Some(sub_id) => {
                let sub = self
                    .sub_category_repo
                    .find_by_id(sub_id)
                    .await?
                    .filter(|s| s.category_id == category.id)
                    .ok_or_else(|| {
                        AppError::not_found(
                            "Sub-category not found or does not belong to the specified category",
                        )
                    })?;
                Some(sub)
            }
            None => None,
        };

        let item = Item::new(
            request,
            category.id.clone(),
            sub_category.as_ref().map(|s| s.id.clone()),
        )?;

        if self
            .repo
            .exists_in_scope(&item.name, &item.category_id, item.sub_category_id.as_deref())
            .await?
        {
            return Err(AppError::conflict(
                "Item with this name already exists in this category/sub-category",
            ));
        }

        self.repo.insert(&item).await?;

        tracing::info!(
            item_id = %item.id,
            category_id = %item.category_id,
            total_amount = item.total_amount,
            "item created"
        );

        Ok(ItemResponse {
            id: item.id,
            name: item.name,
            image: item.image,
            description: item.description,
            tax_applicability: item.tax_applicability,
            tax: item.tax,
            base_amount: item.base_amount,
            discount: item.discount,
            total_amount: item.total_amount,
            category: category.to_ref(false),
            sub_category: sub_category.map(|s| s.to_ref(false)),
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }

    pub async fn list_all(&self) -> Result<Vec<ItemResponse>> {
        let rows = self.repo.list_all_joined().await?;
        Ok(rows.into_iter().map(|r| to_response(r, false)).collect())
    }

    pub async fn list_by_category(&self, category_id: &str) -> Result<Vec<ItemResponse>> {
        self.category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        let rows = self.repo.list_joined_by_category(category_id).await?;
        Ok(rows.into_iter().map(|r| to_response(r, false)).collect())
    }

    pub async fn list_by_sub_category(&self, sub_category_id: &str) -> Result<Vec<ItemResponse>> {
        self.sub_category_repo
            .find_by_id(sub_category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Sub-category not found"))?;

        let rows = self.repo.list_joined_by_sub_category(sub_category_id).await?;
        Ok(rows.into_iter().map(|r| to_response(r, false)).collect())
    }

    /// Dual-mode lookup; the detail projection includes parent tax fields
    pub async fn get_by_identifier(&self, identifier: &str) -> Result<ItemResponse> {
        let found = match Identifier::classify(identifier) {
            Identifier::Key(id) => self.repo.find_joined_by_id(id).await?,
            Identifier::Name(fragment) => self.repo.find_first_joined_by_name(fragment).await?,
        };

        found
            .map(|r| to_response(r, true))
            .ok_or_else(|| AppError::not_found("Item not found"))
    }

    /// Case-insensitive substring search; blank queries are rejected
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<ItemResponse>> {
        if query.trim().is_empty() {
            return Err(AppError::invalid_argument("Search query is required"));
        }

        let rows = self.repo.search_joined_by_name(query).await?;
        Ok(rows.into_iter().map(|r| to_response(r, false)).collect())
    }

    pub async fn update(&self, id: &str, patch: UpdateItemRequest) -> Result<ItemResponse> {
        let mut item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))?;

        item.apply_update(patch)?;
        self.repo.update(&item).await?;

        tracing::info!(item_id = %item.id, total_amount = item.total_amount, "item updated");

        let row = self
            .repo
            .find_joined_by_id(&item.id)
            .await?
            .ok_or_else(|| AppError::internal("item vanished after update"))?;
        Ok(to_response(row, false))
    }
}

fn to_response(row: ItemWithParents, include_parent_tax: bool) -> ItemResponse {
    let sub_category = match (row.sub_category_id, row.sub_category_name) {
        (Some(id), Some(name)) => Some(SubCategoryRef {
            id,
            name,
            description: row.sub_category_description.unwrap_or_default(),
            tax_applicability: if include_parent_tax {
                row.sub_category_tax_applicability
            } else {
                None
            },
            tax: if include_parent_tax {
                row.sub_category_tax
            } else {
                None
            },
        }),
        _ => None,
    };

    ItemResponse {
        id: row.id,
        name: row.name,
        image: row.image,
        description: row.description,
        tax_applicability: row.tax_applicability,
        tax: row.tax,
        base_amount: row.base_amount,
        discount: row.discount,
        total_amount: row.total_amount,
        category: CategoryRef {
            id: row.category_id,
            name: row.category_name,
            description: row.category_description,
            tax_applicability: include_parent_tax.then_some(row.category_tax_applicability),
            tax: include_parent_tax.then_some(row.category_tax),
        },
        sub_category,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

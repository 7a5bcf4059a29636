// SubCategory: second-level grouping under exactly one Category.
//
// Tax fields default to a snapshot of the parent category's values at
// creation time. The snapshot is one-shot; later changes to the parent do
// not cascade here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{new_entity_id, AppError, Result};
use crate::modules::categories::models::{Category, CategoryRef};

/// Second-level catalog node
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category_id: String,
    pub tax_applicability: bool,
    pub tax: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for POST /api/subcategories
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubCategoryRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tax_applicability: Option<bool>,
    pub tax: Option<f64>,
}

/// Request body for PUT /api/subcategories/{id}; unspecified fields are retained
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubCategoryRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tax_applicability: Option<bool>,
    pub tax: Option<f64>,
}

/// Sub-category enriched with its parent category projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryResponse {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: CategoryRef,
    pub tax_applicability: bool,
    pub tax: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parent-subcategory projection attached to enriched item responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryRef {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_applicability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
}

impl SubCategory {
    /// Build a validated sub-category, snapshotting the parent's tax fields
    /// for anything the request omitted.
    pub fn new(request: CreateSubCategoryRequest, parent: &Category) -> Result<Self> {
        let name = required_trimmed(request.name, "Sub-category name is required")?;
        let image = required_trimmed(request.image, "Sub-category image URL is required")?;
        let description =
            required_trimmed(request.description, "Sub-category description is required")?;

        let now = Utc::now();
        Ok(Self {
            id: new_entity_id(),
            name,
            image,
            description,
            category_id: parent.id.clone(),
            tax_applicability: request
                .tax_applicability
                .unwrap_or(parent.tax_applicability),
            tax: request.tax.unwrap_or(parent.tax),
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge a partial update. The parent reference is not patchable; tax
    /// fields carry no positivity constraint on this level.
    pub fn apply_update(&mut self, patch: UpdateSubCategoryRequest) -> Result<()> {
        if let Some(name) = patch.name {
            self.name = required_trimmed(Some(name), "Sub-category name is required")?;
        }
        if let Some(image) = patch.image {
            self.image = required_trimmed(Some(image), "Sub-category image URL is required")?;
        }
        if let Some(description) = patch.description {
            self.description =
                required_trimmed(Some(description), "Sub-category description is required")?;
        }
        if let Some(tax_applicability) = patch.tax_applicability {
            self.tax_applicability = tax_applicability;
        }
        if let Some(tax) = patch.tax {
            self.tax = tax;
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    /// Projection used when enriching item records
    pub fn to_ref(&self, include_tax: bool) -> SubCategoryRef {
        SubCategoryRef {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            tax_applicability: include_tax.then_some(self.tax_applicability),
            tax: include_tax.then_some(self.tax),
        }
    }

    pub fn into_response(self, category: CategoryRef) -> SubCategoryResponse {
        SubCategoryResponse {
            id: self.id,
            name: self.name,
            image: self.image,
            description: self.description,
            category,
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn required_trimmed(value: Option<String>, message: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::validation(message)),
    }
}

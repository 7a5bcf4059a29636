// Item: priced menu entry under one Category and optionally one SubCategory.
//
// Derived pricing: `total_amount = base_amount - discount`, recomputed on
// every create and on every update from the merged field values. Tax follows
// the same rule as Category: positive exactly when applicable, forced to 0
// otherwise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{new_entity_id, AppError, Result};
use crate::modules::categories::models::CategoryRef;
use crate::modules::subcategories::models::SubCategoryRef;

/// Priced menu entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub tax_applicability: bool,
    pub tax: f64,
    pub base_amount: f64,
    pub discount: f64,
    pub total_amount: f64,
    pub category_id: String,
    pub sub_category_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for POST /api/items
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tax_applicability: bool,
    pub tax: Option<f64>,
    pub base_amount: Option<f64>,
    pub discount: Option<f64>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
}

/// Request body for PUT /api/items/{id}; unspecified fields are retained
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tax_applicability: Option<bool>,
    pub tax: Option<f64>,
    pub base_amount: Option<f64>,
    pub discount: Option<f64>,
}

/// Item enriched with its parent projections
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub tax_applicability: bool,
    pub tax: f64,
    pub base_amount: f64,
    pub discount: f64,
    pub total_amount: f64,
    pub category: CategoryRef,
    pub sub_category: Option<SubCategoryRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a validated item; parent references are resolved by the service
    /// before this runs.
    pub fn new(
        request: CreateItemRequest,
        category_id: String,
        sub_category_id: Option<String>,
    ) -> Result<Self> {
        let name = required_trimmed(request.name, "Item name is required")?;
        let image = required_trimmed(request.image, "Item image URL is required")?;
        let description = required_trimmed(request.description, "Item description is required")?;

        let base_amount = request
            .base_amount
            .ok_or_else(|| AppError::validation("baseAmount: Base amount is required"))?;
        let discount = request.discount.unwrap_or(0.0);

        let tax_applicability = request.tax_applicability;
        let tax = if tax_applicability {
            request.tax.unwrap_or(0.0)
        } else {
            0.0
        };

        let now = Utc::now();
        let mut item = Self {
            id: new_entity_id(),
            name,
            image,
            description,
            tax_applicability,
            tax,
            base_amount,
            discount,
            total_amount: 0.0,
            category_id,
            sub_category_id,
            created_at: now,
            updated_at: now,
        };

        item.recompute_total();
        item.validate()?;
        Ok(item)
    }

    /// Merge a partial update, recompute the derived total from the merged
    /// amounts, then re-validate. Parent references are not patchable.
    pub fn apply_update(&mut self, patch: UpdateItemRequest) -> Result<()> {
        if let Some(name) = patch.name {
            self.name = required_trimmed(Some(name), "Item name is required")?;
        }
        if let Some(image) = patch.image {
            self.image = required_trimmed(Some(image), "Item image URL is required")?;
        }
        if let Some(description) = patch.description {
            self.description = required_trimmed(Some(description), "Item description is required")?;
        }
        if let Some(tax_applicability) = patch.tax_applicability {
            self.tax_applicability = tax_applicability;
        }
        if let Some(tax) = patch.tax {
            self.tax = tax;
        }
        if let Some(base_amount) = patch.base_amount {
            self.base_amount = base_amount;
        }
        if let Some(discount) = patch.discount {
            self.discount = discount;
        }

        if !self.tax_applicability {
            self.tax = 0.0;
        }

        self.recompute_total();
        self.validate()?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// total = base - discount; never derived from a stale stored total
    fn recompute_total(&mut self) {
        self.total_amount = self.base_amount - self.discount;
    }

    fn validate(&self) -> Result<()> {
        if self.base_amount < 0.0 {
            return Err(AppError::validation("baseAmount: Base amount cannot be negative"));
        }
        if self.discount < 0.0 {
            return Err(AppError::validation("discount: Discount cannot be negative"));
        }
        if self.discount > self.base_amount {
            return Err(AppError::validation(
                "discount: Discount cannot exceed base amount",
            ));
        }
        if self.tax_applicability && self.tax <= 0.0 {
            return Err(AppError::validation(
                "tax: must be provided and greater than 0 when tax applicability is true",
            ));
        }
        Ok(())
    }
}

fn required_trimmed(value: Option<String>, message: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::validation(message)),
    }
}

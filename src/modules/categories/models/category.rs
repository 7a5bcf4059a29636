// Category: top-level catalog grouping.
//
// Tax invariant: `tax > 0` exactly when `tax_applicability` is true. When
// applicability is false the tax is forced to 0 and the tax type reset to
// the percentage default, on create and on update alike.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{new_entity_id, AppError, Result};

/// How a tax value is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaxType {
    #[default]
    Percentage,
    Fixed,
}

/// Top-level catalog node
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub tax_applicability: bool,
    pub tax: f64,
    pub tax_type: TaxType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for POST /api/categories
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tax_applicability: bool,
    pub tax: Option<f64>,
    pub tax_type: Option<TaxType>,
}

/// Request body for PUT /api/categories/{id}; unspecified fields are retained
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tax_applicability: Option<bool>,
    pub tax: Option<f64>,
    pub tax_type: Option<TaxType>,
}

/// Parent-category projection attached to enriched sub-category and item
/// responses. Tax fields are present only on the single-record lookups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_applicability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
}

impl Category {
    /// Build a validated category from a create request.
    ///
    /// Tax normalization happens here: a non-applicable category always
    /// persists with `tax = 0` and the default tax type, whatever the
    /// request carried.
    pub fn new(request: CreateCategoryRequest) -> Result<Self> {
        let name = required_trimmed(request.name, "Category name is required")?;
        let image = required_trimmed(request.image, "Category image URL is required")?;
        let description =
            required_trimmed(request.description, "Category description is required")?;

        let tax_applicability = request.tax_applicability;
        let (tax, tax_type) = if tax_applicability {
            (
                request.tax.unwrap_or(0.0),
                request.tax_type.unwrap_or_default(),
            )
        } else {
            (0.0, TaxType::Percentage)
        };

        let now = Utc::now();
        let category = Self {
            id: new_entity_id(),
            name,
            image,
            description,
            tax_applicability,
            tax,
            tax_type,
            created_at: now,
            updated_at: now,
        };

        category.validate_tax()?;
        Ok(category)
    }

    /// Merge a partial update, then re-validate.
    ///
    /// Setting `taxApplicability` to false forces `tax` to 0 even when the
    /// same patch carries a nonzero tax value.
    pub fn apply_update(&mut self, patch: UpdateCategoryRequest) -> Result<()> {
        if let Some(name) = patch.name {
            self.name = required_trimmed(Some(name), "Category name is required")?;
        }
        if let Some(image) = patch.image {
            self.image = required_trimmed(Some(image), "Category image URL is required")?;
        }
        if let Some(description) = patch.description {
            self.description =
                required_trimmed(Some(description), "Category description is required")?;
        }
        if let Some(tax_applicability) = patch.tax_applicability {
            self.tax_applicability = tax_applicability;
        }
        if let Some(tax) = patch.tax {
            self.tax = tax;
        }
        if let Some(tax_type) = patch.tax_type {
            self.tax_type = tax_type;
        }

        if !self.tax_applicability {
            self.tax = 0.0;
        }

        self.validate_tax()?;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn validate_tax(&self) -> Result<()> {
        if self.tax_applicability && self.tax <= 0.0 {
            return Err(AppError::validation(
                "tax: must be provided and greater than 0 when tax applicability is true",
            ));
        }
        Ok(())
    }

    /// Projection used when enriching child records
    pub fn to_ref(&self, include_tax: bool) -> CategoryRef {
        CategoryRef {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            tax_applicability: include_tax.then_some(self.tax_applicability),
            tax: include_tax.then_some(self.tax),
        }
    }
}

fn required_trimmed(value: Option<String>, message: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::validation(message)),
    }
}

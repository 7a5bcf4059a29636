// SQLite persistence for sub-categories.
//
// Enriched reads join the parent category once and return flat rows; the
// service layer picks how much of the parent projection ends up on the wire.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::core::Result;
use crate::modules::subcategories::models::SubCategory;

/// Sub-category row joined with its parent category
#[derive(Debug, FromRow)]
pub struct SubCategoryWithParent {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category_id: String,
    pub tax_applicability: bool,
    pub tax: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category_name: String,
    pub category_description: String,
    pub category_tax_applicability: bool,
    pub category_tax: f64,
}

const JOINED_SELECT: &str = r#"
    SELECT s.id, s.name, s.image, s.description, s.category_id,
           s.tax_applicability, s.tax, s.created_at, s.updated_at,
           c.name AS category_name,
           c.description AS category_description,
           c.tax_applicability AS category_tax_applicability,
           c.tax AS category_tax
    FROM sub_categories s
    JOIN categories c ON c.id = s.category_id
"#;

#[derive(Clone)]
pub struct SubCategoryRepository {
    pool: SqlitePool,
}

impl SubCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, sub_category: &SubCategory) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sub_categories (
                id, name, image, description, category_id, tax_applicability, tax,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&sub_category.id)
        .bind(&sub_category.name)
        .bind(&sub_category.image)
        .bind(&sub_category.description)
        .bind(&sub_category.category_id)
        .bind(sub_category.tax_applicability)
        .bind(sub_category.tax)
        .bind(sub_category.created_at)
        .bind(sub_category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<SubCategory>> {
        let sub_category = sqlx::query_as::<_, SubCategory>(
            r#"
            SELECT id, name, image, description, category_id, tax_applicability, tax,
                   created_at, updated_at
            FROM sub_categories
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sub_category)
    }

    /// Uniqueness pre-check scoped to the parent category
    pub async fn exists_in_category(&self, name: &str, category_id: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sub_categories WHERE name = ? AND category_id = ?",
        )
        .bind(name)
        .bind(category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn find_joined_by_id(&self, id: &str) -> Result<Option<SubCategoryWithParent>> {
        let row = sqlx::query_as::<_, SubCategoryWithParent>(
            &format!("{JOINED_SELECT} WHERE s.id = ?"),
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// First sub-category whose name contains `fragment`, case-insensitively
    pub async fn find_first_joined_by_name(
        &self,
        fragment: &str,
    ) -> Result<Option<SubCategoryWithParent>> {
        let row = sqlx::query_as::<_, SubCategoryWithParent>(
            &format!("{JOINED_SELECT} WHERE s.name LIKE '%' || ? || '%' LIMIT 1"),
        )
        .bind(fragment)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_all_joined(&self) -> Result<Vec<SubCategoryWithParent>> {
        let rows = sqlx::query_as::<_, SubCategoryWithParent>(
            &format!("{JOINED_SELECT} ORDER BY s.created_at DESC"),
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_joined_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<SubCategoryWithParent>> {
        let rows = sqlx::query_as::<_, SubCategoryWithParent>(
            &format!("{JOINED_SELECT} WHERE s.category_id = ? ORDER BY s.created_at DESC"),
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update(&self, sub_category: &SubCategory) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE sub_categories
            SET name = ?, image = ?, description = ?, tax_applicability = ?,
                tax = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&sub_category.name)
        .bind(&sub_category.image)
        .bind(&sub_category.description)
        .bind(sub_category.tax_applicability)
        .bind(sub_category.tax)
        .bind(sub_category.updated_at)
        .bind(&sub_category.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

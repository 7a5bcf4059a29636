// SQLite persistence for items.
//
// Enriched reads join the parent category and, when present, the parent
// sub-category. Name-scope uniqueness uses `IS` so that a missing
// sub-category reference forms its own scope distinct from every concrete
// one.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::core::Result;
use crate::modules::items::models::Item;

/// Item row joined with its parents; sub-category columns are null for items
/// that sit directly under a category
#[derive(Debug, FromRow)]
pub struct ItemWithParents {
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
    pub category_name: String,
    pub category_description: String,
    pub category_tax_applicability: bool,
    pub category_tax: f64,
    pub sub_category_name: Option<String>,
    pub sub_category_description: Option<String>,
    pub sub_category_tax_applicability: Option<bool>,
    pub sub_category_tax: Option<f64>,
}

const JOINED_SELECT: &str = r#"
    SELECT i.id, i.name, i.image, i.description,
           i.tax_applicability, i.tax,
           i.base_amount, i.discount, i.total_amount,
           i.category_id, i.sub_category_id, i.created_at, i.updated_at,
           c.name AS category_name,
           c.description AS category_description,
           c.tax_applicability AS category_tax_applicability,
           c.tax AS category_tax,
           s.name AS sub_category_name,
           s.description AS sub_category_description,
           s.tax_applicability AS sub_category_tax_applicability,
           s.tax AS sub_category_tax
    FROM items i
    JOIN categories c ON c.id = i.category_id
    LEFT JOIN sub_categories s ON s.id = i.sub_category_id
"#;

#[derive(Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, item: &Item) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO items (
                id, name, image, description, tax_applicability, tax,
                base_amount, discount, total_amount, category_id, sub_category_id,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.image)
        .bind(&item.description)
        .bind(item.tax_applicability)
        .bind(item.tax)
        .bind(item.base_amount)
        .bind(item.discount)
        .bind(item.total_amount)
        .bind(&item.category_id)
        .bind(&item.sub_category_id)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, image, description, tax_applicability, tax,
                   base_amount, discount, total_amount, category_id, sub_category_id,
                   created_at, updated_at
            FROM items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Uniqueness pre-check scoped to (category, sub-category); `IS` makes a
    /// null sub-category compare as its own scope
    pub async fn exists_in_scope(
        &self,
        name: &str,
        category_id: &str,
        sub_category_id: Option<&str>,
    ) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM items
            WHERE name = ? AND category_id = ? AND sub_category_id IS ?
            "#,
        )
        .bind(name)
        .bind(category_id)
        .bind(sub_category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn find_joined_by_id(&self, id: &str) -> Result<Option<ItemWithParents>> {
        let row = sqlx::query_as::<_, ItemWithParents>(&format!("{JOINED_SELECT} WHERE i.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// First item whose name contains `fragment`, case-insensitively
    pub async fn find_first_joined_by_name(
        &self,
        fragment: &str,
    ) -> Result<Option<ItemWithParents>> {
        let row = sqlx::query_as::<_, ItemWithParents>(&format!(
            "{JOINED_SELECT} WHERE i.name LIKE '%' || ? || '%' LIMIT 1"
        ))
        .bind(fragment)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_all_joined(&self) -> Result<Vec<ItemWithParents>> {
        let rows = sqlx::query_as::<_, ItemWithParents>(&format!(
            "{JOINED_SELECT} ORDER BY i.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_joined_by_category(&self, category_id: &str) -> Result<Vec<ItemWithParents>> {
        let rows = sqlx::query_as::<_, ItemWithParents>(&format!(
            "{JOINED_SELECT} WHERE i.category_id = ? ORDER BY i.created_at DESC"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_joined_by_sub_category(
        &self,
        sub_category_id: &str,
    ) -> Result<Vec<ItemWithParents>> {
        let rows = sqlx::query_as::<_, ItemWithParents>(&format!(
            "{JOINED_SELECT} WHERE i.sub_category_id = ? ORDER BY i.created_at DESC"
        ))
        .bind(sub_category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// All items whose name contains `query`, case-insensitively, newest first
    pub async fn search_joined_by_name(&self, query: &str) -> Result<Vec<ItemWithParents>> {
        let rows = sqlx::query_as::<_, ItemWithParents>(&format!(
            "{JOINED_SELECT} WHERE i.name LIKE '%' || ? || '%' ORDER BY i.created_at DESC"
        ))
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update(&self, item: &Item) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE items
            SET name = ?, image = ?, description = ?, tax_applicability = ?, tax = ?,
                base_amount = ?, discount = ?, total_amount = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&item.name)
        .bind(&item.image)
        .bind(&item.description)
        .bind(item.tax_applicability)
        .bind(item.tax)
        .bind(item.base_amount)
        .bind(item.discount)
        .bind(item.total_amount)
        .bind(item.updated_at)
        .bind(&item.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

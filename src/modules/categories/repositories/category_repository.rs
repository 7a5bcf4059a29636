// SQLite persistence for categories.
//
// Name lookups: exact match for the uniqueness pre-check, case-insensitive
// substring match for the id-or-name endpoint. The substring lookup returns
// the first row in store order; the tie-break among multiple matches is
// deliberately left to the database.

use sqlx::SqlitePool;

use crate::core::Result;
use crate::modules::categories::models::Category;

#[derive(Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, category: &Category) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (
                id, name, image, description, tax_applicability, tax, tax_type,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.image)
        .bind(&category.description)
        .bind(category.tax_applicability)
        .bind(category.tax)
        .bind(category.tax_type)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, image, description, tax_applicability, tax, tax_type,
                   created_at, updated_at
            FROM categories
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Exact-name match, used for the create-time uniqueness check
    pub async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// First category whose name contains `fragment`, case-insensitively
    pub async fn find_first_by_name(&self, fragment: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, image, description, tax_applicability, tax, tax_type,
                   created_at, updated_at
            FROM categories
            WHERE name LIKE '%' || ? || '%'
            LIMIT 1
            "#,
        )
        .bind(fragment)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn list_all(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, image, description, tax_applicability, tax, tax_type,
                   created_at, updated_at
            FROM categories
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn update(&self, category: &Category) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE categories
            SET name = ?, image = ?, description = ?, tax_applicability = ?,
                tax = ?, tax_type = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&category.name)
        .bind(&category.image)
        .bind(&category.description)
        .bind(category.tax_applicability)
        .bind(category.tax)
        .bind(category.tax_type)
        .bind(category.updated_at)
        .bind(&category.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

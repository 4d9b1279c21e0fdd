//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD: insert, get, list, replace, patch, delete
//! - sku lookup (unique business identifier)
//!
//! ## Uniqueness Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               How sku Uniqueness Is Enforced                            │
//! │                                                                         │
//! │  ❌ WRONG: check-then-insert in application code                        │
//! │     if get_by_sku(sku).is_none() { insert(...) }                       │
//! │     → two concurrent requests can both pass the check                  │
//! │                                                                         │
//! │  ✅ CORRECT: let the UNIQUE constraint reject the write                 │
//! │     INSERT/UPDATE fails with "UNIQUE constraint failed: products.sku"  │
//! │     → mapped to DbError::UniqueViolation, no race window               │
//! │                                                                         │
//! │  An UPDATE keeping a row's own sku never violates the constraint,      │
//! │  so "excluding the record itself" comes for free.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use stockroom_core::{NewProduct, Product, ProductPatch};

/// Columns selected for every Product read, in FromRow order.
const PRODUCT_COLUMNS: &str = "id, name, sku, price_cents, stock, created_at";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let created = repo.insert(&new_product).await?;
/// let product = repo.get_by_id(&created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// The id (UUID v4) and created_at timestamp are generated here;
    /// they are never accepted from callers.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored product with generated fields
    /// * `Err(DbError::UniqueViolation)` - sku already exists
    pub async fn insert(&self, new: &NewProduct) -> DbResult<Product> {
        debug!(sku = %new.sku, "Inserting product");

        let product = Product {
            id: generate_product_id(),
            name: new.name.clone(),
            sku: new.sku.clone(),
            price_cents: new.price_cents,
            stock: new.stock,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO products (id, name, sku, price_cents, stock, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.sku)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_violating_value(&new.sku))?;

        Ok(product)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Gets a product by its SKU.
    pub async fn get_by_sku(&self, sku: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE sku = ?1"
        ))
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all products.
    ///
    /// Ordered by name so the table view renders stably across refreshes.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Replaces all mutable fields of an existing product.
    ///
    /// `id` and `created_at` are untouched.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The updated product
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    /// * `Err(DbError::UniqueViolation)` - sku taken by another product
    pub async fn replace(&self, id: &str, fields: &NewProduct) -> DbResult<Product> {
        debug!(id = %id, sku = %fields.sku, "Replacing product");

        let result = sqlx::query(
            "UPDATE products SET name = ?2, sku = ?3, price_cents = ?4, stock = ?5 \
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.sku)
        .bind(fields.price_cents)
        .bind(fields.stock)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_violating_value(&fields.sku))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Overwrites only the fields supplied in the patch.
    ///
    /// Read-modify-write: the merge happens in memory, but the write still
    /// goes through the UNIQUE constraint, so a concurrent sku collision is
    /// rejected by the storage engine rather than by a stale check.
    pub async fn patch(&self, id: &str, patch: &ProductPatch) -> DbResult<Product> {
        debug!(id = %id, "Patching product");

        let existing = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))?;

        if patch.is_empty() {
            return Ok(existing);
        }

        let merged = patch.apply_to(&existing);
        self.replace(id, &merged).await
    }

    /// Deletes a product.
    ///
    /// Hard delete: a second delete of the same id returns NotFound.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_repo() -> ProductRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
    }

    fn mouse() -> NewProduct {
        NewProduct {
            name: "Wireless Mouse".to_string(),
            sku: "WM-001".to_string(),
            price_cents: 2999,
            stock: 150,
        }
    }

    fn keyboard() -> NewProduct {
        NewProduct {
            name: "Mechanical Keyboard".to_string(),
            sku: "KB-002".to_string(),
            price_cents: 8950,
            stock: 40,
        }
    }

    #[tokio::test]
    async fn test_insert_generates_id_and_timestamp() {
        let repo = test_repo().await;

        let created = repo.insert(&mouse()).await.unwrap();
        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.sku, "WM-001");
        assert_eq!(created.stock, 150);

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Wireless Mouse");
        assert_eq!(fetched.price_cents, 2999);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_rejected_by_the_store() {
        let repo = test_repo().await;
        repo.insert(&mouse()).await.unwrap();

        let mut dup = keyboard();
        dup.sku = "WM-001".to_string();

        let err = repo.insert(&dup).await.unwrap_err();
        match err {
            DbError::UniqueViolation { field, value } => {
                assert_eq!(field, "sku");
                assert_eq!(value, "WM-001");
            }
            other => panic!("expected UniqueViolation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_returns_all_products() {
        let repo = test_repo().await;
        repo.insert(&mouse()).await.unwrap();
        repo.insert(&keyboard()).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_replace_overwrites_mutable_fields_only() {
        let repo = test_repo().await;
        let created = repo.insert(&mouse()).await.unwrap();

        let replaced = repo.replace(&created.id, &keyboard()).await.unwrap();
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.created_at, created.created_at);
        assert_eq!(replaced.sku, "KB-002");
        assert_eq!(replaced.price_cents, 8950);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_is_not_found() {
        let repo = test_repo().await;
        let err = repo.replace("no-such-id", &mouse()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_replace_to_own_sku_is_allowed() {
        let repo = test_repo().await;
        let created = repo.insert(&mouse()).await.unwrap();

        // Same sku, new price: the UNIQUE constraint excludes the row itself
        let mut fields = mouse();
        fields.price_cents = 1999;
        let replaced = repo.replace(&created.id, &fields).await.unwrap();
        assert_eq!(replaced.sku, "WM-001");
        assert_eq!(replaced.price_cents, 1999);
    }

    #[tokio::test]
    async fn test_replace_to_taken_sku_is_a_conflict() {
        let repo = test_repo().await;
        repo.insert(&mouse()).await.unwrap();
        let kb = repo.insert(&keyboard()).await.unwrap();

        let mut fields = keyboard();
        fields.sku = "WM-001".to_string();
        let err = repo.replace(&kb.id, &fields).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_patch_changes_only_supplied_fields() {
        let repo = test_repo().await;
        let created = repo.insert(&mouse()).await.unwrap();

        let patch = ProductPatch {
            stock: Some(175),
            ..Default::default()
        };
        let patched = repo.patch(&created.id, &patch).await.unwrap();

        assert_eq!(patched.stock, 175);
        assert_eq!(patched.name, "Wireless Mouse");
        assert_eq!(patched.sku, "WM-001");
        assert_eq!(patched.price_cents, 2999);
        assert_eq!(patched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_empty_patch_is_a_no_op() {
        let repo = test_repo().await;
        let created = repo.insert(&mouse()).await.unwrap();

        let patched = repo.patch(&created.id, &ProductPatch::default()).await.unwrap();
        assert_eq!(patched.stock, created.stock);
    }

    #[tokio::test]
    async fn test_delete_then_second_delete_is_not_found() {
        let repo = test_repo().await;
        let created = repo.insert(&mouse()).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        assert!(repo.get_by_id(&created.id).await.unwrap().is_none());

        let err = repo.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_by_sku() {
        let repo = test_repo().await;
        repo.insert(&mouse()).await.unwrap();

        assert!(repo.get_by_sku("WM-001").await.unwrap().is_some());
        assert!(repo.get_by_sku("NOPE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_check_constraint_backstops_negative_stock() {
        let repo = test_repo().await;

        // Validation rejects this before any query in the real flow; the
        // CHECK constraint is the last line of defense.
        let mut bad = mouse();
        bad.stock = -1;
        let err = repo.insert(&bad).await.unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));
    }
}

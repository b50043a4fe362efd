//! PostgreSQL adapter
//!
//! Uses runtime-checked sqlx queries; rows decode through `FromRow` on the
//! feature models.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{
    CarouselStore, CategoryStore, FooterStore, ProductStore, StoreError, StoreResult,
};
use crate::features::carousel::models::{CarouselImage, CarouselImagePatch, NewCarouselImage};
use crate::features::categories::models::{
    Category, CategoryPatch, CategoryRemoval, CategoryUpdate, NewCategory,
};
use crate::features::footer::models::FooterContent;
use crate::features::products::models::{
    NewProduct, Product, ProductFilter, ProductGallery, ProductPatch,
};

const PRODUCT_COLUMNS: &str = "id, name, description, dimensions, category, use_case, image, \
     is_featured, is_new_arrival, created_at, updated_at";

const CATEGORY_COLUMNS: &str = "id, name, description, image, created_at, updated_at";

const CAROUSEL_COLUMNS: &str = "id, image, title, subtitle, button_text, button_link, \
     display_order, created_at, updated_at";

/// Convert a database error into a store error, surfacing constraint violations
fn map_db_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            let message = match db_err.constraint() {
                Some("categories_name_unique") => "A category with this name already exists",
                Some("carousel_images_display_order_unique") => {
                    "Another slide already uses this display order"
                }
                _ => "A record with these values already exists",
            };
            return StoreError::Conflict(message.to_string());
        }

        // Check constraint violation (PostgreSQL error code 23514)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23514")) {
            return StoreError::Conflict("The record violates a catalog rule".to_string());
        }
    }

    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(e.to_string())
        }
        other => StoreError::Database(other),
    }
}

fn missing_category() -> StoreError {
    StoreError::Conflict("Referenced record does not exist".to_string())
}

pub struct PgStore {
    pool: PgPool,
}

impl std::fmt::Debug for PgStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgStore").field("pool", &"<PgPool>").finish()
    }
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgStore {
    async fn select_products(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM products WHERE TRUE", PRODUCT_COLUMNS));

        if let Some(is_featured) = filter.is_featured {
            query.push(" AND is_featured = ").push_bind(is_featured);
        }
        if let Some(is_new_arrival) = filter.is_new_arrival {
            query.push(" AND is_new_arrival = ").push_bind(is_new_arrival);
        }
        if let Some(ref category) = filter.category {
            query.push(" AND category = ").push_bind(category.clone());
        }
        query.push(" ORDER BY created_at, id");

        query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn select_product(&self, id: Uuid) -> StoreResult<Option<Product>> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn insert_product(&self, product: NewProduct) -> StoreResult<Product> {
        // FOR KEY SHARE waits on a concurrent rename or delete of the category
        let row = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products
                (name, description, dimensions, category, use_case, image, is_featured, is_new_arrival)
            SELECT $1, $2, $3, $4, $5, $6, $7, $8
            WHERE EXISTS (SELECT 1 FROM categories WHERE name = $4 FOR KEY SHARE)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(product.name)
        .bind(product.description)
        .bind(product.dimensions)
        .bind(product.category)
        .bind(product.use_case)
        .bind(product.image)
        .bind(product.is_featured)
        .bind(product.is_new_arrival)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.ok_or_else(missing_category)
    }

    async fn update_product(&self, id: Uuid, patch: ProductPatch) -> StoreResult<Option<Product>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if let Some(ref category) = patch.category {
            let exists = sqlx::query_scalar::<_, Uuid>(
                "SELECT id FROM categories WHERE name = $1 FOR KEY SHARE",
            )
            .bind(category)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;
            if exists.is_none() {
                tx.rollback().await.map_err(map_db_error)?;
                return Err(missing_category());
            }
        }

        let updated = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                dimensions = COALESCE($4, dimensions),
                category = COALESCE($5, category),
                use_case = COALESCE($6, use_case),
                image = COALESCE($7, image),
                is_featured = COALESCE($8, is_featured),
                is_new_arrival = COALESCE($9, is_new_arrival),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.dimensions)
        .bind(patch.category)
        .bind(patch.use_case)
        .bind(patch.image)
        .bind(patch.is_featured)
        .bind(patch.is_new_arrival)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(updated)
    }

    async fn delete_product(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn select_gallery(&self, product_id: Uuid) -> StoreResult<ProductGallery> {
        let images = sqlx::query_scalar::<_, String>(
            "SELECT image FROM product_gallery_images WHERE product_id = $1 ORDER BY position",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ProductGallery { product_id, images })
    }

    async fn replace_gallery(
        &self,
        product_id: Uuid,
        images: Vec<String>,
    ) -> StoreResult<ProductGallery> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM product_gallery_images WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if !images.is_empty() {
            let mut insert: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO product_gallery_images (product_id, position, image) ",
            );
            insert.push_values(images.iter().enumerate(), |mut row, (position, image)| {
                row.push_bind(product_id)
                    .push_bind(position as i32)
                    .push_bind(image.clone());
            });
            insert
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(ProductGallery { product_id, images })
    }
}

#[async_trait]
impl CategoryStore for PgStore {
    async fn select_categories(&self) -> StoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories ORDER BY name",
            CATEGORY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn select_category(&self, id: Uuid) -> StoreResult<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE id = $1",
            CATEGORY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn select_category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE name = $1",
            CATEGORY_COLUMNS
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn insert_category(&self, category: NewCategory) -> StoreResult<Category> {
        sqlx::query_as::<_, Category>(&format!(
            r#"
            INSERT INTO categories (name, description, image)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        ))
        .bind(category.name)
        .bind(category.description)
        .bind(category.image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn rename_category(
        &self,
        id: Uuid,
        patch: CategoryPatch,
    ) -> StoreResult<Option<CategoryUpdate>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the row so product writes naming it wait for this rename
        let previous_name = sqlx::query_scalar::<_, String>(
            "SELECT name FROM categories WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;
        let Some(previous_name) = previous_name else {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        };

        let category = sqlx::query_as::<_, Category>(&format!(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.image)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let mut products_moved = 0;
        if category.name != previous_name {
            products_moved = sqlx::query(
                "UPDATE products SET category = $2, updated_at = NOW() WHERE category = $1",
            )
            .bind(&previous_name)
            .bind(&category.name)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(Some(CategoryUpdate {
            category,
            previous_name,
            products_moved,
        }))
    }

    async fn delete_category_if_unused(&self, id: Uuid) -> StoreResult<CategoryRemoval> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let name = sqlx::query_scalar::<_, String>(
            "SELECT name FROM categories WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;
        let Some(name) = name else {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(CategoryRemoval::Missing);
        };

        let in_use =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE category = $1")
                .bind(&name)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
        if in_use > 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(CategoryRemoval::InUse(in_use));
        }

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(CategoryRemoval::Deleted)
    }
}

#[async_trait]
impl CarouselStore for PgStore {
    async fn select_carousel_images(&self) -> StoreResult<Vec<CarouselImage>> {
        sqlx::query_as::<_, CarouselImage>(&format!(
            "SELECT {} FROM carousel_images ORDER BY display_order, created_at, id",
            CAROUSEL_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn select_carousel_image(&self, id: Uuid) -> StoreResult<Option<CarouselImage>> {
        sqlx::query_as::<_, CarouselImage>(&format!(
            "SELECT {} FROM carousel_images WHERE id = $1",
            CAROUSEL_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn max_display_order(&self) -> StoreResult<Option<i32>> {
        sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(display_order) FROM carousel_images")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn insert_carousel_image(&self, slide: NewCarouselImage) -> StoreResult<CarouselImage> {
        sqlx::query_as::<_, CarouselImage>(&format!(
            r#"
            INSERT INTO carousel_images
                (image, title, subtitle, button_text, button_link, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            CAROUSEL_COLUMNS
        ))
        .bind(slide.image)
        .bind(slide.title)
        .bind(slide.subtitle)
        .bind(slide.button_text)
        .bind(slide.button_link)
        .bind(slide.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn update_carousel_image(
        &self,
        id: Uuid,
        patch: CarouselImagePatch,
    ) -> StoreResult<Option<CarouselImage>> {
        sqlx::query_as::<_, CarouselImage>(&format!(
            r#"
            UPDATE carousel_images
            SET image = COALESCE($2, image),
                title = COALESCE($3, title),
                subtitle = COALESCE($4, subtitle),
                button_text = COALESCE($5, button_text),
                button_link = COALESCE($6, button_link),
                display_order = COALESCE($7, display_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            CAROUSEL_COLUMNS
        ))
        .bind(id)
        .bind(patch.image)
        .bind(patch.title)
        .bind(patch.subtitle)
        .bind(patch.button_text)
        .bind(patch.button_link)
        .bind(patch.display_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn delete_carousel_image(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM carousel_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn swap_display_order(&self, first: Uuid, second: Uuid) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock both rows so a concurrent swap cannot interleave
        let rows = sqlx::query_as::<_, (Uuid, i32)>(
            "SELECT id, display_order FROM carousel_images WHERE id = $1 OR id = $2 FOR UPDATE",
        )
        .bind(first)
        .bind(second)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let order_of = |id: Uuid| rows.iter().find(|(row_id, _)| *row_id == id).map(|r| r.1);
        let (Some(first_order), Some(second_order)) = (order_of(first), order_of(second)) else {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        };

        // The unique constraint is deferred, so one statement can exchange both values
        sqlx::query(
            r#"
            UPDATE carousel_images
            SET display_order = CASE WHEN id = $1 THEN $2 ELSE $4 END,
                updated_at = NOW()
            WHERE id = $1 OR id = $3
            "#,
        )
        .bind(first)
        .bind(second_order)
        .bind(second)
        .bind(first_order)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }
}

#[async_trait]
impl FooterStore for PgStore {
    async fn select_footer(&self) -> StoreResult<Option<FooterContent>> {
        sqlx::query_as::<_, FooterContent>(
            "SELECT copyright, address, phone, email, whatsapp FROM site_footer WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn upsert_footer(&self, content: FooterContent) -> StoreResult<FooterContent> {
        sqlx::query_as::<_, FooterContent>(
            r#"
            INSERT INTO site_footer (id, copyright, address, phone, email, whatsapp)
            VALUES (1, $1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET copyright = EXCLUDED.copyright,
                address = EXCLUDED.address,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                whatsapp = EXCLUDED.whatsapp,
                updated_at = NOW()
            RETURNING copyright, address, phone, email, whatsapp
            "#,
        )
        .bind(content.copyright)
        .bind(content.address)
        .bind(content.phone)
        .bind(content.email)
        .bind(content.whatsapp)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

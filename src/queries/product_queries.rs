use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductUpdate},
};

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn count(pool: &PgPool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

pub async fn create(pool: &PgPool, req: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (
            name, description, price, category, image_url, specifications, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, NOW())
        RETURNING *
        "#,
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.price)
    .bind(&req.category)
    .bind(&req.image_url)
    .bind(
        req.specifications
            .as_ref()
            .unwrap_or(&serde_json::json!({})),
    )
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Replaces only the fields present in `req`. Returns `None` when no row has `id`.
pub async fn update(pool: &PgPool, id: i32, req: &ProductUpdate) -> Result<Option<Product>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE products SET ");
    let mut fields = query.separated(", ");

    if let Some(ref name) = req.name {
        fields.push("name = ");
        fields.push_bind_unseparated(name.clone());
    }

    if let Some(ref description) = req.description {
        fields.push("description = ");
        fields.push_bind_unseparated(description.clone());
    }

    if let Some(price) = req.price {
        fields.push("price = ");
        fields.push_bind_unseparated(price);
    }

    if let Some(ref category) = req.category {
        fields.push("category = ");
        fields.push_bind_unseparated(category.clone());
    }

    if let Some(ref image_url) = req.image_url {
        fields.push("image_url = ");
        fields.push_bind_unseparated(image_url.clone());
    }

    if let Some(ref specifications) = req.specifications {
        fields.push("specifications = ");
        fields.push_bind_unseparated(specifications.clone());
    }

    query.push(" WHERE id = ");
    query.push_bind(id);
    query.push(" RETURNING *");

    let product = query
        .build_query_as::<Product>()
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

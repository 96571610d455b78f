use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::{NewProduct, Product, ProductUpdate},
    queries::product_queries,
    utils::{extractors::AdminSession, validation::normalize_url},
};

const ADD_FAILED: &str = "فشل في إضافة المنتج";
const UPDATE_FAILED: &str = "فشل في تحديث المنتج";
const DELETE_FAILED: &str = "فشل في حذف المنتج";

pub async fn list_products(pool: &PgPool, _session: &AdminSession) -> Result<Vec<Product>> {
    product_queries::find_all(pool).await
}

/// Storefront listing. Storage failures are logged and yield an empty catalogue.
pub async fn list_public_products(pool: &PgPool) -> Vec<Product> {
    match product_queries::find_all(pool).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Failed to load public products: {}", e);
            Vec::new()
        }
    }
}

pub async fn add_product(
    pool: &PgPool,
    _session: &AdminSession,
    mut req: NewProduct,
) -> Result<Product> {
    req.image_url = normalize_url("imageUrl", req.image_url)?;

    let product = product_queries::create(pool, &req)
        .await
        .map_err(|e| AppError::storage_failure(e, ADD_FAILED))?;

    tracing::info!("Product {} created", product.id);

    Ok(product)
}

pub async fn update_product(
    pool: &PgPool,
    _session: &AdminSession,
    id: i32,
    mut req: ProductUpdate,
) -> Result<Product> {
    if req.is_empty() {
        return Err(AppError::BadRequest(
            "يجب تحديد حقل واحد على الأقل للتحديث".to_string(),
        ));
    }

    if let Some(image_url) = req.image_url.take() {
        req.image_url = Some(normalize_url("imageUrl", image_url)?);
    }

    product_queries::update(pool, id, &req)
        .await
        .map_err(|e| AppError::storage_failure(e, UPDATE_FAILED))?
        .ok_or_else(|| AppError::NotFound("المنتج غير موجود".to_string()))
}

/// Deleting an id that does not exist is not an error.
pub async fn delete_product(pool: &PgPool, _session: &AdminSession, id: i32) -> Result<()> {
    let deleted = product_queries::delete(pool, id)
        .await
        .map_err(|e| AppError::storage_failure(e, DELETE_FAILED))?;

    if deleted == 0 {
        tracing::debug!("Delete of product {} matched no rows", id);
    } else {
        tracing::info!("Product {} deleted", id);
    }

    Ok(())
}

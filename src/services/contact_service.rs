use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::{ContactInfo, ContactInfoUpdate, NewContactInfo},
    queries::contact_queries,
    utils::{extractors::AdminSession, validation::normalize_url},
};

const UPDATE_FAILED: &str = "فشل تحديث معلومات الاتصال";

/// Public read of the singleton record. Storage failures are logged and read as "no record".
pub async fn get_contact_info(pool: &PgPool) -> Option<ContactInfo> {
    match contact_queries::find_first(pool).await {
        Ok(info) => info,
        Err(e) => {
            tracing::error!("Failed to load contact info: {}", e);
            None
        }
    }
}

/// Upserts the singleton record: updates the existing row with the provided fields,
/// or inserts one with empty defaults when none exists.
///
/// Two concurrent calls that both find no row will both insert; reads then return the
/// lowest id.
pub async fn update_contact_info(
    pool: &PgPool,
    _session: &AdminSession,
    mut req: ContactInfoUpdate,
) -> Result<ContactInfo> {
    req.facebook = normalize_social("facebook", req.facebook.take())?;
    req.instagram = normalize_social("instagram", req.instagram.take())?;
    req.twitter = normalize_social("twitter", req.twitter.take())?;

    upsert(pool, req)
        .await
        .map_err(|e| AppError::storage_failure(e, UPDATE_FAILED))
}

async fn upsert(pool: &PgPool, req: ContactInfoUpdate) -> Result<ContactInfo> {
    match contact_queries::find_first(pool).await? {
        Some(existing) => {
            let updated = contact_queries::update(pool, existing.id, &req).await?;
            tracing::info!("Contact info {} updated", updated.id);
            Ok(updated)
        }
        None => {
            let created = contact_queries::create(pool, &NewContactInfo::from(req)).await?;
            tracing::info!("Contact info {} created", created.id);
            Ok(created)
        }
    }
}

fn normalize_social(
    field: &str,
    value: Option<Option<String>>,
) -> Result<Option<Option<String>>> {
    value.map(|link| normalize_url(field, link)).transpose()
}

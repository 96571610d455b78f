use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{ContactInfo, ContactInfoUpdate, NewContactInfo},
};

pub async fn find_first(pool: &PgPool) -> Result<Option<ContactInfo>> {
    let info = sqlx::query_as::<_, ContactInfo>("SELECT * FROM contact_info ORDER BY id LIMIT 1")
        .fetch_optional(pool)
        .await?;

    Ok(info)
}

pub async fn create(pool: &PgPool, info: &NewContactInfo) -> Result<ContactInfo> {
    let created = sqlx::query_as::<_, ContactInfo>(
        r#"
        INSERT INTO contact_info (
            phone, email, address, facebook, instagram, twitter, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&info.phone)
    .bind(&info.email)
    .bind(&info.address)
    .bind(&info.facebook)
    .bind(&info.instagram)
    .bind(&info.twitter)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Applies the provided fields to row `id` and refreshes `updated_at`.
pub async fn update(pool: &PgPool, id: i32, req: &ContactInfoUpdate) -> Result<ContactInfo> {
    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new("UPDATE contact_info SET updated_at = NOW()");

    if let Some(ref phone) = req.phone {
        query.push(", phone = ");
        query.push_bind(phone.clone());
    }

    if let Some(ref email) = req.email {
        query.push(", email = ");
        query.push_bind(email.clone());
    }

    if let Some(ref address) = req.address {
        query.push(", address = ");
        query.push_bind(address.clone());
    }

    if let Some(ref facebook) = req.facebook {
        query.push(", facebook = ");
        query.push_bind(facebook.clone());
    }

    if let Some(ref instagram) = req.instagram {
        query.push(", instagram = ");
        query.push_bind(instagram.clone());
    }

    if let Some(ref twitter) = req.twitter {
        query.push(", twitter = ");
        query.push_bind(twitter.clone());
    }

    query.push(" WHERE id = ");
    query.push_bind(id);
    query.push(" RETURNING *");

    let updated = query
        .build_query_as::<ContactInfo>()
        .fetch_one(pool)
        .await?;

    Ok(updated)
}

//! Storage behaviour against a real Postgres.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

use axum_extra::extract::{CookieJar, cookie::Cookie};
use gallery_back::{
    models::{ContactInfoUpdate, NewProduct, ProductUpdate},
    services::{catalog_service, contact_service},
    utils::{extractors::AdminSession, jwt::SessionKeys, session_cookie::SESSION_COOKIE},
};
use serde_json::json;
use sqlx::PgPool;

fn admin_session() -> AdminSession {
    let keys = SessionKeys::new("storage-test");
    let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, keys.issue().unwrap()));
    AdminSession::from_jar(&jar, &keys).unwrap()
}

fn artwork(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: "عمل فني".to_string(),
        price: 120.0,
        category: "لوحات".to_string(),
        image_url: None,
        specifications: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn contact_upsert_creates_row_with_defaults(pool: PgPool) {
    let session = admin_session();
    let update = ContactInfoUpdate {
        phone: Some("123".into()),
        ..Default::default()
    };

    let created = contact_service::update_contact_info(&pool, &session, update)
        .await
        .unwrap();

    assert_eq!(created.phone, "123");
    assert_eq!(created.email, "");
    assert_eq!(created.address, "");
    assert!(created.facebook.is_none());
    assert!(created.instagram.is_none());
    assert!(created.twitter.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn contact_upsert_only_touches_provided_fields(pool: PgPool) {
    let session = admin_session();
    let initial = ContactInfoUpdate {
        phone: Some("0550000000".into()),
        email: Some("old@gallery.dz".into()),
        address: Some("الجزائر العاصمة".into()),
        facebook: Some(Some("https://facebook.com/gallery".into())),
        ..Default::default()
    };
    let created = contact_service::update_contact_info(&pool, &session, initial)
        .await
        .unwrap();

    let update = ContactInfoUpdate {
        email: Some("a@b.com".into()),
        ..Default::default()
    };
    let updated = contact_service::update_contact_info(&pool, &session, update)
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "a@b.com");
    assert_eq!(updated.phone, created.phone);
    assert_eq!(updated.address, created.address);
    assert_eq!(updated.facebook, created.facebook);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_info")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn explicit_null_clears_a_social_link(pool: PgPool) {
    let session = admin_session();
    let initial = ContactInfoUpdate {
        twitter: Some(Some("https://x.com/gallery".into())),
        ..Default::default()
    };
    contact_service::update_contact_info(&pool, &session, initial)
        .await
        .unwrap();

    let clear: ContactInfoUpdate = serde_json::from_value(json!({ "twitter": null })).unwrap();
    let updated = contact_service::update_contact_info(&pool, &session, clear)
        .await
        .unwrap();

    assert!(updated.twitter.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn products_are_listed_newest_first(pool: PgPool) {
    let session = admin_session();
    let first = catalog_service::add_product(&pool, &session, artwork("first"))
        .await
        .unwrap();
    let second = catalog_service::add_product(&pool, &session, artwork("second"))
        .await
        .unwrap();

    let products = catalog_service::list_public_products(&pool).await;
    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(products[0].specifications, json!({}));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn partial_product_update_keeps_other_fields(pool: PgPool) {
    let session = admin_session();
    let mut new_product = artwork("vase");
    new_product.image_url = Some("https://res.cloudinary.com/demo/vase.png".into());
    let created = catalog_service::add_product(&pool, &session, new_product)
        .await
        .unwrap();

    let update = ProductUpdate {
        price: Some(99.5),
        ..Default::default()
    };
    let updated = catalog_service::update_product(&pool, &session, created.id, update)
        .await
        .unwrap();

    assert_eq!(updated.price, 99.5);
    assert_eq!(updated.name, "vase");
    assert_eq!(updated.image_url, created.image_url);
    assert_eq!(updated.created_at, created.created_at);

    let clear: ProductUpdate = serde_json::from_value(json!({ "imageUrl": null })).unwrap();
    let cleared = catalog_service::update_product(&pool, &session, created.id, clear)
        .await
        .unwrap();
    assert!(cleared.image_url.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn updating_a_missing_product_is_not_found(pool: PgPool) {
    let update = ProductUpdate {
        name: Some("ghost".into()),
        ..Default::default()
    };

    let result = catalog_service::update_product(&pool, &admin_session(), 4242, update).await;

    assert!(matches!(result, Err(gallery_back::AppError::NotFound(_))));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deleting_a_missing_product_is_a_no_op(pool: PgPool) {
    let session = admin_session();
    let kept = catalog_service::add_product(&pool, &session, artwork("kept"))
        .await
        .unwrap();

    catalog_service::delete_product(&pool, &session, kept.id + 1000)
        .await
        .unwrap();

    let products = catalog_service::list_products(&pool, &session).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, kept.id);

    catalog_service::delete_product(&pool, &session, kept.id)
        .await
        .unwrap();
    catalog_service::delete_product(&pool, &session, kept.id)
        .await
        .unwrap();
    assert!(catalog_service::list_products(&pool, &session).await.unwrap().is_empty());
}

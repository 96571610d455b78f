use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::explicit_null;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: i32,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial contact update. For the social links an explicit `null` clears the
/// stored value, while a missing field leaves it as it is.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub facebook: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub instagram: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub twitter: Option<Option<String>>,
}

/// Row inserted when no contact record exists yet.
#[derive(Debug, PartialEq, Eq)]
pub struct NewContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

impl From<ContactInfoUpdate> for NewContactInfo {
    fn from(update: ContactInfoUpdate) -> Self {
        Self {
            phone: update.phone.unwrap_or_default(),
            email: update.email.unwrap_or_default(),
            address: update.address.unwrap_or_default(),
            facebook: update.facebook.flatten(),
            instagram: update.instagram.flatten(),
            twitter: update.twitter.flatten(),
        }
    }
}

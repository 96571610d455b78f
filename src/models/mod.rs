mod auth;
mod contact;
mod product;

pub use auth::*;
pub use contact::*;
pub use product::*;

use serde::{Deserialize, Deserializer};

/// Tells an absent field (`None`) apart from an explicit `null` (`Some(None)`).
/// Pair with `#[serde(default)]`.
pub(crate) fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

use url::Url;

use crate::error::{AppError, Result};

/// Blank input clears the link; anything else must be an absolute URL.
pub fn normalize_url(field: &str, value: Option<String>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Url::parse(trimmed)
        .map_err(|_| AppError::BadRequest(format!("رابط غير صالح في الحقل {}", field)))?;

    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_become_none() {
        assert_eq!(normalize_url("imageUrl", None).unwrap(), None);
        assert_eq!(normalize_url("imageUrl", Some("  ".into())).unwrap(), None);
    }

    #[test]
    fn absolute_urls_are_kept_trimmed() {
        let url = normalize_url("facebook", Some(" https://facebook.com/gallery ".into()));
        assert_eq!(url.unwrap().as_deref(), Some("https://facebook.com/gallery"));
    }

    #[test]
    fn relative_paths_are_rejected() {
        let result = normalize_url("imageUrl", Some("images/vase.png".into()));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}

use crate::error::{AppError, Result};
use std::{env, fmt, str::FromStr};

pub const DEFAULT_CLOUDINARY_API_URL: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub session: SessionConfig,
    pub cloudinary: CloudinaryConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(AppError::ConfigError(format!(
                "Invalid APP_ENV value: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Clone)]
pub struct SessionConfig {
    pub admin_password: String,
    pub secret: String,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("admin_password", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source; `from_env` reads the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::ConfigError(format!("{} not set", name)))
        };

        let optional = |name: &str, default: &str| -> String {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            server: ServerConfig {
                host: optional("HOST", "0.0.0.0"),
                port: parse_number("PORT", &optional("PORT", "3000"))?,
                max_body_size: parse_number(
                    "MAX_BODY_SIZE",
                    &optional("MAX_BODY_SIZE", "10485760"),
                )?,
                environment: optional("APP_ENV", "development").parse()?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parse_number(
                    "DB_MAX_CONNECTIONS",
                    &optional("DB_MAX_CONNECTIONS", "5"),
                )?,
                acquire_timeout_secs: parse_number(
                    "DB_ACQUIRE_TIMEOUT_SECS",
                    &optional("DB_ACQUIRE_TIMEOUT_SECS", "5"),
                )?,
            },
            cors: CorsConfig {
                allowed_origins: required("FRONTEND_URL")?
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            session: SessionConfig {
                admin_password: required("ADMIN_PASSWORD")?,
                secret: required("SESSION_SECRET")?,
            },
            cloudinary: CloudinaryConfig {
                cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
                api_key: required("CLOUDINARY_API_KEY")?,
                api_secret: required("CLOUDINARY_API_SECRET")?,
                api_url: optional("CLOUDINARY_API_URL", DEFAULT_CLOUDINARY_API_URL)
                    .trim_end_matches('/')
                    .to_string(),
                timeout_secs: parse_number(
                    "UPLOAD_TIMEOUT_SECS",
                    &optional("UPLOAD_TIMEOUT_SECS", "30"),
                )?,
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn is_production(&self) -> bool {
        self.server.environment == Environment::Production
    }
}

fn parse_number<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_URL", "postgres://gallery@localhost/gallery"),
            ("FRONTEND_URL", "http://localhost:5173, https://gallery.example"),
            ("ADMIN_PASSWORD", "secret-password"),
            ("SESSION_SECRET", "signing-secret"),
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_API_KEY", "key"),
            ("CLOUDINARY_API_SECRET", "api-secret"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<AppConfig> {
        AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_missing() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.server.max_body_size, 10 * 1024 * 1024);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.cloudinary.timeout_secs, 30);
        assert_eq!(config.cloudinary.api_url, DEFAULT_CLOUDINARY_API_URL);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:5173", "https://gallery.example"]
        );
        assert!(!config.is_production());
    }

    #[test]
    fn missing_session_secret_is_a_config_error() {
        let mut vars = base_vars();
        vars.remove("SESSION_SECRET");

        match load(&vars) {
            Err(AppError::ConfigError(msg)) => assert!(msg.contains("SESSION_SECRET")),
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn empty_admin_password_is_rejected() {
        let mut vars = base_vars();
        vars.insert("ADMIN_PASSWORD", "");

        assert!(matches!(load(&vars), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut vars = base_vars();
        vars.insert("PORT", "not-a-port");

        assert!(matches!(load(&vars), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn production_environment_is_recognised() {
        let mut vars = base_vars();
        vars.insert("APP_ENV", "Production");

        assert!(load(&vars).unwrap().is_production());
    }

    #[test]
    fn cloudinary_api_url_can_be_overridden() {
        let mut vars = base_vars();
        vars.insert("CLOUDINARY_API_URL", "http://127.0.0.1:9000/v1_1/");

        assert_eq!(
            load(&vars).unwrap().cloudinary.api_url,
            "http://127.0.0.1:9000/v1_1"
        );
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let config = load(&base_vars()).unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("secret-password"));
        assert!(!rendered.contains("signing-secret"));
        assert!(!rendered.contains("api-secret"));
    }
}

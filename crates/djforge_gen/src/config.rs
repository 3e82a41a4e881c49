//! Generator configuration sourced from the environment.

use std::env;

/// Version pins and database defaults consumed by the container and
/// settings generators. Every value is environment-sourced with a
/// fallback, so a bare invocation works out of the box.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub django_version: String,
    pub drf_version: String,
    pub asgiref_version: String,
    pub sqlparse_version: String,
    pub docker_image: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_port: u16,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            django_version: "5.1.6".to_string(),
            drf_version: "3.15.2".to_string(),
            asgiref_version: "3.8.1".to_string(),
            sqlparse_version: "0.5.3".to_string(),
            docker_image: "python:3.12-slim".to_string(),
            db_name: "postgres".to_string(),
            db_user: "postgres".to_string(),
            db_password: "postgres".to_string(),
            db_port: 5432,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from the environment, honoring a local `.env`
    /// file if present. Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        Self {
            django_version: var_or("DJANGO_VERSION", defaults.django_version),
            drf_version: var_or("DJANGORESTFRAMEWORK_VERSION", defaults.drf_version),
            asgiref_version: var_or("ASGIREF_VERSION", defaults.asgiref_version),
            sqlparse_version: var_or("SQLPARSE_VERSION", defaults.sqlparse_version),
            docker_image: var_or("DOCKER_IMAGE", defaults.docker_image),
            db_name: var_or("DB_NAME", defaults.db_name),
            db_user: var_or("DB_USER", defaults.db_user),
            db_password: var_or("DB_PASSWORD", defaults.db_password),
            db_port: env::var("DB_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.db_port),
        }
    }
}

fn var_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

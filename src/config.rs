use std::env;
use std::path::PathBuf;

use chrono::Duration;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub data_dir: PathBuf,
    pub jwt_secret: String,
    pub jwt_expires_in: Duration,
    pub jwt_refresh_expires_in: Duration,
    pub admin_credentials: Vec<AdminCredential>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

// One entry of the injected admin allow-list. The hash is a bcrypt string,
// never a plaintext password.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub email: String,
    pub password_hash: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let app_env_str = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let app_env = match app_env_str.to_lowercase().as_str() {
            "production" => AppEnv::Production,
            "test" => AppEnv::Test,
            _ => AppEnv::Development,
        };

        // Data store config
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".into());
        let data_dir = PathBuf::from(data_dir);

        // JWT config
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::ConfigError("JWT_SECRET must be set".into()))?;

        let jwt_expires_in_str = env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| "60m".into());
        let jwt_expires_in = parse_duration(&jwt_expires_in_str)
            .map_err(|_| AppError::ConfigError("Invalid JWT_EXPIRES_IN format".into()))?;

        let jwt_refresh_expires_in_str =
            env::var("JWT_REFRESH_EXPIRES_IN").unwrap_or_else(|_| "7d".into());
        let jwt_refresh_expires_in = parse_duration(&jwt_refresh_expires_in_str)
            .map_err(|_| AppError::ConfigError("Invalid JWT_REFRESH_EXPIRES_IN format".into()))?;

        // Admin allow-list, "email:bcrypt-hash" pairs separated by commas
        let admin_credentials_str = env::var("ADMIN_CREDENTIALS").unwrap_or_default();
        let admin_credentials = parse_admin_credentials(&admin_credentials_str)?;

        Ok(Self {
            port,
            host,
            app_env,
            data_dir,
            jwt_secret,
            jwt_expires_in,
            jwt_refresh_expires_in,
            admin_credentials,
        })
    }
}

fn parse_admin_credentials(raw: &str) -> Result<Vec<AdminCredential>, AppError> {
    let mut credentials = Vec::new();

    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        // bcrypt hashes contain '$' but never ':', so the first colon splits
        // the email from the hash.
        let (email, password_hash) = entry.split_once(':').ok_or_else(|| {
            AppError::ConfigError(
                "ADMIN_CREDENTIALS entries must be email:bcrypt-hash pairs".into(),
            )
        })?;

        if email.is_empty() || password_hash.is_empty() {
            return Err(AppError::ConfigError(
                "ADMIN_CREDENTIALS entries must be email:bcrypt-hash pairs".into(),
            ));
        }

        credentials.push(AdminCredential {
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        });
    }

    Ok(credentials)
}

fn parse_duration(duration_str: &str) -> Result<Duration, &'static str> {
    let duration_str = duration_str.trim();

    if duration_str.is_empty() {
        return Err("Duration string is empty");
    }

    // Extract the number and unit parts
    let len = duration_str.len();
    let (num_part, unit_part) = duration_str.split_at(
        duration_str
            .chars()
            .position(|c| !c.is_ascii_digit())
            .unwrap_or(len),
    );

    let num = num_part.parse::<i64>().map_err(|_| "Invalid number")?;

    match unit_part {
        "s" => Ok(Duration::seconds(num)),
        "m" => Ok(Duration::minutes(num)),
        "h" => Ok(Duration::hours(num)),
        "d" => Ok(Duration::days(num)),
        _ => Err("Unknown time unit, use s, m, h, or d"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_duration_units() {
        assert_eq!(parse_duration("30s").unwrap(), Duration::seconds(30));
        assert_eq!(parse_duration("60m").unwrap(), Duration::minutes(60));
        assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("7d").unwrap(), Duration::days(7));
        assert!(parse_duration("7w").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn parses_admin_credential_pairs() {
        let parsed = parse_admin_credentials(
            "admin@recyclo.dev:$2b$12$abcdefghijklmnopqrstuv, ops@recyclo.dev:$2b$12$wxyz",
        )
        .unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].email, "admin@recyclo.dev");
        assert_eq!(parsed[0].password_hash, "$2b$12$abcdefghijklmnopqrstuv");
        assert_eq!(parsed[1].email, "ops@recyclo.dev");
    }

    #[test]
    fn empty_admin_credentials_are_allowed() {
        assert!(parse_admin_credentials("").unwrap().is_empty());
    }

    #[test]
    fn malformed_admin_credentials_are_rejected() {
        assert!(parse_admin_credentials("admin@recyclo.dev").is_err());
        assert!(parse_admin_credentials(":hash").is_err());
    }
}

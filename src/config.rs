use std::path::PathBuf;
use std::sync::LazyLock;

use axum_extra::extract::cookie::Key;
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Runtime configuration, resolved once at startup from defaults overlaid
/// with `GSU_`-prefixed environment variables (e.g. `GSU_DATABASE_URL`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    /// Secret used to derive the private-cookie key. Must be at least 32 bytes.
    pub secret_key: String,
    pub loglevel: String,
    /// Created at startup; no route currently serves from it.
    pub upload_dir: PathBuf,
    /// Drop the `Secure` attribute on cookies for plain-HTTP deployments.
    pub insecure_cookie: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            database_url: "sqlite:gsu_monitoring.sqlite".to_string(),
            secret_key: "gsu-monitoring-secret-key-change-in-production".to_string(),
            loglevel: "info".to_string(),
            upload_dir: PathBuf::from("static/uploads"),
            insecure_cookie: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("GSU_"))
            .extract()?;
        if cfg.secret_key.len() < 32 {
            return Err(figment::Error::from(
                "secret_key must be at least 32 bytes".to_string(),
            ));
        }
        Ok(cfg)
    }

    pub fn cookie_key(&self) -> Key {
        Key::derive_from(self.secret_key.as_bytes())
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("invalid GSU_* environment configuration"));

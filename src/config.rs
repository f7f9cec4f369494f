use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_STORAGE_DIR: &str = "./casta-data";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;
const DEFAULT_OTP_RESEND_SECS: i64 = 60;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub simulated_latency_ms: u64,
    pub otp_resend_secs: i64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            otp_resend_secs: DEFAULT_OTP_RESEND_SECS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            storage_dir: env::var("CASTA_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR)),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()),
            db_max_connections: get_env_parse_or(
                "CASTA_DB_MAX_CONNECTIONS",
                DEFAULT_DB_MAX_CONNECTIONS,
            )?,
            simulated_latency_ms: get_env_parse_or(
                "CASTA_SIMULATED_LATENCY_MS",
                DEFAULT_SIMULATED_LATENCY_MS,
            )?,
            otp_resend_secs: get_env_parse_or("CASTA_OTP_RESEND_SECS", DEFAULT_OTP_RESEND_SECS)?,
        })
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

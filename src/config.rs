use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_file: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
    pub validation: ValidationPolicy,
    pub expose_submissions: bool,
    pub static_dir: Option<PathBuf>,
}

/// How strictly incoming forms are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Name and 9-digit phone only.
    #[default]
    Standard,
    /// Additionally requires both fields up front and checks `email` when given.
    Strict,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("CONTACT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_HOST: {e}"))?;

        let port: u16 = env_or("CONTACT_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_PORT: {e}"))?;

        let data_file = PathBuf::from(env_or("CONTACT_DATA_FILE", "submissions.json"));
        if data_file.as_os_str().is_empty() {
            return Err("Invalid CONTACT_DATA_FILE: path is empty".to_string());
        }

        let max_body_size: usize = env_or("CONTACT_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("CONTACT_LOG_LEVEL", "info");

        let validation = if env_flag("CONTACT_STRICT_VALIDATION")? {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Standard
        };

        let expose_submissions = env_flag("CONTACT_EXPOSE_SUBMISSIONS")?;

        let static_dir = std::env::var("CONTACT_STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            host,
            port,
            data_file,
            max_body_size,
            log_level,
            validation,
            expose_submissions,
            static_dir,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str) -> Result<bool, String> {
    parse_flag(&env_or(key, "false")).ok_or_else(|| format!("Invalid {key}: expected true or false"))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

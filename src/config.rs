use std::path::PathBuf;

use crate::error::StartupError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
    pub enforce_capacity: bool,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            seed_path: None,
            enforce_capacity: false,
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment. Call `dotenvy::dotenv()`
    /// first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => v.trim().parse().map_err(|_| StartupError::InvalidEnv {
                name: "PORT",
                value: v,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_path: get("ROSTER_SEED_PATH").map(PathBuf::from),
            enforce_capacity: parse_flag("ENFORCE_CAPACITY", get("ENFORCE_CAPACITY"))?
                .unwrap_or(defaults.enforce_capacity),
            log_json: parse_flag("LOG_JSON", get("LOG_JSON"))?.unwrap_or(defaults.log_json),
        })
    }
}

fn parse_flag(name: &'static str, value: Option<String>) -> Result<Option<bool>, StartupError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(StartupError::InvalidEnv { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, StartupError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_all_settings() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("STATIC_DIR", "public"),
            ("ROSTER_SEED_PATH", "seed.json"),
            ("ENFORCE_CAPACITY", "true"),
            ("LOG_JSON", "1"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
        assert!(config.enforce_capacity);
        assert!(config.log_json);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", " "), ("ROSTER_SEED_PATH", "")]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn rejects_bad_port_and_flag() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(StartupError::InvalidEnv { name: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("ENFORCE_CAPACITY", "maybe")]),
            Err(StartupError::InvalidEnv {
                name: "ENFORCE_CAPACITY",
                ..
            })
        ));
    }
}

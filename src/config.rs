use std::env;

use crate::errors::AppError;
use crate::services::delay::Latency;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub simulate_latency: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("APP_HOST")
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("APP_PORT must be a port number, got '{}'", raw)))?,
            None => 8080,
        };

        let simulate_latency = match lookup("SIMULATE_LATENCY") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("SIMULATE_LATENCY must be true or false, got '{}'", raw))
            })?,
            None => true,
        };

        Ok(Config {
            host,
            port,
            simulate_latency,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn latency(&self) -> Latency {
        if self.simulate_latency {
            Latency::simulated()
        } else {
            Latency::disabled()
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
        assert!(config.latency().is_enabled());
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "9000"),
            ("SIMULATE_LATENCY", "off"),
        ])
        .unwrap();
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 9000));
        assert!(!config.latency().is_enabled());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(config(&[("APP_PORT", "eighty")]), Err(AppError::Config(_))));
        assert!(matches!(
            config(&[("SIMULATE_LATENCY", "sometimes")]),
            Err(AppError::Config(_))
        ));
    }
}

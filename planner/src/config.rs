//! Planner configuration
//!
//! Values are layered in this order, later layers winning:
//! 1. Built-in defaults
//! 2. JSON config file (`--config`)
//! 3. Environment, including a `.env` file if present
//! 4. Command-line flags
//!
//! ## Environment variables
//! - `ICE_PLANNER_BASE_URL`: base URL share links are built on
//! - `ICE_PLANNER_CLIPBOARD_CMD`: clipboard command line, e.g. `xclip -selection clipboard`
//! - `ICE_PLANNER_LOG_LEVEL`: trace, debug, info, warn or error

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::BudgetRates;
use url::Url;

use crate::core::edit::InputPolicy;
use crate::core::share::parse_base_url;
use crate::error::{PlannerError, PlannerResult};

pub const ENV_BASE_URL: &str = "ICE_PLANNER_BASE_URL";
pub const ENV_CLIPBOARD_CMD: &str = "ICE_PLANNER_CLIPBOARD_CMD";
pub const ENV_LOG_LEVEL: &str = "ICE_PLANNER_LOG_LEVEL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// When totals are recomputed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecomputePolicy {
    /// Only on an explicit calculate request
    #[default]
    OnDemand,
    /// After every accepted edit or share-link load
    Live,
}

impl std::str::FromStr for RecomputePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ondemand" | "on-demand" | "click" => Ok(RecomputePolicy::OnDemand),
            "live" => Ok(RecomputePolicy::Live),
            _ => Err(format!("Unknown recompute policy: {s}")),
        }
    }
}

/// Shape of the optional JSON config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub rates: Option<BudgetRates>,
    pub input_policy: Option<InputPolicy>,
    pub recompute_policy: Option<RecomputePolicy>,
    pub clipboard_command: Option<String>,
    pub logo_url: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigFile {
    pub fn read(path: &Path) -> PlannerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub jersey_cost: Option<f64>,
    pub coach_cost: Option<f64>,
    pub overhead_rate: Option<f64>,
    pub input_policy: Option<InputPolicy>,
    pub recompute_policy: Option<RecomputePolicy>,
    pub clipboard_command: Option<String>,
    pub log_level: Option<String>,
}

/// Resolved planner configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub base_url: Url,
    pub rates: BudgetRates,
    pub input_policy: InputPolicy,
    pub recompute_policy: RecomputePolicy,
    pub clipboard_command: Option<String>,
    pub logo_url: Option<Url>,
    pub log_level: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            // Constant, known to parse
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            rates: BudgetRates::default(),
            input_policy: InputPolicy::default(),
            recompute_policy: RecomputePolicy::default(),
            clipboard_command: None,
            logo_url: None,
            log_level: "info".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Resolve all layers using the process environment
    pub fn load(overrides: &ConfigOverrides) -> PlannerResult<Self> {
        // A missing .env file is fine
        let _ = dotenv::dotenv();
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve all layers with an explicit environment lookup
    pub fn resolve<F>(overrides: &ConfigOverrides, env: F) -> PlannerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = &overrides.config_path {
            config.apply_file(ConfigFile::read(path)?)?;
        }
        config.apply_env(env)?;
        config.apply_overrides(overrides)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) -> PlannerResult<()> {
        if let Some(base_url) = file.base_url {
            self.base_url = parse_base_url(&base_url)?;
        }
        if let Some(rates) = file.rates {
            self.rates = rates;
        }
        if let Some(policy) = file.input_policy {
            self.input_policy = policy;
        }
        if let Some(policy) = file.recompute_policy {
            self.recompute_policy = policy;
        }
        if file.clipboard_command.is_some() {
            self.clipboard_command = file.clipboard_command;
        }
        if let Some(logo) = file.logo_url {
            self.logo_url = Some(Url::parse(&logo).map_err(|_| PlannerError::config("logo_url", logo))?);
        }
        if let Some(level) = file.log_level {
            self.log_level = level;
        }
        Ok(())
    }

    fn apply_env<F>(&mut self, env: F) -> PlannerResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = env(ENV_BASE_URL) {
            self.base_url = parse_base_url(&base_url)?;
        }
        if let Some(command) = env(ENV_CLIPBOARD_CMD) {
            self.clipboard_command = Some(command);
        }
        if let Some(level) = env(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> PlannerResult<()> {
        if let Some(base_url) = &overrides.base_url {
            self.base_url = parse_base_url(base_url)?;
        }
        if let Some(cost) = overrides.jersey_cost {
            self.rates.jersey_cost_per_player = cost;
        }
        if let Some(cost) = overrides.coach_cost {
            self.rates.coach_cost_per_coach = cost;
        }
        if let Some(rate) = overrides.overhead_rate {
            self.rates.overhead_rate = rate;
        }
        if let Some(policy) = overrides.input_policy {
            self.input_policy = policy;
        }
        if let Some(policy) = overrides.recompute_policy {
            self.recompute_policy = policy;
        }
        if let Some(command) = &overrides.clipboard_command {
            self.clipboard_command = Some(command.clone());
        }
        if let Some(level) = &overrides.log_level {
            self.log_level = level.clone();
        }
        Ok(())
    }

    fn validate(&self) -> PlannerResult<()> {
        let rates = [
            ("jersey_cost_per_player", self.rates.jersey_cost_per_player),
            ("coach_cost_per_coach", self.rates.coach_cost_per_coach),
            ("overhead_rate", self.rates.overhead_rate),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(PlannerError::config(field, value.to_string()));
            }
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(PlannerError::config("log_level", self.log_level.clone()));
        }
        if let Some(command) = &self.clipboard_command {
            if command.trim().is_empty() {
                return Err(PlannerError::config("clipboard_command", command.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::resolve(&ConfigOverrides::default(), no_env).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.rates, BudgetRates::default());
        assert_eq!(config.input_policy, InputPolicy::Reject);
        assert_eq!(config.recompute_policy, RecomputePolicy::OnDemand);
        assert!(config.clipboard_command.is_none());
    }

    #[test]
    fn test_file_then_env_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.json");
        std::fs::write(
            &path,
            r#"{
                "base_url": "https://file.example.com",
                "rates": { "jersey_cost_per_player": 95.0 },
                "recompute_policy": "live",
                "clipboard_command": "file-copy",
                "logo_url": "https://file.example.com/logo.png"
            }"#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = HashMap::from([(ENV_CLIPBOARD_CMD, "env-copy")]);
        let overrides = ConfigOverrides {
            config_path: Some(path),
            base_url: Some("https://flag.example.com/planner".to_string()),
            ..ConfigOverrides::default()
        };

        let config = PlannerConfig::resolve(&overrides, |key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.base_url.as_str(), "https://flag.example.com/planner");
        assert_eq!(config.rates.jersey_cost_per_player, 95.0);
        assert_eq!(config.rates.coach_cost_per_coach, 3000.0);
        assert_eq!(config.recompute_policy, RecomputePolicy::Live);
        assert_eq!(config.clipboard_command.as_deref(), Some("env-copy"));
        assert_eq!(
            config.logo_url.map(|u| u.to_string()),
            Some("https://file.example.com/logo.png".to_string())
        );
    }

    #[test]
    fn test_unknown_file_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.json");
        std::fs::write(&path, r#"{ "base_ur": "typo" }"#).unwrap();

        let overrides = ConfigOverrides {
            config_path: Some(path),
            ..ConfigOverrides::default()
        };
        let result = PlannerConfig::resolve(&overrides, no_env);
        assert!(matches!(result, Err(PlannerError::JsonError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let overrides = ConfigOverrides {
            config_path: Some(PathBuf::from("/nonexistent/planner.json")),
            ..ConfigOverrides::default()
        };
        let result = PlannerConfig::resolve(&overrides, no_env);
        assert!(matches!(result, Err(PlannerError::IoError(_))));
    }

    #[test]
    fn test_invalid_values() {
        let bad_url = ConfigOverrides {
            base_url: Some("nowhere".to_string()),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            PlannerConfig::resolve(&bad_url, no_env),
            Err(PlannerError::InvalidBaseUrl { .. })
        ));

        let bad_rate = ConfigOverrides {
            overhead_rate: Some(-0.1),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            PlannerConfig::resolve(&bad_rate, no_env),
            Err(PlannerError::Config { ref field, .. }) if field == "overhead_rate"
        ));

        let bad_level = ConfigOverrides {
            log_level: Some("loud".to_string()),
            ..ConfigOverrides::default()
        };
        assert!(PlannerConfig::resolve(&bad_level, no_env).is_err());
    }

    #[test]
    fn test_recompute_policy_parsing() {
        assert_eq!("live".parse::<RecomputePolicy>().unwrap(), RecomputePolicy::Live);
        assert_eq!("on-demand".parse::<RecomputePolicy>().unwrap(), RecomputePolicy::OnDemand);
        assert!("sometimes".parse::<RecomputePolicy>().is_err());
    }
}

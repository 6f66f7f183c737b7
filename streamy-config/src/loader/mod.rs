//! Layered config loading.
//!
//! Evaluation order:
//! 1) `$STREAMY_CONFIG_PATH` (TOML or JSON file),
//! 2) `$STREAMY_CONFIG_JSON` (inline JSON),
//! 3) the first existing default file under the search root,
//! 4) built-in defaults.
//!
//! Individual overrides (`$STREAMY_API_URL`, `$STREAMY_REQUEST_TIMEOUT`,
//! `$STREAMY_SPOTLIGHT_PERIOD`, `$STREAMY_FEED_PLAN_PATH`) are applied on
//! top of whichever layer won, then the result is validated.

use anyhow::{Context, anyhow};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::constants::{DEFAULT_FILE_CANDIDATES, env as keys};
use crate::models::StreamyConfig;
use crate::util::{duration_to_ms, non_blank, parse_duration};

/// Source that produced the base configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Outcome of a load: the merged config, where it came from, and which
/// environment overrides were applied on top.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: StreamyConfig,
    pub source: ConfigSource,
    pub overrides: Vec<&'static str>,
}

impl StreamyConfig {
    /// Load from the process environment (after reading `.env`) using the
    /// working directory as search root.
    pub fn load_from_env() -> anyhow::Result<ConfigLoad> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("[Config] loaded .env from {}", path.display());
        }
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Load using an arbitrary variable lookup. Tests use this to avoid
    /// mutating the process environment.
    pub fn load_with<F>(lookup: F, search_root: &Path) -> anyhow::Result<ConfigLoad>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (mut config, source) = Self::base_layer(&lookup, search_root)?;
        let overrides = config.apply_env_overrides(&lookup)?;
        config
            .validate()
            .with_context(|| format!("invalid configuration from {source:?}"))?;

        log::info!(
            "[Config] catalog={} timeout={} spotlight_period={} source={:?} overrides={:?}",
            config.catalog.base_url,
            humantime::format_duration(config.catalog.request_timeout()),
            humantime::format_duration(config.spotlight.period()),
            source,
            overrides
        );

        Ok(ConfigLoad {
            config,
            source,
            overrides,
        })
    }

    fn base_layer<F>(
        lookup: &F,
        search_root: &Path,
    ) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = non_blank(lookup(keys::CONFIG_PATH)) {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_blank(lookup(keys::CONFIG_JSON)) {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {}", keys::CONFIG_JSON))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(search_root) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Apply single-value overrides; returns the names of the variables
    /// that took effect.
    pub fn apply_env_overrides<F>(
        &mut self,
        lookup: F,
    ) -> anyhow::Result<Vec<&'static str>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = Vec::new();

        if let Some(url) = non_blank(lookup(keys::API_URL)) {
            self.catalog.base_url = url.trim_end_matches('/').to_string();
            applied.push(keys::API_URL);
        }

        if let Some(raw) = non_blank(lookup(keys::REQUEST_TIMEOUT)) {
            let timeout = parse_duration(&raw)
                .with_context(|| format!("invalid {}", keys::REQUEST_TIMEOUT))?;
            self.catalog.request_timeout_ms = duration_to_ms(timeout);
            applied.push(keys::REQUEST_TIMEOUT);
        }

        if let Some(raw) = non_blank(lookup(keys::SPOTLIGHT_PERIOD)) {
            let period = parse_duration(&raw)
                .with_context(|| format!("invalid {}", keys::SPOTLIGHT_PERIOD))?;
            self.spotlight.period_ms = duration_to_ms(period);
            applied.push(keys::SPOTLIGHT_PERIOD);
        }

        if let Some(path) = non_blank(lookup(keys::FEED_PLAN_PATH)) {
            self.feed_plan_path = Some(PathBuf::from(path));
            applied.push(keys::FEED_PLAN_PATH);
        }

        Ok(applied)
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read streamy config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid streamy config {}", path.display())
            }),
            Some("toml") | Some("tml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid streamy config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse streamy config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid streamy config json: {err}"))
    }

    fn find_default_file(search_root: &Path) -> Option<PathBuf> {
        DEFAULT_FILE_CANDIDATES
            .iter()
            .map(|candidate| search_root.join(candidate))
            .find(|path| path.exists())
    }
}

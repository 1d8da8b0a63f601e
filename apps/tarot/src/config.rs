use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::Context;
use reading_core::{
    interpretation::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT},
    InterpretationConfig,
};
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "tarot.toml";

pub struct Settings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            api_base_url: DEFAULT_BASE_URL.into(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Settings {
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn interpretation_config(&self) -> anyhow::Result<InterpretationConfig> {
        let base_url = Url::parse(self.api_base_url.trim())
            .with_context(|| format!("invalid api_base_url '{}'", self.api_base_url))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("api_base_url must be http or https, got '{}'", base_url.scheme());
        }

        Ok(InterpretationConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        })
    }
}

pub fn load_settings(path: &Path) -> Settings {
    load_settings_from(path, |name| std::env::var(name).ok())
}

/// Defaults, then the flat settings file, then the environment. `APP__*` wins over the bare name.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_key").and_then(toml::Value::as_str) {
                    settings.api_key = non_blank(v);
                }
                if let Some(v) = file_cfg.get("model").and_then(toml::Value::as_str) {
                    set_if_non_blank(&mut settings.model, v);
                }
                if let Some(v) = file_cfg.get("api_base_url").and_then(toml::Value::as_str) {
                    set_if_non_blank(&mut settings.api_base_url, v);
                }
                if let Some(v) = file_cfg
                    .get("request_timeout_secs")
                    .and_then(toml::Value::as_integer)
                    .and_then(|v| u64::try_from(v).ok())
                {
                    settings.request_timeout_secs = v;
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "config: ignoring unreadable settings file");
            }
        }
    }

    for name in ["API_KEY", "APP__API_KEY"] {
        if let Some(v) = env(name).as_deref().and_then(non_blank) {
            settings.api_key = Some(v);
        }
    }
    if let Some(v) = env("APP__MODEL") {
        set_if_non_blank(&mut settings.model, &v);
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        set_if_non_blank(&mut settings.api_base_url, &v);
    }
    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }

    settings
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn set_if_non_blank(slot: &mut String, value: &str) {
    if let Some(value) = non_blank(value) {
        *slot = value;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "operati.toml";

pub const MIN_WINDOW_WIDTH: f32 = 980.0;
pub const MIN_WINDOW_HEIGHT: f32 = 640.0;
pub const MIN_TEXT_SCALE: f32 = 0.8;
pub const MAX_TEXT_SCALE: f32 = 1.4;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
    pub text_scale: f32,
    pub advisor_name: String,
    pub advisor_title: String,
    /// Pre-filled into the demo login form.
    pub demo_email: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 800.0,
            log_filter: "info".into(),
            text_scale: 1.0,
            advisor_name: "A. Corbin".into(),
            advisor_title: "Wealth Manager".into(),
            demo_email: "a.corbin@wealth.co".into(),
        }
    }
}

impl Settings {
    pub fn sanitized(mut self) -> Self {
        self.window_width = finite_or(self.window_width, 1280.0).max(MIN_WINDOW_WIDTH);
        self.window_height = finite_or(self.window_height, 800.0).max(MIN_WINDOW_HEIGHT);
        self.text_scale = finite_or(self.text_scale, 1.0).clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE);
        if self.log_filter.trim().is_empty() {
            self.log_filter = Settings::default().log_filter;
        }
        self
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// File, then `OPERATI__*` environment overrides. A missing file is fine; a
/// malformed one is an error.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(explicit_path, dirs::config_dir(), |key| std::env::var(key).ok())
}

/// [`load_settings`] with the user config dir and environment supplied by the caller.
pub fn load_settings_with(
    explicit_path: Option<&Path>,
    config_dir: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = match resolve_config_path(explicit_path, config_dir) {
        Some(path) => read_settings_file(&path)?,
        None => Settings::default(),
    };
    apply_env_overrides(&mut settings, lookup);
    Ok(settings.sanitized())
}

fn resolve_config_path(
    explicit_path: Option<&Path>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    config_dir
        .map(|base| base.join("operati").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    parse_settings(&raw).with_context(|| format!("failed to parse config file '{}'", path.display()))
}

pub fn parse_settings(raw: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(raw)
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("OPERATI__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("OPERATI__ADVISOR_NAME") {
        settings.advisor_name = v;
    }
    if let Some(v) = lookup("OPERATI__ADVISOR_TITLE") {
        settings.advisor_title = v;
    }
    if let Some(v) = lookup("OPERATI__DEMO_EMAIL") {
        settings.demo_email = v;
    }
    if let Some(v) = lookup("OPERATI__TEXT_SCALE") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.text_scale = parsed;
        }
    }
    if let Some(v) = lookup("OPERATI__WINDOW_WIDTH") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.window_width = parsed;
        }
    }
    if let Some(v) = lookup("OPERATI__WINDOW_HEIGHT") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.window_height = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::DermaError;
use crate::inference::policy::UNKNOWN_THRESHOLD;
use crate::inference::preprocessing::DEFAULT_INPUT_SIZE;

pub const DEFAULT_CONFIG_NAME: &str = "dermascan.toml";
pub const CONFIG_ENV_VAR: &str = "DERMASCAN_CONFIG";

/// Where the three model artifacts live
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPaths {
    pub screening: PathBuf,
    pub condition: PathBuf,
    pub diabetes: PathBuf,
}

impl Default for ModelPaths {
    fn default() -> Self {
        let models_root = PathBuf::from("models");
        Self {
            screening: models_root.join("skin_screening.rten"),
            condition: models_root.join("skin_condition.rten"),
            diabetes: models_root.join("diabetes.rten"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferenceSettings {
    /// Square side the skin images are resized to
    pub input_size: u32,
    /// Condition predictions under this confidence are reported as unknown
    pub unknown_threshold: f32,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            input_size: DEFAULT_INPUT_SIZE,
            unknown_threshold: UNKNOWN_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub models: ModelPaths,
    pub inference: InferenceSettings,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct AppConfigFile {
    models: Option<ModelsSection>,
    inference: Option<InferenceSection>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ModelsSection {
    screening: Option<String>,
    condition: Option<String>,
    diabetes: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct InferenceSection {
    input_size: Option<u32>,
    unknown_threshold: Option<f32>,
}

impl AppConfig {
    /// Resolve configuration: explicit path, then `DERMASCAN_CONFIG`, then
    /// `dermascan.toml` in the working directory, then built-in defaults.
    /// Only the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path)?
                .with_context(|| format!("config file not found: {}", path.display()));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            return Self::from_path(&path)?.with_context(|| {
                format!("{} points to a missing file: {}", CONFIG_ENV_VAR, path.display())
            });
        }
        match Self::from_path(Path::new(DEFAULT_CONFIG_NAME))? {
            Some(cfg) => Ok(cfg),
            None => {
                log::debug!("No {} found, using defaults", DEFAULT_CONFIG_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Read a config file; `Ok(None)` when it does not exist
    pub fn from_path(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let base_dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let cfg = Self::parse(&raw, base_dir)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(Some(cfg))
    }

    /// Parse TOML text; relative model paths stay relative to the working directory
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        Self::parse(raw, None)
    }

    fn parse(raw: &str, base_dir: Option<&Path>) -> anyhow::Result<Self> {
        let file: AppConfigFile = toml::from_str(raw)?;
        let cfg = Self::from_file(file, base_dir);
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: AppConfigFile, base_dir: Option<&Path>) -> Self {
        let defaults = ModelPaths::default();
        let models = file.models.unwrap_or_default();
        let resolve = |raw: Option<String>, fallback: PathBuf| {
            raw.map(|v| resolve_path(&v, base_dir)).unwrap_or(fallback)
        };

        let inference = file.inference.unwrap_or_default();
        let default_settings = InferenceSettings::default();

        AppConfig {
            models: ModelPaths {
                screening: resolve(models.screening, defaults.screening),
                condition: resolve(models.condition, defaults.condition),
                diabetes: resolve(models.diabetes, defaults.diabetes),
            },
            inference: InferenceSettings {
                input_size: inference.input_size.unwrap_or(default_settings.input_size),
                unknown_threshold: inference
                    .unknown_threshold
                    .unwrap_or(default_settings.unknown_threshold),
            },
        }
    }

    pub fn validate(&self) -> Result<(), DermaError> {
        if self.inference.input_size == 0 {
            return Err(DermaError::Config(
                "inference.input_size must be positive".to_string(),
            ));
        }
        let threshold = self.inference.unknown_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(DermaError::Config(format!(
                "inference.unknown_threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        for (key, path) in [
            ("models.screening", &self.models.screening),
            ("models.condition", &self.models.condition),
            ("models.diabetes", &self.models.diabetes),
        ] {
            if path.as_os_str().is_empty() {
                return Err(DermaError::Config(format!("{} is empty", key)));
            }
        }
        Ok(())
    }
}

fn resolve_path(raw: &str, base_dir: Option<&Path>) -> PathBuf {
    let expanded = match raw.strip_prefix("~/") {
        Some(stripped) => match std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
            Ok(home) => PathBuf::from(home).join(stripped),
            Err(_) => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    };
    match base_dir {
        Some(base) if expanded.is_relative() => base.join(expanded),
        _ => expanded,
    }
}

//! Configuration Management

use crate::analysis::features::{FeatureExtractor, FeatureLayout};
use crate::enrollment::{EnrollmentPolicy, EnrollmentSession};
use crate::profile::ScoringSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound on stroke slots a layout may declare
pub const MAX_STROKE_SLOTS: usize = 64;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Feature vector layout
    #[serde(default)]
    pub features: FeatureLayout,
    /// Scoring strictness
    #[serde(default)]
    pub scoring: ScoringSettings,
    /// Training session policy
    #[serde(default)]
    pub enrollment: EnrollmentPolicy,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.features.stroke_slots == 0 || self.features.stroke_slots > MAX_STROKE_SLOTS {
            return Err(crate::Error::Config(format!(
                "stroke_slots must be in [1, {}], got {}",
                MAX_STROKE_SLOTS, self.features.stroke_slots
            )));
        }
        self.scoring.validate()?;
        self.enrollment.validate()?;
        Ok(())
    }

    /// Extractor for the configured layout
    pub fn extractor(&self) -> FeatureExtractor {
        FeatureExtractor::with_layout(self.features)
    }

    /// Fresh enrollment session using this configuration
    pub fn enrollment_session(&self) -> EnrollmentSession {
        EnrollmentSession::new(self.enrollment, self.extractor(), self.scoring)
    }

    /// Load config from file
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<(), crate::Error> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".doodle_lock").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

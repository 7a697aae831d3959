//! Configuration structures for extraction and analysis.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::extract::RecognizerId;

/// Main configuration for the stmt pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StmtConfig {
    /// Layout recognition configuration.
    pub extraction: ExtractionConfig,

    /// Aggregation configuration.
    pub analysis: AnalysisConfig,
}

/// Layout recognition configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Recognizers removed from the priority ladder. The remaining ones keep
    /// their relative order.
    pub disabled: Vec<RecognizerId>,
}

impl ExtractionConfig {
    pub fn is_enabled(&self, id: RecognizerId) -> bool {
        !self.disabled.contains(&id)
    }
}

/// Aggregation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Assign keyword categories before computing category totals.
    pub categorize: bool,

    /// Z-score above which a debit is reported as an anomaly.
    pub anomaly_threshold: f64,

    /// Minimum number of debits before anomaly detection runs.
    pub min_anomaly_sample: usize,

    /// Number of merchants listed in the spending breakdown.
    pub top_merchants: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            categorize: true,
            anomaly_threshold: 2.0,
            min_anomaly_sample: 3,
            top_merchants: 10,
        }
    }
}

impl AnalysisConfig {
    /// Check thresholds are usable.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !self.anomaly_threshold.is_finite() || self.anomaly_threshold <= 0.0 {
            return Err(ConfigError::AnomalyThreshold(self.anomaly_threshold));
        }
        if self.min_anomaly_sample < 2 {
            return Err(ConfigError::AnomalySample(self.min_anomaly_sample));
        }
        Ok(())
    }
}

impl StmtConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.analysis.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = StmtConfig::default();
        assert!(config.extraction.disabled.is_empty());
        assert!(config.analysis.categorize);
        assert_eq!(config.analysis.anomaly_threshold, 2.0);
        assert_eq!(config.analysis.min_anomaly_sample, 3);
        assert_eq!(config.analysis.top_merchants, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: StmtConfig =
            serde_json::from_str(r#"{"extraction":{"disabled":["legacy"]}}"#).unwrap();

        assert_eq!(config.extraction.disabled, vec![RecognizerId::Legacy]);
        assert!(!config.extraction.is_enabled(RecognizerId::Legacy));
        assert!(config.extraction.is_enabled(RecognizerId::DualDate));
        assert_eq!(config.analysis, AnalysisConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = StmtConfig::default();
        config.analysis.anomaly_threshold = 3.0;
        config.extraction.disabled.push(RecognizerId::Brokerage);
        config.save(&path).unwrap();

        let loaded = StmtConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let mut analysis = AnalysisConfig::default();
        analysis.anomaly_threshold = 0.0;
        assert_eq!(analysis.validate(), Err(ConfigError::AnomalyThreshold(0.0)));

        analysis.anomaly_threshold = 2.0;
        analysis.min_anomaly_sample = 1;
        assert_eq!(analysis.validate(), Err(ConfigError::AnomalySample(1)));
    }

    #[test]
    fn test_from_file_surfaces_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"analysis":{"anomaly_threshold":-1.0}}"#).unwrap();

        let err = StmtConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, crate::StmtError::Config(ConfigError::AnomalyThreshold(_))));
    }
}

//! Layout engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Scale factors of the timeline canvas.
///
/// Missing fields deserialize to their defaults, so a host can persist a
/// partial configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas units per credit, spread over the course's duration.
    pub credit_scale: f64,
    /// Canvas units per period (band height).
    pub period_height: f64,
    /// Gap left past an obstacle's right edge when a rectangle is displaced.
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            credit_scale: Self::DEFAULT_CREDIT_SCALE,
            period_height: Self::DEFAULT_PERIOD_HEIGHT,
            spacing: Self::DEFAULT_SPACING,
        }
    }
}

impl LayoutConfig {
    /// Default canvas units per credit.
    pub const DEFAULT_CREDIT_SCALE: f64 = 25.0;
    /// Default band height.
    pub const DEFAULT_PERIOD_HEIGHT: f64 = 50.0;
    /// Default displacement gap.
    pub const DEFAULT_SPACING: f64 = 1.0;

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credit scale.
    pub fn with_credit_scale(mut self, credit_scale: f64) -> Self {
        self.credit_scale = credit_scale;
        self
    }

    /// Sets the band height.
    pub fn with_period_height(mut self, period_height: f64) -> Self {
        self.period_height = period_height;
        self
    }

    /// Sets the displacement gap.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Checks that the configuration yields finite, non-degenerate geometry.
    pub fn validate(&self) -> Result<()> {
        if !self.credit_scale.is_finite() || self.credit_scale <= 0.0 {
            return Err(invalid(format!(
                "credit_scale must be positive and finite, got {}",
                self.credit_scale
            )));
        }
        if !self.period_height.is_finite() || self.period_height <= 0.0 {
            return Err(invalid(format!(
                "period_height must be positive and finite, got {}",
                self.period_height
            )));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(invalid(format!(
                "spacing must be non-negative and finite, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> LayoutError {
    LayoutError::InvalidConfig { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::new();
        assert_eq!(config.credit_scale, 25.0);
        assert_eq!(config.period_height, 50.0);
        assert_eq!(config.spacing, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = LayoutConfig::new()
            .with_credit_scale(20.0)
            .with_period_height(40.0)
            .with_spacing(0.0);
        assert_eq!(config.credit_scale, 20.0);
        assert_eq!(config.period_height, 40.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_scales() {
        assert!(LayoutConfig::new().with_credit_scale(0.0).validate().is_err());
        assert!(LayoutConfig::new()
            .with_period_height(f64::NAN)
            .validate()
            .is_err());
        assert!(LayoutConfig::new().with_spacing(-1.0).validate().is_err());
    }

    #[test]
    fn test_partial_deserialize() {
        let config: LayoutConfig = serde_json::from_str(r#"{"credit_scale": 20.0}"#).unwrap();
        assert_eq!(config.credit_scale, 20.0);
        assert_eq!(config.period_height, 50.0);
        assert_eq!(config.spacing, 1.0);
    }
}

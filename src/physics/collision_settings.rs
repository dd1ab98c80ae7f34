//! Tuning parameters for the iterative and analytic collision solvers.

use serde::{Deserialize, Serialize};

use crate::error::{CollisionError, CollisionResult};

/// Configuration shared by every collision query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Iteration cap for both the portal discovery and the portal refinement loops.
    pub max_iterations: u32,

    /// Refinement stops once the portal moves less than this along its normal.
    pub portal_tolerance: f32,

    /// Extra distance a query is pushed off a face before its edges and corners are tested.
    pub separation_epsilon: f32,

    /// Offset applied to the initial interior point when both shapes share a center.
    pub center_perturbation: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            portal_tolerance: 1e-4,
            separation_epsilon: 1e-4,
            center_perturbation: 1e-5,
        }
    }
}

impl CollisionSettings {
    /// Creates settings favouring speed over accuracy (fewer iterations, looser tolerance).
    pub fn fast() -> Self {
        Self {
            max_iterations: 8,
            portal_tolerance: 1e-3,
            ..Default::default()
        }
    }

    /// Creates settings for accurate depth estimates (more iterations, tighter tolerance).
    pub fn precise() -> Self {
        Self {
            max_iterations: 64,
            portal_tolerance: 1e-6,
            ..Default::default()
        }
    }

    /// Checks that every parameter is within its usable range.
    pub fn validate(&self) -> CollisionResult<()> {
        if self.max_iterations == 0 {
            return Err(CollisionError::InvalidSettings(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        let positive = [
            ("portal_tolerance", self.portal_tolerance),
            ("separation_epsilon", self.separation_epsilon),
            ("center_perturbation", self.center_perturbation),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CollisionError::InvalidSettings(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> CollisionResult<Self> {
        let settings: Self = toml::from_str(text).map_err(|e| CollisionError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings to TOML text.
    pub fn to_toml_string(&self) -> CollisionResult<String> {
        toml::to_string_pretty(self).map_err(|e| CollisionError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = CollisionSettings::default();
        assert_eq!(settings.max_iterations, 20);
        assert!(settings.validate().is_ok());
        assert!(CollisionSettings::fast().validate().is_ok());
        assert!(CollisionSettings::precise().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let settings = CollisionSettings::from_toml_str("max_iterations = 40\n").unwrap();
        assert_eq!(settings.max_iterations, 40);
        assert_eq!(settings.portal_tolerance, CollisionSettings::default().portal_tolerance);
    }

    #[test]
    fn toml_round_trip_preserves_values() {
        let text = CollisionSettings::precise().to_toml_string().unwrap();
        assert_eq!(CollisionSettings::from_toml_str(&text), Ok(CollisionSettings::precise()));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            CollisionSettings::from_toml_str("max_iterations = 0"),
            Err(CollisionError::InvalidSettings(_))
        ));
        assert!(matches!(
            CollisionSettings::from_toml_str("portal_tolerance = -1.0"),
            Err(CollisionError::InvalidSettings(_))
        ));
        assert!(matches!(
            CollisionSettings::from_toml_str("max_iterations = \"many\""),
            Err(CollisionError::Parse(_))
        ));
    }
}

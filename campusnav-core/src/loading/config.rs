use serde::{Deserialize, Serialize};

use crate::Error;

/// Tolerances used while building the walkway network
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Endpoints closer than this resolve to the same junction
    pub merge_epsilon: f64,
    /// Segments shorter than this are dropped as degenerate
    pub min_segment_length: f64,
    /// Grid size used to derive junction keys from coordinates
    pub key_precision: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            merge_epsilon: 3.0,
            min_segment_length: 1e-6,
            key_precision: 1.0,
        }
    }
}

impl NetworkConfig {
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or not finite, or if the
    /// key precision is zero.
    pub fn validate(&self) -> Result<(), Error> {
        let tolerances = [
            ("merge_epsilon", self.merge_epsilon),
            ("min_segment_length", self.min_segment_length),
            ("key_precision", self.key_precision),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if self.key_precision == 0.0 {
            return Err(Error::InvalidConfig(
                "key_precision must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        assert!(NetworkConfig::default().validate().is_ok());
    }

    #[rstest]
    #[case(NetworkConfig { merge_epsilon: -1.0, ..Default::default() })]
    #[case(NetworkConfig { min_segment_length: f64::NAN, ..Default::default() })]
    #[case(NetworkConfig { key_precision: 0.0, ..Default::default() })]
    fn rejects_bad_tolerances(#[case] config: NetworkConfig) {
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: NetworkConfig = serde_json::from_str(r#"{"merge_epsilon": 5.0}"#).unwrap();
        assert_eq!(config.merge_epsilon, 5.0);
        assert_eq!(config.key_precision, 1.0);
    }
}

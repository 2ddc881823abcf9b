//! Prediction inputs.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::dataset::{HousingRecord, PREDICTOR_COLUMNS};
use crate::error::Error;
use crate::prelude::*;

/// One set of predictor values, constructed per user interaction, used for
/// a single prediction and discarded.
///
/// The fields mirror [`PREDICTOR_COLUMNS`] exactly: deserialization rejects
/// anything outside the trained schema.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureVector {
    pub living_area: f64,
    pub basement_area: f64,
    pub overall_quality: f64,
    pub year_built: f64,
    pub garage_capacity: f64,
}

impl FeatureVector {
    /// Builds the vector from a name-to-value map, requiring exactly the
    /// five predictor names. An unknown or missing name is a schema
    /// mismatch, never defaulted or ignored.
    pub fn from_map(map: &Map<String, Value>) -> StdResult<Self, Error> {
        if let Some(unknown) = map
            .keys()
            .find(|key| !PREDICTOR_COLUMNS.contains(&key.as_str()))
        {
            return Err(Error::Schema {
                reason: format!("unexpected feature `{unknown}`"),
            });
        }
        let feature = |name: &str| {
            map.get(name)
                .ok_or_else(|| Error::Schema {
                    reason: format!("feature `{name}` is missing"),
                })?
                .as_f64()
                .ok_or_else(|| Error::Schema {
                    reason: format!("feature `{name}` is not a number"),
                })
        };
        Ok(Self {
            living_area: feature("living_area")?,
            basement_area: feature("basement_area")?,
            overall_quality: feature("overall_quality")?,
            year_built: feature("year_built")?,
            garage_capacity: feature("garage_capacity")?,
        })
    }

    /// Predictor values in training order.
    #[must_use]
    pub fn to_array(self) -> [f64; 5] {
        [
            self.living_area,
            self.basement_area,
            self.overall_quality,
            self.year_built,
            self.garage_capacity,
        ]
    }
}

impl From<&HousingRecord> for FeatureVector {
    fn from(record: &HousingRecord) -> Self {
        Self {
            living_area: record.living_area,
            basement_area: record.basement_area,
            overall_quality: record.overall_quality.into(),
            year_built: record.year_built.into(),
            garage_capacity: record.garage_capacity.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn from_map_ok() -> Result {
        let features = FeatureVector::from_map(&map(json!({
            "living_area": 1500,
            "basement_area": 800,
            "overall_quality": 5,
            "year_built": 2000,
            "garage_capacity": 2,
        })))?;
        assert_eq!(features.to_array(), [1500.0, 800.0, 5.0, 2000.0, 2.0]);
        Ok(())
    }

    #[test]
    fn missing_feature_fails() {
        let error = FeatureVector::from_map(&map(json!({
            "living_area": 1500,
            "basement_area": 800,
            "overall_quality": 5,
            "year_built": 2000,
        })))
        .unwrap_err();
        assert!(matches!(error, Error::Schema { .. }));
    }

    #[test]
    fn unknown_feature_fails() {
        let error = FeatureVector::from_map(&map(json!({
            "living_area": 1500,
            "basement_area": 800,
            "overall_quality": 5,
            "year_built": 2000,
            "garage_capacity": 2,
            "pool_area": 600,
        })))
        .unwrap_err();
        assert!(matches!(error, Error::Schema { .. }));
    }
}

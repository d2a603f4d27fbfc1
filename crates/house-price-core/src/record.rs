//! House record and prediction result value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Yes/no answer used by the amenity fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const VALUES: &'static [&'static str] = &["yes", "no"];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Furnishing state of the property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnishingStatus {
    Furnished,
    SemiFurnished,
    Unfurnished,
}

impl FurnishingStatus {
    pub const VALUES: &'static [&'static str] = &["furnished", "semi-furnished", "unfurnished"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FurnishingStatus::Furnished => "furnished",
            FurnishingStatus::SemiFurnished => "semi-furnished",
            FurnishingStatus::Unfurnished => "unfurnished",
        }
    }
}

impl fmt::Display for FurnishingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated attributes of a property, as sent to the prediction service
///
/// Only [`crate::validate_house_record`] should build one from untrusted
/// input; the fields are public so presets and tests can construct records
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    /// Floor area, strictly positive
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub stories: f64,
    pub mainroad: YesNo,
    pub guestroom: YesNo,
    pub basement: YesNo,
    pub hotwaterheating: YesNo,
    pub airconditioning: YesNo,
    pub parking: u32,
    /// Located in a preferred area
    pub prefarea: YesNo,
    pub furnishingstatus: FurnishingStatus,
}

impl Default for HouseRecord {
    fn default() -> Self {
        Self {
            area: 1000.0,
            bedrooms: 2,
            bathrooms: 1.0,
            stories: 1.0,
            mainroad: YesNo::Yes,
            guestroom: YesNo::No,
            basement: YesNo::No,
            hotwaterheating: YesNo::No,
            airconditioning: YesNo::No,
            parking: 1,
            prefarea: YesNo::No,
            furnishingstatus: FurnishingStatus::Unfurnished,
        }
    }
}

/// Price estimate returned by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_serialization() {
        assert_eq!(serde_json::to_value(YesNo::Yes).unwrap(), serde_json::json!("yes"));
        assert_eq!(
            serde_json::to_value(FurnishingStatus::SemiFurnished).unwrap(),
            serde_json::json!("semi-furnished")
        );
    }

    #[test]
    fn test_record_serializes_all_fields() {
        let json = serde_json::to_value(HouseRecord::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 12);
        assert_eq!(json["bedrooms"], serde_json::json!(2));
        assert_eq!(json["furnishingstatus"], serde_json::json!("unfurnished"));
    }

    #[test]
    fn test_prediction_result_deserialize() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"predicted_price": 4200000}"#).unwrap();
        assert_eq!(result.predicted_price, 4_200_000.0);
    }
}

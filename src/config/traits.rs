use crate::error::SdfEvoError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), SdfEvoError>;
    fn to_manifest(&self) -> ConfigManifest;
}

/// Configuration manifest for tuning front-ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}

impl FieldManifest {
    pub(crate) fn float(name: &str, default: f64, min: f64, max: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: "float".to_string(),
            default: serde_json::json!(default),
            min: Some(min),
            max: Some(max),
            description: description.to_string(),
        }
    }

    pub(crate) fn integer(name: &str, default: u64, min: f64, max: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: "integer".to_string(),
            default: serde_json::json!(default),
            min: Some(min),
            max: Some(max),
            description: description.to_string(),
        }
    }
}

/// Checks that a probability lies in [0, 1]
pub(crate) fn check_probability(name: &str, value: f64) -> Result<(), SdfEvoError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SdfEvoError::Configuration(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}

use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SdfEvoError;
use serde::{Deserialize, Serialize};

/// Ranges used when drawing a fresh random primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub scale_range: (f64, f64),
    pub translate_range: (f64, f64),
    /// Inclusive vertex count range for random polygons
    pub polygon_vertices: (usize, usize),
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            scale_range: (0.15, 0.6),
            translate_range: (-1.0, 1.0),
            polygon_vertices: (3, 6),
        }
    }
}

impl ConfigSection for SamplingConfig {
    fn section_name() -> &'static str {
        "sampling"
    }

    fn validate(&self) -> Result<(), SdfEvoError> {
        let (lo, hi) = self.scale_range;
        if !(lo > 0.0 && lo <= hi && hi.is_finite()) {
            return Err(SdfEvoError::Configuration(format!(
                "Scale range must be positive and ordered, got ({}, {})",
                lo, hi
            )));
        }
        let (lo, hi) = self.translate_range;
        if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
            return Err(SdfEvoError::Configuration(format!(
                "Translate range must be finite and ordered, got ({}, {})",
                lo, hi
            )));
        }
        let (lo, hi) = self.polygon_vertices;
        if lo < 3 || lo > hi {
            return Err(SdfEvoError::Configuration(format!(
                "Polygon vertex range must start at 3 or more and be ordered, got ({}, {})",
                lo, hi
            )));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Sampling".to_string(),
            fields: vec![
                FieldManifest::float(
                    "scale_min",
                    self.scale_range.0,
                    0.01,
                    2.0,
                    "Smallest sampled scale",
                ),
                FieldManifest::float(
                    "scale_max",
                    self.scale_range.1,
                    0.01,
                    2.0,
                    "Largest sampled scale",
                ),
                FieldManifest::integer(
                    "polygon_vertices_max",
                    self.polygon_vertices.1 as u64,
                    3.0,
                    16.0,
                    "Most vertices of a random polygon",
                ),
            ],
        }
    }
}

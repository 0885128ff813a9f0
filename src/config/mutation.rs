use super::traits::{check_probability, ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SdfEvoError;
use serde::{Deserialize, Serialize};

/// Upper bound of the sigma sliders
const MAX_SIGMA: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Per leaf: perturb transform and color
    pub param_mutation_rate: f64,
    /// Per leaf: grow into an operator node with a fresh primitive
    pub structural_add_rate: f64,
    /// Per operator node: collapse to one child
    pub structural_remove_rate: f64,
    /// Per operator node: switch to another operator
    pub operator_mutation_rate: f64,
    pub translate_sigma: f64,
    pub rotate_sigma: f64,
    pub scale_sigma: f64,
    pub color_sigma: f64,
    /// Structural growth never makes the tree deeper than this
    pub max_depth: usize,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            param_mutation_rate: 0.3,
            structural_add_rate: 0.05,
            structural_remove_rate: 0.05,
            operator_mutation_rate: 0.1,
            translate_sigma: 0.1,
            rotate_sigma: 0.2,
            scale_sigma: 0.1,
            color_sigma: 0.1,
            max_depth: 12,
        }
    }
}

impl MutationConfig {
    /// Every rate set to zero: mutation becomes the identity
    pub fn disabled() -> Self {
        Self {
            param_mutation_rate: 0.0,
            structural_add_rate: 0.0,
            structural_remove_rate: 0.0,
            operator_mutation_rate: 0.0,
            ..Self::default()
        }
    }
}

impl ConfigSection for MutationConfig {
    fn section_name() -> &'static str {
        "mutation"
    }

    fn validate(&self) -> Result<(), SdfEvoError> {
        check_probability("Parameter mutation rate", self.param_mutation_rate)?;
        check_probability("Structural add rate", self.structural_add_rate)?;
        check_probability("Structural remove rate", self.structural_remove_rate)?;
        check_probability("Operator mutation rate", self.operator_mutation_rate)?;

        let sigmas = [
            ("Translate sigma", self.translate_sigma),
            ("Rotate sigma", self.rotate_sigma),
            ("Scale sigma", self.scale_sigma),
            ("Color sigma", self.color_sigma),
        ];
        for (name, sigma) in sigmas {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(SdfEvoError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    name, sigma
                )));
            }
        }

        if self.max_depth == 0 {
            return Err(SdfEvoError::Configuration(
                "Max depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Mutation".to_string(),
            fields: vec![
                FieldManifest::float(
                    "param_mutation_rate",
                    self.param_mutation_rate,
                    0.0,
                    1.0,
                    "Gene mutation probability",
                ),
                FieldManifest::float(
                    "structural_add_rate",
                    self.structural_add_rate,
                    0.0,
                    1.0,
                    "Add primitive probability",
                ),
                FieldManifest::float(
                    "structural_remove_rate",
                    self.structural_remove_rate,
                    0.0,
                    1.0,
                    "Remove primitive probability",
                ),
                FieldManifest::float(
                    "operator_mutation_rate",
                    self.operator_mutation_rate,
                    0.0,
                    1.0,
                    "Operator mutation probability",
                ),
                FieldManifest::float(
                    "translate_sigma",
                    self.translate_sigma,
                    0.0,
                    MAX_SIGMA,
                    "Translation noise",
                ),
                FieldManifest::float(
                    "rotate_sigma",
                    self.rotate_sigma,
                    0.0,
                    MAX_SIGMA,
                    "Rotation noise (radians)",
                ),
                FieldManifest::float(
                    "scale_sigma",
                    self.scale_sigma,
                    0.0,
                    MAX_SIGMA,
                    "Scale noise",
                ),
                FieldManifest::float(
                    "color_sigma",
                    self.color_sigma,
                    0.0,
                    MAX_SIGMA,
                    "Color channel noise",
                ),
            ],
        }
    }
}

use super::traits::{check_probability, ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SdfEvoError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    /// Primitives per genome in the initial generation
    pub num_genes: usize,
    pub seed: Option<u64>,
    /// Carry selected individuals into the next generation unchanged
    pub elitism: bool,
    pub crossover_rate: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 16,
            num_genes: 4,
            seed: None,
            elitism: false,
            crossover_rate: 1.0,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), SdfEvoError> {
        if self.population_size == 0 {
            return Err(SdfEvoError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if self.num_genes == 0 {
            return Err(SdfEvoError::Configuration(
                "Genomes need at least one primitive".to_string(),
            ));
        }
        check_probability("Crossover rate", self.crossover_rate)
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest::integer(
                    "population_size",
                    self.population_size as u64,
                    1.0,
                    1024.0,
                    "Number of individuals per generation",
                ),
                FieldManifest::integer(
                    "num_genes",
                    self.num_genes as u64,
                    1.0,
                    100.0,
                    "Primitives per genome",
                ),
                FieldManifest::float(
                    "crossover_rate",
                    self.crossover_rate,
                    0.0,
                    1.0,
                    "Probability of grafting between two distinct parents",
                ),
            ],
        }
    }
}

//! Evolution core for 2D artwork built from signed distance functions.
//!
//! A genome is a binary tree: leaves are placed, colored primitives (disk,
//! square, polygon) and internal nodes are boolean operators. The crate
//! evaluates genomes as (distance, inside, color) fields and breeds new
//! generations from parents chosen by an outside judge.

pub mod config;
pub mod engines;
pub mod error;
pub mod genome;
pub mod geometry;
pub mod types;

pub use config::{AppConfig, ConfigManager, EvolutionConfig, MutationConfig, SamplingConfig};
pub use engines::evaluation::{Sample, ShapeEvaluator};
pub use engines::generation::{
    crossover, initialize_population, mutate, step, Individual, Population, PopulationStepper,
};
pub use error::{Result, SdfEvoError};
pub use geometry::{compose, Affine2, AffineTransform};
pub use genome::{Composition, Genome, GenomeNode, PrimitiveGene};
pub use types::{BoolOp, Point, Rgb, ShapeKind};

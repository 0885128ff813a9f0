pub mod evaluator;

pub use evaluator::{Sample, ShapeEvaluator};

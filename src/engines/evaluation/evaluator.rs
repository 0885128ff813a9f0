use crate::genome::{Genome, GenomeNode};
use crate::types::{BoolOp, Point, Rgb};
use rayon::prelude::*;

/// Result of evaluating a genome at one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub distance: f64,
    pub inside: bool,
    pub color: Rgb,
}

impl Sample {
    fn leaf(distance: f64, color: Rgb) -> Self {
        Self {
            distance,
            inside: distance <= 0.0,
            color,
        }
    }
}

/// Turns a genome into a (distance, inside, color) field.
///
/// Membership of composite nodes is derived from the children's membership,
/// not re-read from the combined distance. Combined distances bound the true
/// distance but are not exact Euclidean fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeEvaluator;

impl ShapeEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn eval(&self, genome: &Genome, point: Point) -> Sample {
        self.eval_node(genome.root(), point)
    }

    pub fn eval_node(&self, node: &GenomeNode, point: Point) -> Sample {
        match node {
            GenomeNode::Leaf(gene) => Sample::leaf(gene.distance(point), gene.resolved_color()),
            GenomeNode::Op { op, left, right } => {
                let a = self.eval_node(left, point);
                let b = self.eval_node(right, point);
                combine(*op, a, b)
            }
        }
    }

    pub fn contains(&self, genome: &Genome, point: Point) -> bool {
        self.eval(genome, point).inside
    }

    /// Evaluates many points at once, spread over the rayon pool
    pub fn eval_points(&self, genome: &Genome, points: &[Point]) -> Vec<Sample> {
        points.par_iter().map(|&p| self.eval(genome, p)).collect()
    }
}

fn combine(op: BoolOp, a: Sample, b: Sample) -> Sample {
    match op {
        BoolOp::Union => {
            let color = match (a.inside, b.inside) {
                (true, true) => a.color.screen(b.color),
                (true, false) => a.color,
                (false, true) => b.color,
                // cosmetic only: nearest operand
                (false, false) if b.distance < a.distance => b.color,
                (false, false) => a.color,
            };
            Sample {
                distance: a.distance.min(b.distance),
                inside: a.inside || b.inside,
                color,
            }
        }
        BoolOp::Intersection => Sample {
            distance: a.distance.max(b.distance),
            inside: a.inside && b.inside,
            color: a.color.multiply(b.color),
        },
        BoolOp::Difference => Sample {
            distance: a.distance.max(-b.distance),
            inside: a.inside && !b.inside,
            color: a.color.subtract(b.color),
        },
    }
}

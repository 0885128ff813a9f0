use super::operators::random_operator;
use crate::config::{MutationConfig, SamplingConfig};
use crate::genome::{Genome, GenomeNode, PrimitiveGene};
use crate::geometry::AffineTransform;
use crate::types::Rgb;
use rand::Rng;
use rand_distr::StandardNormal;
use std::sync::Arc;

/// Returns a mutated copy of `genome`.
///
/// Every node is visited once, children before their parent. Leaves may get
/// their parameters perturbed and may grow into an operator node; operator
/// nodes may switch operator and may collapse onto one child. Subtrees that
/// come out unchanged are shared with the input.
pub fn mutate<R: Rng + ?Sized>(
    genome: &Genome,
    rng: &mut R,
    config: &MutationConfig,
    sampling: &SamplingConfig,
) -> Genome {
    let root = mutate_node(genome.root(), 1, rng, config, sampling);
    Genome::from_root(root)
}

fn mutate_node<R: Rng + ?Sized>(
    node: &Arc<GenomeNode>,
    depth: usize,
    rng: &mut R,
    config: &MutationConfig,
    sampling: &SamplingConfig,
) -> Arc<GenomeNode> {
    match node.as_ref() {
        GenomeNode::Leaf(gene) => {
            let mut current = Arc::clone(node);

            if rng.gen::<f64>() < config.param_mutation_rate {
                current = Arc::new(GenomeNode::Leaf(perturb_gene(gene, rng, config)));
            }

            if rng.gen::<f64>() < config.structural_add_rate && depth < config.max_depth {
                let op = random_operator(rng);
                let fresh = PrimitiveGene::random(rng, sampling);
                log::trace!("Growing leaf at depth {} into {:?} node", depth, op);
                current = GenomeNode::op(op, current, Arc::new(GenomeNode::Leaf(fresh)));
            }

            current
        }
        GenomeNode::Op { op, left, right } => {
            let new_left = mutate_node(left, depth + 1, rng, config, sampling);
            let new_right = mutate_node(right, depth + 1, rng, config, sampling);

            let mut new_op = *op;
            if rng.gen::<f64>() < config.operator_mutation_rate {
                new_op = op.others()[rng.gen_range(0..2)];
            }

            // either child holds at least one leaf, so collapsing never empties the genome
            if rng.gen::<f64>() < config.structural_remove_rate {
                log::trace!("Collapsing {:?} node at depth {}", new_op, depth);
                return if rng.gen_bool(0.5) { new_left } else { new_right };
            }

            if new_op == *op && Arc::ptr_eq(&new_left, left) && Arc::ptr_eq(&new_right, right) {
                Arc::clone(node)
            } else {
                GenomeNode::op(new_op, new_left, new_right)
            }
        }
    }
}

fn gaussian<R: Rng + ?Sized>(rng: &mut R, sigma: f64) -> f64 {
    let n: f64 = rng.sample(StandardNormal);
    sigma * n
}

/// Additive Gaussian noise on every transform field and color channel
pub fn perturb_gene<R: Rng + ?Sized>(
    gene: &PrimitiveGene,
    rng: &mut R,
    config: &MutationConfig,
) -> PrimitiveGene {
    let t = gene.transform;
    let transform = AffineTransform::new(
        t.sx + gaussian(rng, config.scale_sigma),
        t.sy + gaussian(rng, config.scale_sigma),
        t.theta + gaussian(rng, config.rotate_sigma),
        t.dx + gaussian(rng, config.translate_sigma),
        t.dy + gaussian(rng, config.translate_sigma),
    );

    let base = gene.resolved_color();
    let color = Rgb(base.0.map(|c| c + gaussian(rng, config.color_sigma))).clamped();

    gene.with_transform(transform).with_color(Some(color))
}

use super::population::Population;
use crate::config::{AppConfig, SamplingConfig};
use crate::genome::{Genome, PrimitiveGene};
use crate::types::BoolOp;
use rand::Rng;

/// Uniform choice among the three operators
pub fn random_operator<R: Rng + ?Sized>(rng: &mut R) -> BoolOp {
    BoolOp::ALL[rng.gen_range(0..BoolOp::ALL.len())]
}

/// `num_genes` fresh primitives folded left with random operators
pub fn random_genome<R: Rng + ?Sized>(
    num_genes: usize,
    rng: &mut R,
    sampling: &SamplingConfig,
) -> Genome {
    let mut genome = Genome::leaf(PrimitiveGene::random(rng, sampling));
    for _ in 1..num_genes {
        let op = random_operator(rng);
        let next = Genome::leaf(PrimitiveGene::random(rng, sampling));
        genome = Genome::combine(op, genome, next);
    }
    genome
}

/// Generation 0: `population_size` random genomes
pub fn initialize_population<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> Population {
    let genomes = (0..config.evolution.population_size)
        .map(|_| random_genome(config.evolution.num_genes, rng, &config.sampling))
        .collect();
    Population::new(genomes)
}

use crate::genome::{canonical_string, Genome};
use serde::Serialize;
use std::collections::HashSet;

/// A genome with its identity. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub id: u64,
    /// Generation in which this individual was created
    pub generation: u64,
    pub genome: Genome,
    /// Ids of the two parents; `None` for the initial generation
    pub parents: Option<(u64, u64)>,
}

/// Summary of one generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationStats {
    pub generation: u64,
    pub size: usize,
    pub mean_primitives: f64,
    pub mean_operations: f64,
    pub max_depth: usize,
    pub unique_genomes: usize,
}

/// Fixed-size snapshot of one generation
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    generation: u64,
    next_id: u64,
}

impl Population {
    /// Generation 0 with ids `0..genomes.len()`
    pub fn new(genomes: Vec<Genome>) -> Self {
        let individuals: Vec<Individual> = genomes
            .into_iter()
            .enumerate()
            .map(|(i, genome)| Individual {
                id: i as u64,
                generation: 0,
                genome,
                parents: None,
            })
            .collect();
        let next_id = individuals.len() as u64;
        Self {
            individuals,
            generation: 0,
            next_id,
        }
    }

    pub(crate) fn from_parts(individuals: Vec<Individual>, generation: u64, next_id: u64) -> Self {
        Self {
            individuals,
            generation,
            next_id,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub fn stats(&self) -> PopulationStats {
        let size = self.individuals.len();
        let mut primitives = 0usize;
        let mut operations = 0usize;
        let mut max_depth = 0usize;
        let mut seen = HashSet::new();

        for individual in &self.individuals {
            let stats = individual.genome.stats();
            primitives += stats.primitives;
            operations += stats.operations;
            max_depth = max_depth.max(stats.depth);
            seen.insert(canonical_string(&individual.genome));
        }

        let mean = |total: usize| if size == 0 { 0.0 } else { total as f64 / size as f64 };
        PopulationStats {
            generation: self.generation,
            size,
            mean_primitives: mean(primitives),
            mean_operations: mean(operations),
            max_depth,
            unique_genomes: seen.len(),
        }
    }
}

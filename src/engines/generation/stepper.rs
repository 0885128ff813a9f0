use super::crossover::crossover;
use super::mutation::mutate;
use super::operators::initialize_population;
use super::population::{Individual, Population};
use super::progress::ProgressCallback;
use crate::config::AppConfig;
use crate::error::{Result, SdfEvoError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Builds the next generation from the externally selected parents.
///
/// Each offspring draws two parents with replacement from `selected`. Two
/// draws of the same individual produce a plain copy; otherwise the parents
/// are crossed over (with probability `crossover_rate`) and the result is
/// mutated. With elitism enabled the selected individuals are carried over
/// unchanged first. An invalid `config` is rejected before anything is drawn.
pub fn step<R: Rng + ?Sized>(
    current: &Population,
    selected: &[usize],
    config: &AppConfig,
    rng: &mut R,
) -> Result<Population> {
    config.validate()?;
    if selected.is_empty() {
        return Err(SdfEvoError::Selection(
            "At least one individual must be selected".to_string(),
        ));
    }
    if let Some(&bad) = selected.iter().find(|&&i| i >= current.len()) {
        return Err(SdfEvoError::Selection(format!(
            "Selected index {} out of range for population of {}",
            bad,
            current.len()
        )));
    }

    let individuals = current.individuals();
    let size = individuals.len();
    let generation = current.generation() + 1;
    let mut next_id = current.next_id();
    let mut next = Vec::with_capacity(size);

    if config.evolution.elitism {
        let mut carried = HashSet::new();
        for &index in selected {
            if next.len() < size && carried.insert(index) {
                next.push(individuals[index].clone());
            }
        }
    }
    let elites = next.len();

    while next.len() < size {
        let a = selected[rng.gen_range(0..selected.len())];
        let b = selected[rng.gen_range(0..selected.len())];
        let (parent_a, parent_b) = (&individuals[a], &individuals[b]);

        let base = if a == b {
            parent_a.genome.clone()
        } else if rng.gen::<f64>() < config.evolution.crossover_rate {
            crossover(&parent_a.genome, &parent_b.genome, rng)?
        } else {
            parent_a.genome.clone()
        };

        let genome = mutate(&base, rng, &config.mutation, &config.sampling);
        genome.validate()?;

        next.push(Individual {
            id: next_id,
            generation,
            genome,
            parents: Some((parent_a.id, parent_b.id)),
        });
        next_id += 1;
    }

    log::debug!(
        "Advanced to generation {}: {} elites, {} offspring from {} selected",
        generation,
        elites,
        size - elites,
        selected.len()
    );

    Ok(Population::from_parts(next, generation, next_id))
}

/// Owns the configuration and the single seeded RNG of one evolution run
pub struct PopulationStepper {
    config: AppConfig,
    rng: StdRng,
}

impl PopulationStepper {
    /// Seeds from `config.evolution.seed`, or from entropy when unset
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn from_seed(mut config: AppConfig, seed: u64) -> Result<Self> {
        config.evolution.seed = Some(seed);
        Self::new(config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn initialize(&mut self) -> Population {
        initialize_population(&self.config, &mut self.rng)
    }

    pub fn step(&mut self, current: &Population, selected: &[usize]) -> Result<Population> {
        step(current, selected, &self.config, &mut self.rng)
    }

    pub fn step_with_progress<C: ProgressCallback>(
        &mut self,
        current: &Population,
        selected: &[usize],
        callback: &mut C,
    ) -> Result<Population> {
        callback.on_generation_start(current.generation() + 1, selected.len());
        let next = self.step(current, selected)?;
        callback.on_generation_complete(&next.stats());
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MutationConfig;
    use crate::engines::generation::progress::{ChannelProgressCallback, ProgressMessage};

    fn quiet_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.mutation = MutationConfig::disabled();
        config
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let mut stepper = PopulationStepper::from_seed(AppConfig::default(), 1).unwrap();
        let population = stepper.initialize();

        assert!(matches!(
            stepper.step(&population, &[]),
            Err(SdfEvoError::Selection(_))
        ));
    }

    #[test]
    fn test_out_of_range_selection_is_rejected() {
        let mut stepper = PopulationStepper::from_seed(AppConfig::default(), 1).unwrap();
        let population = stepper.initialize();
        let beyond = population.len();

        assert!(matches!(
            stepper.step(&population, &[0, beyond]),
            Err(SdfEvoError::Selection(_))
        ));
    }

    #[test]
    fn test_invalid_sampling_is_reported_not_panicked() {
        let mut rng = StdRng::seed_from_u64(1);
        let population = initialize_population(&AppConfig::default(), &mut rng);

        let mut config = AppConfig::default();
        config.mutation.structural_add_rate = 1.0;
        config.sampling.scale_range = (0.6, 0.15);

        assert!(matches!(
            step(&population, &[0], &config, &mut rng),
            Err(SdfEvoError::Configuration(_))
        ));
    }

    #[test]
    fn test_ids_and_generation_advance() {
        let mut stepper = PopulationStepper::from_seed(AppConfig::default(), 2).unwrap();
        let first = stepper.initialize();
        let second = stepper.step(&first, &[0, 3, 5]).unwrap();

        assert_eq!(second.len(), first.len());
        assert_eq!(second.generation(), 1);
        assert!(second.iter().all(|i| i.generation == 1));

        let ids: HashSet<u64> = first.iter().chain(second.iter()).map(|i| i.id).collect();
        assert_eq!(ids.len(), first.len() + second.len());

        let parent_ids = [0u64, 3, 5];
        for child in second.iter() {
            let (a, b) = child.parents.unwrap();
            assert!(parent_ids.contains(&a) && parent_ids.contains(&b));
        }
    }

    #[test]
    fn test_elitism_carries_selected_verbatim() {
        let mut config = AppConfig::default();
        config.evolution.elitism = true;
        let mut stepper = PopulationStepper::from_seed(config, 3).unwrap();
        let first = stepper.initialize();
        let second = stepper.step(&first, &[4, 1, 4]).unwrap();

        assert_eq!(second.individuals()[0], first.individuals()[4]);
        assert_eq!(second.individuals()[1], first.individuals()[1]);
        assert_eq!(second.individuals()[2].generation, 1);
        assert_eq!(second.len(), first.len());
    }

    #[test]
    fn test_without_crossover_children_copy_first_parent() {
        let mut config = quiet_config();
        config.evolution.crossover_rate = 0.0;
        let mut stepper = PopulationStepper::from_seed(config, 4).unwrap();
        let first = stepper.initialize();
        let second = stepper.step(&first, &[2, 7]).unwrap();

        for child in second.iter() {
            let (a, _) = child.parents.unwrap();
            assert_eq!(child.genome, first.individuals()[a as usize].genome);
        }
    }

    #[test]
    fn test_progress_messages() {
        let (sender, receiver) = std::sync::mpsc::channel();
        let mut callback = ChannelProgressCallback::new(sender);
        let mut stepper = PopulationStepper::from_seed(AppConfig::default(), 5).unwrap();
        let first = stepper.initialize();

        let next = stepper.step_with_progress(&first, &[1], &mut callback).unwrap();
        drop(callback);

        let messages: Vec<ProgressMessage> = receiver.iter().collect();
        assert_eq!(
            messages[0],
            ProgressMessage::GenerationStart {
                generation: 1,
                selected: 1
            }
        );
        assert_eq!(messages[1], ProgressMessage::GenerationComplete(next.stats()));
    }
}

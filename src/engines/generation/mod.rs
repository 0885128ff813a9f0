pub mod crossover;
pub mod mutation;
pub mod operators;
pub mod population;
pub mod progress;
pub mod stepper;

pub use crossover::{crossover, crossover_at};
pub use mutation::{mutate, perturb_gene};
pub use operators::{initialize_population, random_genome, random_operator};
pub use population::{Individual, Population, PopulationStats};
pub use progress::{ChannelProgressCallback, LogProgressCallback, ProgressCallback, ProgressMessage};
pub use stepper::{step, PopulationStepper};

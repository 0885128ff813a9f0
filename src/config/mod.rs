pub mod traits;
pub mod evolution;
pub mod mutation;
pub mod sampling;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use mutation::MutationConfig;
pub use sampling::SamplingConfig;
pub use traits::{ConfigManifest, ConfigSection, FieldManifest};

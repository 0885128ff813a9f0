use super::population::PopulationStats;

/// Observer of generation advances
pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: u64, selected: usize);
    fn on_generation_complete(&mut self, stats: &PopulationStats);
}

/// Reports through the `log` facade
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: u64, selected: usize) {
        log::info!("Generation {} starting from {} selected parents", generation, selected);
    }

    fn on_generation_complete(&mut self, stats: &PopulationStats) {
        log::info!(
            "Generation {} complete. Mean primitives: {:.1}, mean operations: {:.1}, unique: {}/{}",
            stats.generation,
            stats.mean_primitives,
            stats.mean_operations,
            stats.unique_genomes,
            stats.size
        );
    }
}

// For handing progress to another thread (e.g. a preview front-end)
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart { generation: u64, selected: usize },
    GenerationComplete(PopulationStats),
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: u64, selected: usize) {
        let _ = self
            .sender
            .send(ProgressMessage::GenerationStart { generation, selected });
    }

    fn on_generation_complete(&mut self, stats: &PopulationStats) {
        let _ = self
            .sender
            .send(ProgressMessage::GenerationComplete(stats.clone()));
    }
}

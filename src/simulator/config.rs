//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of catches to draw
    pub num_catches: u64,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_catches: 100_000,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Quick config for a smoke check of the tables
    pub fn quick() -> Self {
        Self {
            num_catches: 10_000,
            ..Default::default()
        }
    }
}

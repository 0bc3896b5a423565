//! Pipeline configuration.
//!
//! [`GeneratorConfig`] holds every knob of one generation run.

use crate::job::DEFAULT_SEED;

/// Configuration of a job-matrix run.
///
/// # Defaults
///
/// ```
/// use u_jobmatrix::runner::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.strength, 2);
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.wave_size, 10);
/// assert_eq!(config.max_jobs, 0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_jobmatrix::runner::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_strength(3)
///     .with_seed(7)
///     .with_wave_size(20)
///     .with_max_jobs(100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Coverage strength `N`: every `N`-column value combination the
    /// filters admit is covered. At least 2.
    pub strength: usize,

    /// Seed of the job order shuffle.
    pub seed: u64,

    /// Jobs per wave. At least 1.
    pub wave_size: usize,

    /// Cap on the total number of jobs placed into waves.
    ///
    /// Set to 0 for no cap (the default).
    pub max_jobs: usize,

    /// Whether to score coverage candidates in parallel using rayon.
    /// Has no effect without the `parallel` feature.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strength: 2,
            seed: DEFAULT_SEED,
            wave_size: 10,
            max_jobs: 0,
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    /// Sets the coverage strength.
    pub fn with_strength(mut self, strength: usize) -> Self {
        self.strength = strength;
        self
    }

    /// Sets the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the wave size.
    pub fn with_wave_size(mut self, wave_size: usize) -> Self {
        self.wave_size = wave_size;
        self
    }

    /// Sets the job cap (0 to disable).
    pub fn with_max_jobs(mut self, max_jobs: usize) -> Self {
        self.max_jobs = max_jobs;
        self
    }

    /// Enables or disables parallel candidate scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.strength < 2 {
            return Err("strength must be at least 2".into());
        }
        if self.wave_size == 0 {
            return Err("wave_size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.strength, 2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.wave_size, 10);
        assert_eq!(config.max_jobs, 0);
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeneratorConfig::default()
            .with_strength(3)
            .with_seed(1)
            .with_wave_size(5)
            .with_max_jobs(40)
            .with_parallel(true);

        assert_eq!(config.strength, 3);
        assert_eq!(config.seed, 1);
        assert_eq!(config.wave_size, 5);
        assert_eq!(config.max_jobs, 40);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_strength_too_small() {
        let config = GeneratorConfig::default().with_strength(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_wave_size() {
        let config = GeneratorConfig::default().with_wave_size(0);
        assert!(config.validate().is_err());
    }
}

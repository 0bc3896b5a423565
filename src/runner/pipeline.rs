//! End-to-end pipeline execution.
//!
//! [`MatrixRunner`] orchestrates one run:
//! coverage generation → normalization → shuffle → pinning → waves.

use tracing::info;

use super::config::GeneratorConfig;
use crate::catalog::Catalog;
use crate::coverage::{CoverageGenerator, GreedyCoverage, UncoverableTuple};
use crate::error::{MatrixError, Result};
use crate::filter::RowFilter;
use crate::job::{normalize_rows, shuffle_jobs, Job};
use crate::reorder::{PinOutcome, PinPlan, Pinner};
use crate::wave::distribute_to_waves;

/// Counters describing one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixStats {
    /// Rows produced by the coverage generator.
    pub rows_generated: usize,
    /// Combinations the filters accept in isolation.
    pub required_tuples: usize,
    /// Required combinations no valid row can hold.
    pub uncoverable_tuples: usize,
    pub pins_moved: usize,
    pub pins_synthesized: usize,
    pub pins_already_placed: usize,
    /// Jobs cut by the `max_jobs` cap.
    pub jobs_dropped: usize,
}

/// Result of a job-matrix run.
#[derive(Debug, Clone)]
pub struct MatrixResult {
    /// The full shuffled and pinned job list, before the wave cap. This is
    /// what the verifier checks.
    pub jobs: Vec<Job>,
    /// Jobs grouped into waves, after the cap.
    pub waves: Vec<Vec<Job>>,
    /// Combinations reported by the generator as impossible.
    pub uncoverable: Vec<UncoverableTuple>,
    pub stats: MatrixStats,
}

impl MatrixResult {
    /// Number of jobs placed into waves.
    pub fn scheduled_jobs(&self) -> usize {
        self.waves.iter().map(Vec::len).sum()
    }
}

/// Executes the job-matrix pipeline.
///
/// # Usage
///
/// ```
/// use u_jobmatrix::catalog::{Catalog, Value};
/// use u_jobmatrix::filter::FilterChain;
/// use u_jobmatrix::job::Job;
/// use u_jobmatrix::reorder::PinPlan;
/// use u_jobmatrix::runner::{GeneratorConfig, MatrixRunner};
///
/// let catalog = Catalog::new()
///     .with_scalars("os", [Value::new("ubuntu", "20.04"), Value::new("ubuntu", "22.04")])
///     .with_scalars("cxx", [Value::new("cxx", "17"), Value::new("cxx", "20")]);
/// let pins = PinPlan::new(Job::new())
///     .with_requirement(Job::new().with("cxx", "cxx", "20"));
///
/// let result = MatrixRunner::run(
///     &catalog,
///     &FilterChain::new(),
///     &GeneratorConfig::default().with_wave_size(3),
///     &pins,
/// )
/// .unwrap();
///
/// assert_eq!(result.jobs.len(), 4);
/// assert_eq!(result.jobs[0].version("cxx"), Some("20"));
/// assert_eq!(result.waves.len(), 2);
/// ```
pub struct MatrixRunner;

impl MatrixRunner {
    /// Runs the pipeline with [`GreedyCoverage`].
    pub fn run(
        catalog: &Catalog,
        filter: &dyn RowFilter,
        config: &GeneratorConfig,
        pins: &PinPlan,
    ) -> Result<MatrixResult> {
        let generator = GreedyCoverage::new().with_parallel(config.parallel);
        Self::run_with(&generator, catalog, filter, config, pins)
    }

    /// Runs the pipeline with a caller-supplied coverage generator.
    ///
    /// # Errors
    /// - [`MatrixError::InvalidConfig`] if `config` does not validate.
    /// - [`MatrixError::ReservedShape`] if a reserved column holds values
    ///   of the wrong shape.
    /// - [`MatrixError::EmptyRequirement`] if a pin requirement is empty.
    pub fn run_with<G: CoverageGenerator + ?Sized>(
        generator: &G,
        catalog: &Catalog,
        filter: &dyn RowFilter,
        config: &GeneratorConfig,
        pins: &PinPlan,
    ) -> Result<MatrixResult> {
        config.validate().map_err(MatrixError::InvalidConfig)?;
        catalog.validate_reserved()?;

        info!(
            columns = catalog.len(),
            strength = config.strength,
            seed = config.seed,
            pins = pins.requirements.len(),
            "job matrix run started"
        );

        // 1. Coverage rows
        let coverage = generator.generate(catalog, config.strength, filter)?;

        // 2. Normalize and shuffle
        let mut jobs = normalize_rows(&coverage.rows, catalog);
        shuffle_jobs(&mut jobs, config.seed);

        // 3. Pin required jobs to the front
        let mut stats = MatrixStats {
            rows_generated: coverage.rows.len(),
            required_tuples: coverage.required_tuples,
            uncoverable_tuples: coverage.uncoverable.len(),
            ..MatrixStats::default()
        };
        let mut pinner = Pinner::new(pins.template.clone());
        for outcome in pinner.pin_all(&mut jobs, &pins.requirements)? {
            match outcome {
                PinOutcome::Moved { .. } => stats.pins_moved += 1,
                PinOutcome::Synthesized => stats.pins_synthesized += 1,
                PinOutcome::AlreadyPinned { .. } => stats.pins_already_placed += 1,
            }
        }

        // 4. Waves
        let waves = distribute_to_waves(jobs.clone(), config.wave_size, config.max_jobs)?;
        let scheduled: usize = waves.iter().map(Vec::len).sum();
        stats.jobs_dropped = jobs.len() - scheduled;

        info!(
            jobs = jobs.len(),
            waves = waves.len(),
            dropped = stats.jobs_dropped,
            uncoverable = stats.uncoverable_tuples,
            "job matrix run finished"
        );

        Ok(MatrixResult {
            jobs,
            waves,
            uncoverable: coverage.uncoverable,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogValue, Row, Value};
    use crate::coverage::CoverageResult;
    use crate::filter::{filter_fn, FilterChain};

    fn catalog() -> Catalog {
        let column = |name: &str, n: usize| -> Vec<Value> {
            (0..n).map(|v| Value::new(name, v.to_string())).collect()
        };
        Catalog::new()
            .with_scalars("a", column("a", 4))
            .with_scalars("b", column("b", 3))
            .with_scalars("c", column("c", 3))
    }

    fn run(config: &GeneratorConfig, pins: &PinPlan) -> MatrixResult {
        MatrixRunner::run(&catalog(), &FilterChain::new(), config, pins).unwrap()
    }

    #[test]
    fn test_full_pipeline() {
        let result = run(&GeneratorConfig::default().with_wave_size(4), &PinPlan::default());
        assert_eq!(result.stats.rows_generated, result.jobs.len());
        assert_eq!(result.scheduled_jobs(), result.jobs.len());
        assert!(result.waves.iter().all(|w| w.len() <= 4));
        assert!(result.uncoverable.is_empty());
        assert_eq!(result.stats.jobs_dropped, 0);
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let config = GeneratorConfig::default();
        let a = run(&config, &PinPlan::default());
        let b = run(&config, &PinPlan::default());
        assert_eq!(a.jobs, b.jobs);
    }

    #[test]
    fn test_seed_changes_order_not_membership() {
        let a = run(&GeneratorConfig::default().with_seed(1), &PinPlan::default());
        let b = run(&GeneratorConfig::default().with_seed(2), &PinPlan::default());
        assert_ne!(a.jobs, b.jobs);

        let mut sa: Vec<String> = a.jobs.iter().map(ToString::to_string).collect();
        let mut sb: Vec<String> = b.jobs.iter().map(ToString::to_string).collect();
        sa.sort();
        sb.sort();
        assert_eq!(sa, sb);
    }

    #[test]
    fn test_pins_front_regardless_of_seed() {
        let pins = PinPlan::new(Job::new().with("c", "c", "0"))
            .with_requirement(Job::new().with("a", "a", "3").with("b", "b", "2"))
            .with_requirement(Job::new().with("a", "a", "9"))
            .with_requirement(Job::new().with("a", "a", "3").with("b", "b", "2"));

        for seed in [0, 42, 1234] {
            let result = run(&GeneratorConfig::default().with_seed(seed), &pins);
            assert_eq!(result.jobs[0].version("a"), Some("3"));
            assert_eq!(result.jobs[0].version("b"), Some("2"));
            assert_eq!(result.jobs[1].version("a"), Some("9"));
            assert_eq!(result.jobs[1].version("c"), Some("0"));
            assert_eq!(result.stats.pins_moved, 1);
            assert_eq!(result.stats.pins_synthesized, 1);
            assert_eq!(result.stats.pins_already_placed, 1);
        }
    }

    #[test]
    fn test_max_jobs_cap() {
        let result = run(
            &GeneratorConfig::default().with_wave_size(5).with_max_jobs(7),
            &PinPlan::default(),
        );
        assert_eq!(result.scheduled_jobs(), 7);
        assert_eq!(result.waves.len(), 2);
        assert_eq!(result.stats.jobs_dropped, result.jobs.len() - 7);
    }

    #[test]
    fn test_invalid_config() {
        let err = MatrixRunner::run(
            &catalog(),
            &FilterChain::new(),
            &GeneratorConfig::default().with_wave_size(0),
            &PinPlan::default(),
        )
        .unwrap_err();
        assert_eq!(err, MatrixError::InvalidConfig("wave_size must be at least 1".into()));
    }

    #[test]
    fn test_reserved_shape_rejected() {
        let catalog = catalog().with_scalars("backends", [Value::new("cuda", "off")]);
        let err = MatrixRunner::run(
            &catalog,
            &FilterChain::new(),
            &GeneratorConfig::default(),
            &PinPlan::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MatrixError::ReservedShape { .. }));
    }

    #[test]
    fn test_empty_pin_requirement() {
        let pins = PinPlan::default().with_requirement(Job::new());
        let err = MatrixRunner::run(
            &catalog(),
            &FilterChain::new(),
            &GeneratorConfig::default(),
            &pins,
        )
        .unwrap_err();
        assert_eq!(err, MatrixError::EmptyRequirement);
    }

    #[test]
    fn test_filtered_rows() {
        let no_a0 = filter_fn("no-a0", |row: &Row<'_>| row.version("a") != Some("0"));
        let result = MatrixRunner::run(
            &catalog(),
            &no_a0,
            &GeneratorConfig::default(),
            &PinPlan::default(),
        )
        .unwrap();
        assert!(result.jobs.iter().all(|j| j.version("a") != Some("0")));
    }

    struct FixedRows;

    impl CoverageGenerator for FixedRows {
        fn generate(
            &self,
            catalog: &Catalog,
            strength: usize,
            _: &dyn RowFilter,
        ) -> Result<CoverageResult> {
            let row: Vec<CatalogValue> = (0..catalog.len())
                .map(|c| catalog.values(c)[0].clone())
                .collect();
            Ok(CoverageResult {
                rows: vec![row],
                strength,
                ..CoverageResult::default()
            })
        }
    }

    #[test]
    fn test_custom_generator() {
        let result = MatrixRunner::run_with(
            &FixedRows,
            &catalog(),
            &FilterChain::new(),
            &GeneratorConfig::default(),
            &PinPlan::default(),
        )
        .unwrap();
        assert_eq!(result.jobs.len(), 1);
        assert_eq!(result.jobs[0].version("a"), Some("0"));
    }
}

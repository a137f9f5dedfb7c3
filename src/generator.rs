//! Random job generation.
//!
//! Draws test instances within the bounds of a [`ProblemConfig`].
//! Every value is drawn uniformly from its inclusive range; the start is
//! chosen so the job ends inside the horizon.

use rand::Rng;
use tracing::debug;

use crate::config::ProblemConfig;
use crate::error::Result;
use crate::models::{Job, JobIdSequence, Range};

/// Random job source bound to a validated configuration.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_jobselect::config::ProblemConfig;
/// use u_jobselect::generator::JobGenerator;
/// use u_jobselect::models::JobIdSequence;
///
/// let generator = JobGenerator::new(ProblemConfig::default()).unwrap();
/// let mut rng = SmallRng::seed_from_u64(0);
/// let jobs = generator.generate(&mut JobIdSequence::new(), &mut rng).unwrap();
/// assert_eq!(jobs.len(), 40);
/// ```
#[derive(Debug, Clone)]
pub struct JobGenerator {
    config: ProblemConfig,
}

impl JobGenerator {
    /// Creates a generator, rejecting unusable bounds.
    pub fn new(config: ProblemConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Bounds used for generation.
    pub fn config(&self) -> &ProblemConfig {
        &self.config
    }

    /// Draws one job, taking its id from `ids`.
    pub fn generate_job<R: Rng>(&self, ids: &mut JobIdSequence, rng: &mut R) -> Result<Job> {
        let c = &self.config;
        let duration = rng.random_range(c.min_duration..=c.max_duration);
        let start = rng.random_range(0..=c.horizon - duration);
        let priority = rng.random_range(c.min_priority..=c.max_priority);
        let profit = rng.random_range(c.min_profit..=c.max_profit);

        ids.job(priority, profit, Range::new(start, start + duration)?)
    }

    /// Draws `config.job_count` jobs.
    pub fn generate<R: Rng>(&self, ids: &mut JobIdSequence, rng: &mut R) -> Result<Vec<Job>> {
        self.generate_n(self.config.job_count, ids, rng)
    }

    /// Draws `count` jobs.
    pub fn generate_n<R: Rng>(
        &self,
        count: usize,
        ids: &mut JobIdSequence,
        rng: &mut R,
    ) -> Result<Vec<Job>> {
        let jobs = (0..count)
            .map(|_| self.generate_job(ids, rng))
            .collect::<Result<Vec<Job>>>()?;
        debug!(
            event = "jobs_generated",
            count = jobs.len(),
            horizon = self.config.horizon,
        );
        Ok(jobs)
    }
}

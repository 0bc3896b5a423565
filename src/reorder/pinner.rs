//! Priority pinning of required jobs to the front of the job list.

use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::job::Job;

/// What [`Pinner::pin`] did with a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    /// An existing job matched and was moved from `from` to the cursor.
    Moved { from: usize },
    /// No job matched; `template ⊕ requirement` was inserted at the cursor.
    Synthesized,
    /// A job in the pinned prefix already matches; nothing moved.
    AlreadyPinned { at: usize },
}

/// Moves jobs matching caller requirements to the front, in call order.
///
/// The pinner keeps a cursor, starting at 0, that marks the end of the
/// pinned prefix. Each successful pin places a job at the cursor and
/// advances it by one, so the first `k` distinct requirements end up in
/// slots `0..k` regardless of the prior order of the list.
///
/// A requirement already satisfied by a job inside the pinned prefix is a
/// no-op: the earlier slot keeps the job and the cursor does not move.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::job::Job;
/// use u_jobmatrix::reorder::{PinOutcome, Pinner};
///
/// let mut jobs = vec![
///     Job::new().with("host_compiler", "clang", "12"),
///     Job::new().with("host_compiler", "gcc", "9"),
/// ];
/// let mut pinner = Pinner::new(Job::new().with("ubuntu", "ubuntu", "20.04"));
///
/// let gcc = Job::new().with("host_compiler", "gcc", "9");
/// assert_eq!(pinner.pin(&mut jobs, &gcc).unwrap(), PinOutcome::Moved { from: 1 });
/// assert_eq!(jobs[0].name("host_compiler"), Some("gcc"));
///
/// let icx = Job::new().with("host_compiler", "icx", "2023");
/// assert_eq!(pinner.pin(&mut jobs, &icx).unwrap(), PinOutcome::Synthesized);
/// assert_eq!(jobs[1].version("ubuntu"), Some("20.04"));
/// assert_eq!(jobs.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pinner {
    cursor: usize,
    template: Job,
}

impl Pinner {
    /// Creates a pinner whose synthesized jobs start from `template`.
    pub fn new(template: Job) -> Self {
        Self {
            cursor: 0,
            template,
        }
    }

    /// Length of the pinned prefix.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn template(&self) -> &Job {
        &self.template
    }

    /// Guarantees a job matching `required` sits in the pinned prefix.
    ///
    /// # Errors
    /// [`MatrixError::EmptyRequirement`] if `required` has no attributes.
    pub fn pin(&mut self, jobs: &mut Vec<Job>, required: &Job) -> Result<PinOutcome> {
        if required.is_empty() {
            return Err(MatrixError::EmptyRequirement);
        }

        let prefix = self.cursor.min(jobs.len());
        if let Some(at) = jobs[..prefix].iter().position(|j| j.matches(required)) {
            debug!(at, requirement = %required, "requirement already pinned");
            return Ok(PinOutcome::AlreadyPinned { at });
        }

        let outcome = match jobs[prefix..].iter().position(|j| j.matches(required)) {
            Some(offset) => {
                let from = prefix + offset;
                let job = jobs.remove(from);
                jobs.insert(prefix, job);
                PinOutcome::Moved { from }
            }
            None => {
                jobs.insert(prefix, self.template.merged(required));
                PinOutcome::Synthesized
            }
        };
        debug!(
            slot = prefix,
            ?outcome,
            requirement = %required,
            "job pinned"
        );
        self.cursor = prefix + 1;
        Ok(outcome)
    }

    /// Pins every requirement in order, stopping at the first error.
    pub fn pin_all<'r, I>(
        &mut self,
        jobs: &mut Vec<Job>,
        requirements: I,
    ) -> Result<Vec<PinOutcome>>
    where
        I: IntoIterator<Item = &'r Job>,
    {
        requirements
            .into_iter()
            .map(|r| self.pin(jobs, r))
            .collect()
    }
}

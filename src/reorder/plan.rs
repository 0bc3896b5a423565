//! Pin requirements for one run.

use crate::job::Job;

/// Ordered pin requirements plus the template for synthesized jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinPlan {
    pub template: Job,
    pub requirements: Vec<Job>,
}

impl PinPlan {
    pub fn new(template: Job) -> Self {
        Self {
            template,
            requirements: Vec::new(),
        }
    }

    /// Appends a requirement; pins apply in insertion order.
    pub fn with_requirement(mut self, required: Job) -> Self {
        self.requirements.push(required);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

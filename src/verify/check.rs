//! Completeness check of a job list against an expectation table.

use tracing::{info, warn};

use super::types::{Expectations, MissingFact, VerifyReport};
use crate::job::Job;

/// Checks that every expected fact occurs in at least one job.
///
/// A name-only fact is witnessed by any job whose `field` attribute has
/// that name; a versioned fact needs an exact name and version match.
/// Every missing fact is reported, not just the first.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::job::Job;
/// use u_jobmatrix::verify::{verify, Expectations};
///
/// let jobs = vec![Job::new().with("host_compiler", "clang", "12")];
/// let expectations = Expectations::new().with_name("host_compiler", "gcc");
///
/// let report = verify(&jobs, &expectations);
/// assert!(!report.is_complete());
/// assert_eq!(report.missing[0].to_string(), "gcc missing in host_compiler");
/// ```
pub fn verify(jobs: &[Job], expectations: &Expectations) -> VerifyReport {
    let mut report = VerifyReport::default();

    for (field, expected) in expectations.iter() {
        for e in expected {
            if e.versions.is_empty() {
                report.checked += 1;
                if !jobs.iter().any(|j| j.name(field) == Some(e.name.as_str())) {
                    report.missing.push(MissingFact {
                        field: field.to_string(),
                        name: e.name.clone(),
                        version: None,
                    });
                }
                continue;
            }
            for version in &e.versions {
                report.checked += 1;
                let found = jobs.iter().any(|j| {
                    j.get(field)
                        .is_some_and(|v| v.name() == e.name && v.version() == version.as_str())
                });
                if !found {
                    report.missing.push(MissingFact {
                        field: field.to_string(),
                        name: e.name.clone(),
                        version: Some(version.clone()),
                    });
                }
            }
        }
    }

    for fact in &report.missing {
        warn!(field = %fact.field, "{fact}");
    }
    if report.is_complete() {
        info!(checked = report.checked, jobs = jobs.len(), "verification passed");
    } else {
        warn!(
            missing = report.missing.len(),
            checked = report.checked,
            "verification failed"
        );
    }
    report
}

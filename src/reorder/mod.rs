//! Pinned reordering of the job list.

mod pinner;
mod plan;

pub use pinner::{PinOutcome, Pinner};
pub use plan::PinPlan;

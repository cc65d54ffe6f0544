//! # studyrank-core
//!
//! Foundation crate for the studyrank weighting system.
//! Defines the study-plan document model, tunable coefficients, errors,
//! and constants. The algorithm crate (`studyrank-weights`) depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod plan;

// Re-export the most commonly used types at the crate root.
pub use config::WeightConfig;
pub use errors::{WeightError, WeightResult};
pub use plan::{ScoreBreakdown, StudyPlan, Subject, Subtopic, SubtopicId};

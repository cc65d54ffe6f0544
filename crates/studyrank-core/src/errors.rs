use crate::plan::SubtopicId;

/// Weighting pipeline errors.
///
/// Degenerate data (empty subjects, zero total hours, cyclic or dangling
/// prerequisites) is recovered in place and never reaches this enum; only
/// caller contract violations do.
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    #[error("duplicate subtopic id {id} in subject {subject_index}")]
    DuplicateSubtopicId {
        subject_index: usize,
        id: SubtopicId,
    },

    #[error("invalid weighting config: {reason}")]
    InvalidConfig { reason: String },
}

pub type WeightResult<T> = Result<T, WeightError>;

//! Explicit result of a create / update / delete request

use crate::forms::FieldError;

/// Outcome of a mutation, returned to the presentation layer
///
/// Success and persistence failure each carry the user-facing notice; the
/// underlying persistence error is only logged.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    Success { notice: String, record: T },
    ValidationFailed(Vec<FieldError>),
    PersistenceFailed { notice: String },
}

impl<T> MutationOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, MutationOutcome::Success { .. })
    }

    /// Notices to show the user, one per field error for validation failures
    pub fn notices(&self) -> Vec<String> {
        match self {
            MutationOutcome::Success { notice, .. } => vec![notice.clone()],
            MutationOutcome::ValidationFailed(errors) => {
                errors.iter().map(FieldError::notice).collect()
            }
            MutationOutcome::PersistenceFailed { notice } => vec![notice.clone()],
        }
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            MutationOutcome::Success { record, .. } => Some(record),
            _ => None,
        }
    }
}

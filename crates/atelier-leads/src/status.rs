//! Submission outcome tracking

/// Outcome of the most recent submit attempt.
///
/// A new attempt first returns the status to `Idle`, so any banner from a
/// previous attempt disappears while the request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let status = SubmissionStatus::default();
        assert_eq!(status, SubmissionStatus::Idle);
        assert!(!status.is_success());
        assert!(!status.is_error());
    }
}

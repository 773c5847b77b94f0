/// Lifecycle of a single operator action (lock, release, clear queue).
///
/// `Idle -> Pending -> Idle` on success, `Pending -> Failed` on error. A failed
/// action stays failed until the next attempt starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    Pending,
    Failed(String),
}

impl ActionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ActionStatus::Pending)
    }

    /// Error message of the most recent failed attempt
    pub fn error(&self) -> Option<&str> {
        match self {
            ActionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Outcome of a finished attempt
    pub fn settled<T, E: std::fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ActionStatus::Idle,
            Err(e) => ActionStatus::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ActionStatus::default(), ActionStatus::Idle);
        assert!(!ActionStatus::default().is_pending());
    }

    #[test]
    fn test_settled() {
        let ok: Result<(), String> = Ok(());
        assert_eq!(ActionStatus::settled(&ok), ActionStatus::Idle);

        let err: Result<(), String> = Err("Release is locked".into());
        let status = ActionStatus::settled(&err);
        assert_eq!(status.error(), Some("Release is locked"));
        assert!(!status.is_pending());
    }
}

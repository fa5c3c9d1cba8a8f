//! Error infrastructure for the decision core.
//!
//! Every failure the scheduler, optimizer, compiler or selector can surface is
//! an [`AgentError`]. Each variant carries a [`ErrorSeverity`] so the run loop
//! can tell a logged-and-ignored condition from one that stops the run.

use thiserror::Error;

/// Severity level of an error, used for categorization and recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Logged and worked around; the run continues.
    ///
    /// Examples: no wanderer candidate is eligible
    Recoverable,

    /// Invalid request from a task definition; retrying unchanged cannot help.
    ///
    /// Examples: an override names an item the actor does not own
    Validation,

    /// The run cannot continue.
    ///
    /// Examples: a port reports failure, no task is actionable
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("task `{task}` cannot run: {reason}")]
    PreconditionUnmet { task: String, reason: String },

    #[error("no actionable task in `{quest}`")]
    NoActionableTask { quest: String },

    #[error("{entity} is unavailable for {context}")]
    ResourceUnavailable { entity: String, context: String },

    #[error("no eligible target for `{category}`")]
    AmbiguousTarget { category: String },

    #[error("action `{action}` failed: {reason}")]
    ActionFailed { action: String, reason: String },

    #[error("script interpreter failed: {reason}")]
    Interpreter { reason: String },
}

impl AgentError {
    pub fn precondition(task: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PreconditionUnmet {
            task: task.into(),
            reason: reason.into(),
        }
    }

    pub fn unavailable(entity: impl ToString, context: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            entity: entity.to_string(),
            context: context.into(),
        }
    }

    pub fn action_failed(action: impl ToString, reason: impl Into<String>) -> Self {
        Self::ActionFailed {
            action: action.to_string(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AmbiguousTarget { .. } => ErrorSeverity::Recoverable,
            Self::ResourceUnavailable { .. } => ErrorSeverity::Validation,
            Self::PreconditionUnmet { .. }
            | Self::NoActionableTask { .. }
            | Self::ActionFailed { .. }
            | Self::Interpreter { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Static identifier for this variant, for logs and tests.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PreconditionUnmet { .. } => "PRECONDITION_UNMET",
            Self::NoActionableTask { .. } => "NO_ACTIONABLE_TASK",
            Self::ResourceUnavailable { .. } => "RESOURCE_UNAVAILABLE",
            Self::AmbiguousTarget { .. } => "AMBIGUOUS_TARGET",
            Self::ActionFailed { .. } => "ACTION_FAILED",
            Self::Interpreter { .. } => "INTERPRETER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ambiguous_target_is_recoverable() {
        let ambiguous = AgentError::AmbiguousTarget {
            category: "wanderer".into(),
        };
        assert!(ambiguous.severity().is_recoverable());

        let stalled = AgentError::NoActionableTask {
            quest: "Merry Crimbo!".into(),
        };
        assert_eq!(stalled.severity(), ErrorSeverity::Fatal);
        assert_eq!(stalled.error_code(), "NO_ACTIONABLE_TASK");
    }

    #[test]
    fn messages_name_the_task() {
        let err = AgentError::precondition("Proton Ghost", "sobriety changed");
        assert_eq!(err.to_string(), "task `Proton Ghost` cannot run: sobriety changed");
    }
}

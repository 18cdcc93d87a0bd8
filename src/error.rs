use thiserror::Error;

/// Which stabilization condition a polling loop was waiting on.
///
/// Carried inside [`Error::RetryBudgetExhausted`] so callers can tell a
/// service that never started from a target group that never went healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitCondition {
    /// The primary deployment never reported a running task.
    ServiceNotStable,
    /// No registered target ever reported the healthy state.
    TargetGroupNotHealthy,
}

impl std::fmt::Display for WaitCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServiceNotStable => write!(f, "service not stable"),
            Self::TargetGroupNotHealthy => write!(f, "target group not healthy"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A service, target group, or status resource expected to exist is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// A stabilization condition never held within the attempt budget.
    #[error("{condition} after {attempts} attempts")]
    RetryBudgetExhausted {
        condition: WaitCondition,
        attempts: u32,
    },

    /// A nonzero-weight target group would have been detached from a listener.
    ///
    /// Nonzero weight means live traffic is still routed to the target group;
    /// removing it would drop requests, so the whole run aborts instead.
    #[error("target group is active: {arn} (weight {weight})")]
    TargetGroupStillActive { arn: String, weight: u64 },

    /// A cluster or load-balancing control-plane call itself failed.
    #[error("{operation}: {message}")]
    Upstream {
        operation: &'static str,
        message: String,
    },

    /// The deployment status command failed or produced unusable output.
    #[error("deployment status: {0}")]
    Status(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::Upstream`] from any displayable control-plane error.
    pub fn upstream(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Upstream {
            operation,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

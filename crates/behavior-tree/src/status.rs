//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Every node finishes within the tick that invoked it:
/// - Conditions evaluate immediately (e.g., "Is the player in view?")
/// - Actions execute atomically (e.g., "Queue a step north")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed (e.g., blocked tile).
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl From<Status> for bool {
    #[inline]
    fn from(status: Status) -> Self {
        status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversion_round_trips() {
        assert_eq!(Status::from(true), Status::Success);
        assert_eq!(Status::from(false), Status::Failure);
        assert!(bool::from(Status::Success));
        assert!(!bool::from(Status::Failure));
    }

    #[test]
    fn invert_flips() {
        assert_eq!(Status::Success.invert(), Status::Failure);
        assert_eq!(Status::Failure.invert(), Status::Success);
    }
}

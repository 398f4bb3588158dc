use std::{borrow::Cow, fmt};

/// How a test ended, as determined by the runner.
///
/// Every variant maps to exactly one [`Hook`] on
/// [`TestCallback`](crate::callback::TestCallback).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestOutcome {
    Success,
    /// An assertion in the test did not hold.
    Failure { message: Option<String> },
    /// The test stopped on something it did not expect.
    Error { message: Option<String> },
    Skipped { reason: Option<Cow<'static, str>> },
}

impl TestOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: Some(message.into()),
        }
    }

    pub fn skip(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Skipped {
            reason: Some(reason.into()),
        }
    }

    pub fn hook(&self) -> Hook {
        match self {
            TestOutcome::Success => Hook::Success,
            TestOutcome::Failure { .. } => Hook::Failure,
            TestOutcome::Error { .. } => Hook::Error,
            TestOutcome::Skipped { .. } => Hook::Skip,
        }
    }
}

/// The callback method a [`TestOutcome`] is reported through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Success,
    Failure,
    Error,
    Skip,
}

impl Hook {
    pub const fn method_name(self) -> &'static str {
        match self {
            Hook::Success => "on_success",
            Hook::Failure => "on_failure",
            Hook::Error => "on_error",
            Hook::Skip => "on_skip",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

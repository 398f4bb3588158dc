use crate::callback::TestCallback;

/// A [`TestCallback`] that does nothing on every hook.
///
/// Useful as a placeholder where a callback is required but no action is
/// wanted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoCallback;

impl TestCallback for NoCallback {}

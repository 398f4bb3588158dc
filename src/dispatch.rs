//! Reporting an outcome to registered callbacks.
//!
//! When and whether to report is up to the runner. These helpers only do the
//! reporting itself: pick the [`Hook`] that matches a [`TestOutcome`] and call
//! it on every callback, in list order.
//!
//! Two policies are offered. [`dispatch`] stops at the first callback that
//! fails. [`dispatch_all`] keeps going and hands back every failure. Neither
//! drops an error.

use thiserror::Error;

use crate::{
    callback::{self, CallbackError, SharedCallback},
    case::TestCase,
    instrument::Instrumented,
    outcome::{Hook, TestOutcome},
};

#[derive(Debug, Error)]
#[error("callback #{index} failed in {hook}")]
pub struct DispatchError {
    /// Position of the failing callback in the callback list.
    pub index: usize,
    pub hook: Hook,
    #[source]
    pub source: CallbackError,
}

/// Every failure collected by [`dispatch_all`].
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct DispatchReport {
    /// Number of callbacks that were called.
    pub invoked: usize,
    pub errors: Vec<DispatchError>,
}

impl DispatchReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn the report into its first error, if any.
    pub fn into_result(self) -> Result<(), DispatchError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Call the hook for `outcome` on each callback, stopping at the first error.
///
/// Callbacks after the failing one are not called.
pub fn dispatch(
    callbacks: &[SharedCallback],
    test: &dyn TestCase,
    outcome: &TestOutcome,
) -> Result<(), DispatchError> {
    let hook = outcome.hook();
    log::debug!(
        "dispatching {hook} for {} to {} callbacks",
        test.id(),
        callbacks.len()
    );
    for (index, callback) in callbacks.iter().enumerate() {
        callback::invoke(callback.as_ref(), hook, test).map_err(|source| DispatchError {
            index,
            hook,
            source,
        })?;
    }
    Ok(())
}

/// Call the hook for `outcome` on every callback, collecting all errors.
pub fn dispatch_all(
    callbacks: &[SharedCallback],
    test: &dyn TestCase,
    outcome: &TestOutcome,
) -> DispatchReport {
    let hook = outcome.hook();
    let mut report = DispatchReport::default();
    for (index, callback) in callbacks.iter().enumerate() {
        report.invoked += 1;
        if let Err(source) = callback::invoke(callback.as_ref(), hook, test) {
            log::warn!("callback #{index} failed in {hook} for {}: {source}", test.id());
            report.errors.push(DispatchError {
                index,
                hook,
                source,
            });
        }
    }
    report
}

impl<T: TestCase> Instrumented<T> {
    /// [`dispatch`] over this test's own callbacks.
    pub fn notify(&self, outcome: &TestOutcome) -> Result<(), DispatchError> {
        dispatch(self.callbacks(), self, outcome)
    }

    /// [`dispatch_all`] over this test's own callbacks.
    pub fn notify_all(&self, outcome: &TestOutcome) -> DispatchReport {
        dispatch_all(self.callbacks(), self, outcome)
    }
}

//! Post-execution callbacks for test cases.
//!
//! A callback is told how a test ended once the runner knows it. It gets one of
//! four calls: [`on_success`](TestCallback::on_success),
//! [`on_failure`](TestCallback::on_failure), [`on_error`](TestCallback::on_error)
//! or [`on_skip`](TestCallback::on_skip). Every method has an empty default,
//! so an implementation only overrides the cases it cares about.
//!
//! Callbacks are side channels. Whatever a callback does, and whether it
//! fails, the test outcome it was called for stays the same. A failing callback
//! returns a [`CallbackError`] and the caller decides what to do with it.
//!
//! One callback instance is usually shared by many test cases (see
//! [`Instrumentation`](crate::instrument::Instrumentation)), so hooks only
//! get `&self`. Data about the current test comes in through the
//! [`TestCase`] argument, never from state stored on the callback.

use std::{error::Error as StdError, sync::Arc};

use thiserror::Error;

use crate::{case::TestCase, driver::DriverError, outcome::Hook, template::TemplateError};

mod no;
pub use no::*;

mod screenshot;
pub use screenshot::*;

/// A callback shared between every test case it is registered on.
pub type SharedCallback = Arc<dyn TestCallback>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CallbackError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Custom(Box<dyn StdError + Send + Sync>),
}

impl CallbackError {
    /// Wrap an error raised by a user defined callback.
    pub fn custom(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Custom(err.into())
    }
}

/// Actions executed at the end of a test.
///
/// All methods default to doing nothing and returning `Ok(())`.
pub trait TestCallback: Send + Sync {
    /// Called when the test passed.
    fn on_success(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        let _ = test;
        Ok(())
    }

    /// Called when an assertion of the test did not hold.
    fn on_failure(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        let _ = test;
        Ok(())
    }

    /// Called when the test stopped on an unexpected error.
    fn on_error(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        let _ = test;
        Ok(())
    }

    /// Called when the test was skipped.
    fn on_skip(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        let _ = test;
        Ok(())
    }
}

/// Call the method of `callback` that belongs to `hook`.
pub fn invoke(
    callback: &dyn TestCallback,
    hook: Hook,
    test: &dyn TestCase,
) -> Result<(), CallbackError> {
    match hook {
        Hook::Success => callback.on_success(test),
        Hook::Failure => callback.on_failure(test),
        Hook::Error => callback.on_error(test),
        Hook::Skip => callback.on_skip(test),
    }
}

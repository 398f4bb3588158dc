//! Lifecycle callbacks for test cases.
//!
//! Test authors implement [`TestCallback`](callback::TestCallback) and
//! register it on a test type with [`with_callback`](instrument::with_callback).
//! Every test built from the resulting
//! [`Instrumentation`](instrument::Instrumentation) carries the callbacks, in
//! registration order. Once the runner knows the [`TestOutcome`](outcome::TestOutcome)
//! it reports it to them, by hand or through [`dispatch`](dispatch::dispatch).
//!
//! [`TakeScreenshotCallback`](callback::TakeScreenshotCallback) is the one
//! callback shipped here. It saves a screenshot through the test's driver
//! whenever a test fails or errors.

pub mod callback;
pub mod case;
pub mod dispatch;
pub mod driver;
pub mod instrument;
pub mod outcome;
pub mod template;

#[cfg(test)]
mod test_support;

pub mod prelude {
    pub use crate::{
        callback::{CallbackError, NoCallback, SharedCallback, TakeScreenshotCallback, TestCallback},
        case::{NamedCase, TestCase},
        dispatch::{DispatchError, DispatchReport, dispatch, dispatch_all},
        driver::{DriverError, ScreenshotDriver},
        instrument::{Instrumentation, Instrumented, with_callback},
        outcome::{Hook, TestOutcome},
        template::{PathTemplate, TemplateError, TemplateValues},
    };
}

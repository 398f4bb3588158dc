use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    callback::{CallbackError, TestCallback},
    case::TestCase,
    driver::{DriverError, ScreenshotDriver},
    outcome::Hook,
};

pub const ALL_HOOKS: [Hook; 4] = [Hook::Success, Hook::Failure, Hook::Error, Hook::Skip];

pub type Call = (&'static str, Hook, String);

/// A call log that several [`RecordingCallback`]s can write to.
#[derive(Debug, Default, Clone)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().expect("call log not poisoned").push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().expect("call log not poisoned").clone()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|(label, _, _)| label).collect()
    }

    pub fn hooks(&self) -> Vec<Hook> {
        self.calls().into_iter().map(|(_, hook, _)| hook).collect()
    }

    pub fn clear(&self) {
        self.0.lock().expect("call log not poisoned").clear();
    }
}

#[derive(Debug)]
pub struct RecordingCallback {
    label: &'static str,
    log: CallLog,
}

impl RecordingCallback {
    pub fn new(label: &'static str) -> Self {
        Self::with_log(label, &CallLog::default())
    }

    pub fn with_log(label: &'static str, log: &CallLog) -> Self {
        Self {
            label,
            log: log.clone(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.calls()
    }

    fn record(&self, hook: Hook, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.log.push((self.label, hook, test.id().into_owned()));
        Ok(())
    }
}

impl TestCallback for RecordingCallback {
    fn on_success(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.record(Hook::Success, test)
    }

    fn on_failure(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.record(Hook::Failure, test)
    }

    fn on_error(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.record(Hook::Error, test)
    }

    fn on_skip(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.record(Hook::Skip, test)
    }
}

/// Fails on every hook.
#[derive(Debug)]
pub struct FailingCallback;

impl TestCallback for FailingCallback {
    fn on_success(&self, _: &dyn TestCase) -> Result<(), CallbackError> {
        Err(CallbackError::custom("on_success failed"))
    }

    fn on_failure(&self, _: &dyn TestCase) -> Result<(), CallbackError> {
        Err(CallbackError::custom("on_failure failed"))
    }

    fn on_error(&self, _: &dyn TestCase) -> Result<(), CallbackError> {
        Err(CallbackError::custom("on_error failed"))
    }

    fn on_skip(&self, _: &dyn TestCase) -> Result<(), CallbackError> {
        Err(CallbackError::custom("on_skip failed"))
    }
}

/// Remembers every path it was asked to save to, writes nothing.
#[derive(Debug, Default, Clone)]
pub struct RecordingDriver(Arc<Mutex<Vec<PathBuf>>>);

impl RecordingDriver {
    pub fn saved(&self) -> Vec<PathBuf> {
        self.0.lock().expect("driver not poisoned").clone()
    }
}

impl ScreenshotDriver for RecordingDriver {
    fn save_screenshot(&self, path: &Path) -> Result<(), DriverError> {
        self.0
            .lock()
            .expect("driver not poisoned")
            .push(path.to_path_buf());
        Ok(())
    }
}

#[derive(Debug)]
pub struct FailingDriver;

impl ScreenshotDriver for FailingDriver {
    fn save_screenshot(&self, _: &Path) -> Result<(), DriverError> {
        Err(DriverError::Session("session closed".into()))
    }
}

macro_rules! case {
    ($name:expr) => {
        $crate::case::NamedCase::new($name)
    };
    ($name:expr, $driver:expr) => {
        $crate::case::NamedCase::new($name).with_driver($driver)
    };
}

pub(crate) use case;

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use test_callbacks::prelude::*;

#[derive(Debug, Default, Clone)]
pub struct RecordingDriver(Arc<Mutex<Vec<PathBuf>>>);

impl RecordingDriver {
    pub fn saved(&self) -> Vec<PathBuf> {
        self.0.lock().unwrap().clone()
    }
}

impl ScreenshotDriver for RecordingDriver {
    fn save_screenshot(&self, path: &Path) -> Result<(), DriverError> {
        self.0.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// A test case type defined outside the crate, with its own behavior.
#[derive(Debug)]
pub struct CheckoutTest {
    pub cart: Vec<u32>,
    pub driver: Option<RecordingDriver>,
}

impl CheckoutTest {
    pub fn new(cart: &[u32]) -> Result<Self, String> {
        match cart.is_empty() {
            true => Err("cart is empty".into()),
            false => Ok(Self {
                cart: cart.to_vec(),
                driver: None,
            }),
        }
    }

    pub fn total(&self) -> u32 {
        self.cart.iter().sum()
    }
}

impl TestCase for CheckoutTest {
    fn id(&self) -> Cow<'_, str> {
        Cow::Owned(format!("checkout::total_of_{}_items", self.cart.len()))
    }

    fn driver(&self) -> Option<&dyn ScreenshotDriver> {
        self.driver
            .as_ref()
            .map(|driver| driver as &dyn ScreenshotDriver)
    }
}

pub type SeenLog = Arc<Mutex<Vec<(&'static str, &'static str, String)>>>;

/// Remembers the ids it was called with, per hook.
#[derive(Debug, Default)]
pub struct Seen {
    pub label: &'static str,
    pub log: SeenLog,
}

impl Seen {
    pub fn new(label: &'static str, log: &SeenLog) -> Self {
        Self {
            label,
            log: Arc::clone(log),
        }
    }

    fn push(&self, hook: &'static str, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.log
            .lock()
            .unwrap()
            .push((self.label, hook, test.id().into_owned()));
        Ok(())
    }
}

impl TestCallback for Seen {
    fn on_failure(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.push("failure", test)
    }

    fn on_error(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.push("error", test)
    }
}

use std::{borrow::Cow, ops::Deref};

use crate::driver::ScreenshotDriver;

/// The view callbacks get of a test case.
///
/// Only an identity is required. Anything else is an optional capability that
/// defaults to "not available", so a callback has to check for it before
/// using it.
pub trait TestCase {
    /// A unique identity for the test, usually its full path.
    fn id(&self) -> Cow<'_, str>;

    /// The driver attached to this test, if there is one.
    fn driver(&self) -> Option<&dyn ScreenshotDriver> {
        None
    }
}

impl<T: TestCase + ?Sized> TestCase for &T {
    fn id(&self) -> Cow<'_, str> {
        (**self).id()
    }

    fn driver(&self) -> Option<&dyn ScreenshotDriver> {
        (**self).driver()
    }
}

impl<T: TestCase + ?Sized> TestCase for Box<T> {
    fn id(&self) -> Cow<'_, str> {
        (**self).id()
    }

    fn driver(&self) -> Option<&dyn ScreenshotDriver> {
        (**self).driver()
    }
}

/// A plain [`TestCase`] made of a name and an optional driver.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct NamedCase {
    pub name: Cow<'static, str>,
    pub driver: Option<Box<dyn ScreenshotDriver + Send + Sync>>,
}

impl NamedCase {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            driver: None,
        }
    }

    pub fn with_driver<D>(self, driver: D) -> Self
    where
        D: ScreenshotDriver + Send + Sync + 'static,
    {
        Self {
            driver: Some(Box::new(driver)),
            ..self
        }
    }
}

impl TestCase for NamedCase {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.deref())
    }

    fn driver(&self) -> Option<&dyn ScreenshotDriver> {
        self.driver
            .as_deref()
            .map(|driver| driver as &dyn ScreenshotDriver)
    }
}

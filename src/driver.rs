//! The driver capability a test case may expose.
//!
//! A driver stands for a browser automation session (or anything else able to
//! take a picture of the system under test). Test cases are not required to
//! have one, see [`TestCase::driver`](crate::case::TestCase::driver).

use std::{fmt::Debug, io, path::Path};

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DriverError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("driver session error: {0}")]
    Session(String),
}

/// Something that can persist a screenshot to a file.
pub trait ScreenshotDriver: Debug {
    /// Capture the current screen and write it to `path`.
    fn save_screenshot(&self, path: &Path) -> Result<(), DriverError>;
}

impl<D: ScreenshotDriver + ?Sized> ScreenshotDriver for &D {
    fn save_screenshot(&self, path: &Path) -> Result<(), DriverError> {
        (**self).save_screenshot(path)
    }
}

impl<D: ScreenshotDriver + ?Sized> ScreenshotDriver for Box<D> {
    fn save_screenshot(&self, path: &Path) -> Result<(), DriverError> {
        (**self).save_screenshot(path)
    }
}

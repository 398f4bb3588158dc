use std::{borrow::Cow, path::PathBuf};

use crate::{
    callback::{CallbackError, TestCallback},
    case::TestCase,
    template::{PathTemplate, TemplateError, TemplateValues},
};

/// Placeholders [`TakeScreenshotCallback`] always fills in.
pub const DEFAULT_PLACEHOLDERS: [&str; 3] = ["name", "status", "time"];

/// Source of the `time` placeholder, in seconds since the Unix epoch.
pub type Clock = fn() -> i64;

/// The default [`Clock`]: the system's current time.
pub fn system_clock() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Takes a screenshot through the test's driver when a test fails or errors.
///
/// The file path comes from a [`PathTemplate`]. Each capture renders it with:
/// - `name`: the test's [`id`](TestCase::id)
/// - `status`: `"fail"` for failures and `"error"` for errors
/// - `time`: the current Unix timestamp in seconds
///
/// Values added with [`with_value`](Self::with_value) are layered on top of
/// these, and overrides passed to [`capture`](Self::capture) on top of those.
///
/// Tests without a [driver](TestCase::driver) are skipped silently.
#[derive(Debug, Clone)]
pub struct TakeScreenshotCallback {
    template: PathTemplate,
    values: TemplateValues,
    clock: Clock,
}

impl TakeScreenshotCallback {
    pub fn new(template: &str) -> Result<Self, TemplateError> {
        Ok(Self::from_template(PathTemplate::parse(template)?))
    }

    pub fn from_template(template: PathTemplate) -> Self {
        Self {
            template,
            values: TemplateValues::new(),
            clock: system_clock,
        }
    }

    /// Add a value for a custom placeholder, or replace a default one.
    pub fn with_value(mut self, key: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.values.insert(key, value);
        self
    }

    pub fn with_clock(self, clock: Clock) -> Self {
        Self { clock, ..self }
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// Placeholders of the template that nothing configured so far can fill.
    ///
    /// These have to be provided as overrides to [`capture`](Self::capture),
    /// otherwise rendering fails.
    pub fn unresolved_placeholders(&self) -> Vec<&str> {
        let mut unresolved: Vec<&str> = Vec::new();
        for name in self.template.placeholders() {
            if DEFAULT_PLACEHOLDERS.contains(&name)
                || self.values.contains_key(name)
                || unresolved.contains(&name)
            {
                continue;
            }
            unresolved.push(name);
        }
        unresolved
    }

    fn data(&self, test: &dyn TestCase, overrides: &TemplateValues) -> TemplateValues {
        let mut data = TemplateValues::new()
            .with("name", test.id())
            .with("status", "fail")
            .with("time", (self.clock)());
        data.merge(&self.values);
        data.merge(overrides);
        data
    }

    /// Save a screenshot of `test`, if it has a driver.
    ///
    /// Returns the path the screenshot was written to, or `None` when the test
    /// has no driver. A template that cannot be rendered fails before the
    /// driver is touched.
    pub fn capture(
        &self,
        test: &dyn TestCase,
        overrides: &TemplateValues,
    ) -> Result<Option<PathBuf>, CallbackError> {
        let Some(driver) = test.driver() else {
            log::trace!("test {} has no driver, skipping screenshot", test.id());
            return Ok(None);
        };

        let path = self.template.render_path(&self.data(test, overrides))?;
        log::debug!("saving screenshot of {} to {}", test.id(), path.display());
        driver.save_screenshot(&path)?;
        Ok(Some(path))
    }
}

impl TestCallback for TakeScreenshotCallback {
    fn on_failure(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.capture(test, &TemplateValues::new()).map(drop)
    }

    fn on_error(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        self.capture(test, &TemplateValues::new().with("status", "error"))
            .map(drop)
    }
}

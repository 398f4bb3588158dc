use std::{
    borrow::Cow,
    env, fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use test_callbacks::prelude::*;

/// Stands in for a browser session, writes a placeholder file per screenshot.
#[derive(Debug)]
struct FileDriver;

impl ScreenshotDriver for FileDriver {
    fn save_screenshot(&self, path: &Path) -> Result<(), DriverError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, b"not really a png")?;
        Ok(())
    }
}

struct BrowserTest {
    name: &'static str,
    driver: Option<FileDriver>,
    body: fn() -> TestOutcome,
}

impl TestCase for BrowserTest {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name)
    }

    fn driver(&self) -> Option<&dyn ScreenshotDriver> {
        self.driver.as_ref().map(|driver| driver as &dyn ScreenshotDriver)
    }
}

/// Prints the outcome of every test it sees.
struct ConsoleReporter;

impl TestCallback for ConsoleReporter {
    fn on_success(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        println!("ok     {}", test.id());
        Ok(())
    }

    fn on_failure(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        println!("FAILED {}", test.id());
        Ok(())
    }

    fn on_error(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        println!("ERROR  {}", test.id());
        Ok(())
    }

    fn on_skip(&self, test: &dyn TestCase) -> Result<(), CallbackError> {
        println!("skip   {}", test.id());
        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let out_dir: PathBuf = env::temp_dir().join("test-callbacks-demo");
    let template = format!("{}/{{name}}_{{status}}_{{time}}.png", out_dir.display());
    let screenshots = match TakeScreenshotCallback::new(&template) {
        Ok(callback) => callback,
        Err(err) => {
            eprintln!("invalid screenshot template: {err}");
            return ExitCode::FAILURE;
        }
    };

    let instrumentation = with_callback::<BrowserTest>(ConsoleReporter).with_callback(screenshots);

    let tests = [
        BrowserTest {
            name: "login_page_loads",
            driver: Some(FileDriver),
            body: || TestOutcome::Success,
        },
        BrowserTest {
            name: "login_rejects_bad_password",
            driver: Some(FileDriver),
            body: || TestOutcome::failure("no error banner shown"),
        },
        BrowserTest {
            name: "api_health",
            driver: None,
            body: || TestOutcome::error("connection refused"),
        },
        BrowserTest {
            name: "legacy_checkout",
            driver: Some(FileDriver),
            body: || TestOutcome::skip("checkout v1 is retired"),
        },
    ];

    let mut callback_errors = 0;
    for test in tests {
        let test = instrumentation.instrument(test);
        let outcome = (test.body)();
        let report = test.notify_all(&outcome);
        callback_errors += report.errors.len();
    }

    println!("screenshots written to {}", out_dir.display());
    match callback_errors {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

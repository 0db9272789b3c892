use tracing::{debug, error};

/// Logs then panics, for failures that are bugs rather than user facing problems.
pub fn log_and_panic<Err: core::fmt::Display>(error: Err, message: &str) -> ! {
    error!("{message}: {error}");

    panic!("{message}: {error}");
}

/// Logs, tells the user the cropper is exiting, then panics.
pub fn report_and_panic<Err: core::fmt::Display>(error: Err, message: &str) -> ! {
    error!("{message}: {error}");
    eprintln!("ERROR:\n{message}.\nSee the logs for more details, the cropper will exit.");

    panic!("{message}: {error}");
}

/// Logs and tells the user about a failure the cropper can continue past.
pub fn report<Err: core::fmt::Display>(error: Err, message: &str) {
    error!("{message}: {error}");
    eprintln!("{message}.\nSee the logs for more details.");
}

pub trait Failure<T> {
    fn report_and_panic(self, message: &str) -> T;
    fn report(self, message: &str) -> Option<T>;
}

pub trait Ignore {
    fn ignore(self);
}

impl<T, E: core::fmt::Display> Failure<T> for Result<T, E> {
    fn report_and_panic(self, message: &str) -> T {
        self.unwrap_or_else(|error| report_and_panic(error, message))
    }

    fn report(self, message: &str) -> Option<T> {
        self.inspect_err(|error| report(error, message)).ok()
    }
}

impl<T> Failure<T> for Option<T> {
    fn report_and_panic(self, message: &str) -> T {
        self.unwrap_or_else(|| report_and_panic("Was None", message))
    }

    fn report(self, message: &str) -> Self {
        if self.is_none() {
            report("Was None", message);
        }

        self
    }
}

impl<T, E> Ignore for Result<T, E> {
    #[track_caller]
    fn ignore(self) {
        if self.is_err() {
            debug!("Ignoring error ({})", core::panic::Location::caller());
        }
    }
}

impl<T> Ignore for Option<T> {
    #[track_caller]
    fn ignore(self) {
        if self.is_none() {
            debug!("Ignoring None ({})", core::panic::Location::caller());
        }
    }
}

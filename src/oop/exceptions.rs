//! Exception handling mapped to `Result`.
//!
//! Failures are values: the caller matches on them next to the call, or lets `?`
//! carry them to an outer scope. A `finally` block becomes the statement after the
//! `match`, since nothing unwinds past it.

use crate::demo::Demo;
use crate::error::{DemoError, Raised};
use crate::transcript::Transcript;

/// Divides, recording where a zero divisor was rejected.
pub fn divide(dividend: f64, divisor: f64) -> Result<f64, Raised<DemoError>> {
    if divisor == 0.0 {
        return Err(Raised::here(DemoError::DivisionByZero));
    }
    Ok(dividend / divisor)
}

/// Checks a request and returns `"good"` when it passes.
pub fn process(request_uri: &str, name: &str) -> Result<&'static str, DemoError> {
    if request_uri.is_empty() {
        return Err(DemoError::NotFound);
    }
    if name.is_empty() {
        return Err(DemoError::validation("No Name"));
    }
    Ok("good")
}

/// Runs [`process`] and turns every outcome into display text at the call site.
pub fn describe_process(request_uri: &str, name: &str) -> String {
    match process(request_uri, name) {
        Ok(status) => status.to_string(),
        Err(DemoError::NotFound) => "Page Not Found".to_string(),
        Err(DemoError::Validation(message)) => message,
        Err(other) => other.to_string(),
    }
}

pub struct DivisionDemo;

impl Demo for DivisionDemo {
    fn name(&self) -> &'static str {
        "exception"
    }

    fn summary(&self) -> &'static str {
        "division by zero reported with its origin, then a cleanup step"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        match divide(5.0, 0.0) {
            Ok(quotient) => out.line(quotient.to_string()),
            Err(raised) => {
                let err = raised.error();
                out.line(format!(
                    "Exception thrown in {} on line {}: [Code {}]  {}",
                    raised.file(),
                    raised.line(),
                    err.code(),
                    err
                ));
            }
        }
        // finally
        out.line("Process Complete");
        Ok(())
    }
}

pub struct RequestDemo;

impl Demo for RequestDemo {
    fn name(&self) -> &'static str {
        "exception-kinds"
    }

    fn summary(&self) -> &'static str {
        "not-found and validation failures converted to messages"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        out.line(describe_process("xxx", ""));
        Ok(())
    }
}

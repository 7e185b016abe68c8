//! The `Demo` contract every demonstration implements, and the catalog of them.

use crate::error::DemoError;
use crate::oop::{abstraction, exceptions, interfaces, mixins};
use crate::solid::{
    dependency_inversion, interface_segregation, liskov_substitution, open_closed,
    single_responsibility,
};
use crate::transcript::Transcript;
use colored::Colorize;
use itertools::Itertools;
use thiserror::Error;

pub trait Demo {
    /// Stable name, also used as the binary name.
    fn name(&self) -> &'static str;

    fn summary(&self) -> &'static str;

    /// Writes the demonstration's output to `out`.
    ///
    /// Failures a demo handles itself end up as lines in `out`; anything returned as
    /// `Err` was left for the outermost caller to report.
    fn run(&self, out: &mut Transcript) -> Result<(), DemoError>;
}

/// All demonstrations, in presentation order.
pub fn catalog() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(abstraction::AbstractDemo),
        Box::new(interfaces::InterfaceDemo),
        Box::new(mixins::TraitsDemo),
        Box::new(exceptions::DivisionDemo),
        Box::new(exceptions::RequestDemo),
        Box::new(single_responsibility::SingleResponsibilityDemo),
        Box::new(open_closed::OpenClosedDemo),
        Box::new(liskov_substitution::LiskovSubstitutionDemo),
        Box::new(interface_segregation::InterfaceSegregationDemo),
        Box::new(dependency_inversion::RepositoryDemo),
        Box::new(dependency_inversion::PrintableDemo),
    ]
}

pub fn find(name: &str) -> Option<Box<dyn Demo>> {
    catalog().into_iter().find(|demo| demo.name() == name)
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown demonstration '{name}' (known: {known})")]
pub struct UnknownDemo {
    pub name: String,
    pub known: String,
}

/// Resolves names to demonstrations, keeping the requested order.
///
/// An empty request selects the whole catalog.
pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Vec<Box<dyn Demo>>, UnknownDemo> {
    if names.is_empty() {
        return Ok(catalog());
    }
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            find(name).ok_or_else(|| UnknownDemo {
                name: name.to_string(),
                known: catalog().iter().map(|d| d.name()).join(", "),
            })
        })
        .collect()
}

/// Runs one demonstration into a fresh transcript.
///
/// A failure the demo did not handle is returned next to whatever it wrote before
/// failing; the caller plays the part of the top-level catch.
pub fn capture(demo: &dyn Demo) -> (Transcript, Option<DemoError>) {
    let mut out = Transcript::new();
    tracing::debug!(demo = demo.name(), "running");
    match demo.run(&mut out) {
        Ok(()) => {
            tracing::debug!(demo = demo.name(), lines = out.len(), "finished");
            (out, None)
        }
        Err(err) => {
            tracing::warn!(
                demo = demo.name(),
                kind = ?err.kind(),
                error = %err,
                "uncaught failure"
            );
            (out, Some(err))
        }
    }
}

/// One `name: summary` line per demonstration in the catalog.
pub fn listing() -> String {
    catalog()
        .iter()
        .map(|demo| format!("{}: {}", demo.name(), demo.summary()))
        .join("\n")
}

pub fn header(name: &str, color: bool) -> String {
    let text = format!("== {name} ==");
    if color {
        text.bold().to_string()
    } else {
        text
    }
}

/// Output of a single demonstration, with an uncaught failure reported by its bare
/// message on the last line.
pub fn render_standalone(demo: &dyn Demo) -> String {
    let (mut out, failure) = capture(demo);
    if let Some(err) = failure {
        out.line(err.to_string());
    }
    out.render()
}

/// Runs every demonstration in turn under its own header, separated by blank lines.
///
/// A demonstration that fails is reported as `error: <message>` and the rest still run.
pub fn render_all(demos: &[Box<dyn Demo>], color: bool) -> String {
    let mut report = Transcript::new();
    for (i, demo) in demos.iter().enumerate() {
        if i > 0 {
            report.line("");
        }
        report.line(header(demo.name(), color));
        let (out, failure) = capture(demo.as_ref());
        report.extend(out.lines().iter().cloned());
        if let Some(err) = failure {
            report.line(format!("error: {err}"));
        }
    }
    report.render()
}

/// Entry point shared by the per-demonstration binaries.
pub fn run_standalone(demo: &dyn Demo) {
    crate::logging::init("warn");
    println!("{}", render_standalone(demo));
}

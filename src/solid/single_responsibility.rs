//! Single responsibility: `Report` holds data, `ReportPrinter` formats it.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    title: String,
    content: String,
}

impl Report {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Default)]
pub struct ReportPrinter;

impl ReportPrinter {
    pub fn print_report(&self, report: &Report, out: &mut Transcript) {
        out.line(format!("Title: {}", report.title()));
        out.line(format!("Content: {}", report.content()));
    }
}

pub struct SingleResponsibilityDemo;

impl Demo for SingleResponsibilityDemo {
    fn name(&self) -> &'static str {
        "single-responsibility"
    }

    fn summary(&self) -> &'static str {
        "report data and report printing kept in separate types"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        let report = Report::new(
            "Monthly Report",
            "This is the content of the monthly report.",
        );
        ReportPrinter.print_report(&report, out);
        Ok(())
    }
}

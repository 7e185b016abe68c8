//! Interface segregation: printing and scanning are separate contracts, so a plain
//! printer never has to stub out scanning.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::transcript::Transcript;

pub trait DocumentPrinter {
    fn print_document(&self, document: &str) -> String;
    fn print_photo(&self, photo: &str) -> String;
}

pub trait DocumentScanner {
    fn scan_document(&self, document: &str) -> String;
    fn scan_photo(&self, photo: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Printer;

impl DocumentPrinter for Printer {
    fn print_document(&self, document: &str) -> String {
        format!("Printing document: {document}")
    }

    fn print_photo(&self, photo: &str) -> String {
        format!("Printing photo: {photo}")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Scanner;

impl DocumentScanner for Scanner {
    fn scan_document(&self, document: &str) -> String {
        format!("Scanning document: {document}")
    }

    fn scan_photo(&self, photo: &str) -> String {
        format!("Scanning photo: {photo}")
    }
}

/// Needs both capabilities, so it implements both traits by delegating to the
/// single-purpose devices it is built from.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultiFunctionDevice {
    printer: Printer,
    scanner: Scanner,
}

impl DocumentPrinter for MultiFunctionDevice {
    fn print_document(&self, document: &str) -> String {
        self.printer.print_document(document)
    }

    fn print_photo(&self, photo: &str) -> String {
        self.printer.print_photo(photo)
    }
}

impl DocumentScanner for MultiFunctionDevice {
    fn scan_document(&self, document: &str) -> String {
        self.scanner.scan_document(document)
    }

    fn scan_photo(&self, photo: &str) -> String {
        self.scanner.scan_photo(photo)
    }
}

/// Copies a document; accepts anything that can do both jobs.
pub fn copy<D: DocumentPrinter + DocumentScanner>(device: &D, document: &str) -> [String; 2] {
    [device.scan_document(document), device.print_document(document)]
}

pub struct InterfaceSegregationDemo;

impl Demo for InterfaceSegregationDemo {
    fn name(&self) -> &'static str {
        "interface-segregation"
    }

    fn summary(&self) -> &'static str {
        "small printer and scanner contracts instead of one wide interface"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        let printer = Printer;
        let scanner = Scanner;
        out.line(printer.print_document("Report.pdf"));
        out.line(printer.print_photo("Image.jpg"));
        out.line(scanner.scan_document("Report.pdf"));
        out.line(scanner.scan_photo("Image.jpg"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer() {
        assert_eq!(Printer.print_document("a.pdf"), "Printing document: a.pdf");
        assert_eq!(Printer.print_photo("b.jpg"), "Printing photo: b.jpg");
    }

    #[test]
    fn test_scanner() {
        assert_eq!(Scanner.scan_document("a.pdf"), "Scanning document: a.pdf");
        assert_eq!(Scanner.scan_photo("b.jpg"), "Scanning photo: b.jpg");
    }

    #[test]
    fn test_multi_function_device_delegates() {
        let device = MultiFunctionDevice::default();
        assert_eq!(device.print_photo("x"), Printer.print_photo("x"));
        assert_eq!(device.scan_photo("x"), Scanner.scan_photo("x"));
        assert_eq!(
            copy(&device, "memo.txt"),
            ["Scanning document: memo.txt", "Printing document: memo.txt"]
        );
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        InterfaceSegregationDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "Printing document: Report.pdf",
                "Printing photo: Image.jpg",
                "Scanning document: Report.pdf",
                "Scanning photo: Image.jpg",
            ]
        );
    }
}

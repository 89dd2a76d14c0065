//! Interface Segregation Principle
//!
//! No client should be forced to depend on methods it does not use. Large
//! traits are split into role traits, and devices pick only the roles they
//! actually have.
//!
//! Run with: cargo run --bin solid_04_isp

use colored::Colorize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Document(String);

impl Document {
    fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum MachineError {
    #[error("{device} does not support {operation}")]
    Unsupported {
        device: &'static str,
        operation: &'static str,
    },
}

// =============================================================================
// The wrong way: one trait with every capability
// =============================================================================

trait Machine {
    fn print(&self, docs: &[Document]) -> Result<(), MachineError>;
    fn scan(&self) -> Result<Vec<Document>, MachineError>;
    fn fax(&self, docs: &[Document]) -> Result<(), MachineError>;
}

struct MultiFunctionDevice;

impl Machine for MultiFunctionDevice {
    fn print(&self, docs: &[Document]) -> Result<(), MachineError> {
        println!("Printing {} document(s)...", docs.len());
        Ok(())
    }

    fn scan(&self) -> Result<Vec<Document>, MachineError> {
        println!("Scanning...");
        Ok(vec![Document::new("scan-1")])
    }

    fn fax(&self, docs: &[Document]) -> Result<(), MachineError> {
        println!("Faxing {} document(s)...", docs.len());
        Ok(())
    }
}

/// Can only print, but the fat trait makes it answer for scan and fax too.
struct OldFashionedPrinter;

impl Machine for OldFashionedPrinter {
    fn print(&self, docs: &[Document]) -> Result<(), MachineError> {
        println!("Printing {} document(s)...", docs.len());
        Ok(())
    }

    fn scan(&self) -> Result<Vec<Document>, MachineError> {
        Err(MachineError::Unsupported {
            device: "OldFashionedPrinter",
            operation: "scan",
        })
    }

    fn fax(&self, _docs: &[Document]) -> Result<(), MachineError> {
        Err(MachineError::Unsupported {
            device: "OldFashionedPrinter",
            operation: "fax",
        })
    }
}

// =============================================================================
// The right way: role traits, composed only where needed
// =============================================================================

trait Printer {
    fn print(&self, docs: &[Document]);
}

trait Scanner {
    fn scan(&self) -> Vec<Document>;
}

trait Fax {
    fn fax(&self, docs: &[Document]);
}

trait PrinterAndScanner: Printer + Scanner {}

impl<T: Printer + Scanner> PrinterAndScanner for T {}

struct SimplePrinter;

impl Printer for SimplePrinter {
    fn print(&self, docs: &[Document]) {
        println!("Printing {} document(s)...", docs.len());
    }
}

struct PhotoCopier {
    pages: usize,
}

impl Printer for PhotoCopier {
    fn print(&self, docs: &[Document]) {
        println!("Printing {} document(s)...", docs.len());
    }
}

impl Scanner for PhotoCopier {
    fn scan(&self) -> Vec<Document> {
        println!("Scanning {} page(s)...", self.pages);
        (1..=self.pages)
            .map(|page| Document::new(format!("page-{page}")))
            .collect()
    }
}

struct FaxMachine;

impl Fax for FaxMachine {
    fn fax(&self, docs: &[Document]) {
        println!("Faxing {} document(s)...", docs.len());
    }
}

fn print_all(printer: &dyn Printer, docs: &[Document]) {
    printer.print(docs);
}

/// Scans and prints the result, the way a copier works.
fn copy(device: &dyn PrinterAndScanner) -> usize {
    let docs = device.scan();
    device.print(&docs);
    docs.len()
}

fn exercise(name: &str, machine: &dyn Machine, docs: &[Document]) {
    println!("{name}:");
    let results = [
        machine.print(docs),
        machine.scan().map(|_| ()),
        machine.fax(docs),
    ];
    for err in results.into_iter().filter_map(Result::err) {
        eprintln!("  {} {err}", "error:".red());
    }
}

fn main() {
    println!("=== Interface Segregation Principle ===\n");
    let docs = vec![Document::new("report"), Document::new("invoice")];

    println!("{}", "--- The wrong way ---".red());
    exercise("MultiFunctionDevice", &MultiFunctionDevice, &docs);
    exercise("OldFashionedPrinter", &OldFashionedPrinter, &docs);

    println!("\n{}", "--- The right way ---".green());
    print_all(&SimplePrinter, &docs);

    let copier = PhotoCopier { pages: 3 };
    let copied = copy(&copier);
    println!("Copied {copied} page(s)");

    FaxMachine.fax(&docs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer_only_device_needs_no_scan_or_fax() {
        struct LabelPrinter;

        impl Printer for LabelPrinter {
            fn print(&self, _docs: &[Document]) {}
        }

        let docs = [Document::new("label")];
        let printers: [&dyn Printer; 2] = [&LabelPrinter, &SimplePrinter];
        for printer in printers {
            print_all(printer, &docs);
        }
    }

    #[test]
    fn test_fax_only_device_needs_no_printing() {
        use std::cell::Cell;

        struct CountingFax {
            sent: Cell<usize>,
        }

        impl Fax for CountingFax {
            fn fax(&self, docs: &[Document]) {
                self.sent.set(self.sent.get() + docs.len());
            }
        }

        let docs = [Document::new("contract"), Document::new("invoice")];
        let counting = CountingFax { sent: Cell::new(0) };
        let faxes: [&dyn Fax; 2] = [&counting, &FaxMachine];
        for fax in faxes {
            fax.fax(&docs);
        }
        assert_eq!(counting.sent.get(), 2);
    }

    #[test]
    fn test_photocopier_is_printer_and_scanner() {
        let copier = PhotoCopier { pages: 2 };
        let scanned = copier.scan();
        let expected = [Document::new("page-1"), Document::new("page-2")];
        assert_eq!(scanned, expected);
        assert_eq!(copy(&copier), 2);
    }

    #[test]
    fn test_fat_trait_forces_unsupported_stubs() {
        let printer = OldFashionedPrinter;
        assert!(printer.print(&[]).is_ok());
        assert_eq!(
            printer.scan(),
            Err(MachineError::Unsupported {
                device: "OldFashionedPrinter",
                operation: "scan",
            })
        );
        let err = printer.fax(&[]).unwrap_err();
        assert_eq!(err.to_string(), "OldFashionedPrinter does not support fax");
    }

    #[test]
    fn test_multi_function_device_supports_everything() {
        let device = MultiFunctionDevice;
        let docs = [Document::new("a")];
        assert!(device.print(&docs).is_ok());
        assert_eq!(device.scan().unwrap().len(), 1);
        assert!(device.fax(&docs).is_ok());
    }
}

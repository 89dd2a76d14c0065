//! Dependency Inversion Principle
//!
//! High-level modules should not depend on low-level modules; both should
//! depend on abstractions. The manager talks to `dyn Worker`, never to a
//! concrete worker type.
//!
//! Run with: cargo run --bin solid_05_dip

use colored::Colorize;

// =============================================================================
// The wrong way: the manager knows every concrete worker type
// =============================================================================

struct RegularWorker;

impl RegularWorker {
    fn work(&self) -> String {
        "Working...".to_string()
    }
}

struct SpecialWorker;

impl SpecialWorker {
    fn work(&self) -> String {
        "Especially working...".to_string()
    }
}

#[derive(Default)]
struct SpecificManager {
    regular_workers: Vec<RegularWorker>,
    special_workers: Vec<SpecialWorker>,
}

impl SpecificManager {
    fn new() -> Self {
        Self::default()
    }

    fn add_regular_worker(&mut self, worker: RegularWorker) {
        self.regular_workers.push(worker);
    }

    fn add_special_worker(&mut self, worker: SpecialWorker) {
        self.special_workers.push(worker);
    }

    // A new worker kind means a new field, a new add method and a new loop.
    fn delegate_work(&self) -> Vec<String> {
        let mut output = Vec::new();
        for worker in &self.regular_workers {
            output.push(worker.work());
        }
        for worker in &self.special_workers {
            output.push(worker.work());
        }
        output
    }
}

// =============================================================================
// The right way: everyone depends on the Worker abstraction
// =============================================================================

trait Worker {
    fn work(&self) -> String;
}

impl Worker for RegularWorker {
    fn work(&self) -> String {
        RegularWorker::work(self)
    }
}

impl Worker for SpecialWorker {
    fn work(&self) -> String {
        SpecialWorker::work(self)
    }
}

struct ContractWorker {
    agency: String,
}

impl Worker for ContractWorker {
    fn work(&self) -> String {
        format!("Working on contract for {}...", self.agency)
    }
}

#[derive(Default)]
struct Manager {
    workers: Vec<Box<dyn Worker>>,
}

impl Manager {
    fn new() -> Self {
        Self::default()
    }

    fn add_worker(&mut self, worker: Box<dyn Worker>) {
        self.workers.push(worker);
    }

    /// Runs every worker once, in the order they were added.
    fn delegate_work(&self) -> Vec<String> {
        self.workers.iter().map(|worker| worker.work()).collect()
    }
}

fn main() {
    println!("=== Dependency Inversion Principle ===\n");

    println!("{}", "--- The wrong way, no abstractions ---".red());
    let mut specific_manager = SpecificManager::new();
    specific_manager.add_regular_worker(RegularWorker);
    specific_manager.add_special_worker(SpecialWorker);
    for line in specific_manager.delegate_work() {
        println!("{line}");
    }

    println!("\n{}", "--- The right way ---".green());
    let mut manager = Manager::new();
    manager.add_worker(Box::new(RegularWorker));
    manager.add_worker(Box::new(SpecialWorker));
    manager.add_worker(Box::new(ContractWorker {
        agency: "Acme Staffing".to_string(),
    }));
    for line in manager.delegate_work() {
        println!("{line}");
    }
}

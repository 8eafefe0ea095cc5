//! Scripted demo: submit a fixed mix of tasks, drain the dispatcher, and
//! print a machine-readable summary for the CLI integration checks.

use crate::dispatcher::Dispatcher;
use crate::error::TaskError;
use crate::types::Priority;

/// Fixed submission script, interleaving both lanes.
const DEMO_TASKS: [(&str, Priority); 6] = [
    ("triage the inbox", Priority::Normal),
    ("restart the payment service", Priority::High),
    ("rotate build logs", Priority::Normal),
    ("page the on-call", Priority::High),
    ("refresh the dependency audit", Priority::Normal),
    ("apply the security patch", Priority::High),
];

/// Run the demo script and report whether the dispatch contract held.
pub fn run_demo() -> Result<(), TaskError> {
    let mut dispatcher = Dispatcher::new();

    for (description, priority) in DEMO_TASKS {
        dispatcher.submit(description, priority)?;
        println!("submitted: {description} ({priority})");
    }

    let submitted = dispatcher.pending();
    let mut dispatched = 0usize;
    let mut seen_normal = false;
    let mut high_before_normal = true;
    while let Some(task) = dispatcher.dispatch_next() {
        // A high task after the first normal one breaks the contract.
        match task.priority {
            Priority::Normal => seen_normal = true,
            Priority::High if seen_normal => high_before_normal = false,
            Priority::High => {}
        }
        println!(
            "dispatching: {} (priority {})",
            task.description,
            task.priority.level()
        );
        dispatched += 1;
    }
    debug_assert!(dispatcher.is_empty());

    println!("DEMO SUMMARY");
    println!("submitted={submitted}");
    println!("dispatched={dispatched}");
    println!("high_before_normal={high_before_normal}");
    println!("remaining={}", dispatcher.pending());
    Ok(())
}

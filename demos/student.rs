//! Student Day
//!
//! This example walks a small state machine through a day and back again.
//!
//! Key concepts:
//! - Declaring a state table with the fsm_config! macro
//! - Event-driven transitions and direct state changes
//! - Undo markers and single-level redo
//! - Structured logging of every recorded action
//!
//! Run with: RUST_LOG=waypoint=debug cargo run --example student

use tracing_subscriber::EnvFilter;
use waypoint::{fsm_config, Fsm};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Student Day Example ===\n");

    let mut student = Fsm::new(fsm_config! {
        initial: normal,
        states: {
            normal => { study => busy },
            busy => { get_tired => sleeping, get_hungry => hungry },
            hungry => { eat => normal },
            sleeping => { get_hungry => hungry, get_up => normal },
        }
    });

    println!("All states: {:?}", student.states(None));
    println!("States that can get hungry: {:?}", student.states(Some("get_hungry")));
    println!("Initial state: {}", student.state());

    for event in ["study", "get_hungry", "study"] {
        match student.trigger(event) {
            Ok(()) => println!("  {} -> {}", event, student.state()),
            Err(e) => println!("  {} rejected: {}", event, e),
        }
    }

    println!("\nUndoing:");
    while student.undo() {
        println!("  back to {}", student.state());
    }

    println!("\nRedo once: {} (now {})", student.redo(), student.state());
    println!("Redo again: {} (still {})", student.redo(), student.state());

    println!("\nRecorded path: {:?}", student.history().get_path());

    student.clear_history();
    println!("After clearing: {} action(s), can undo: {}", student.history().len(), student.can_undo());

    println!("\n=== Example Complete ===");
}

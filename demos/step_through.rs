//! Step Through a Solution
//!
//! This demo drives a session the way a UI shell would: pick a disk count,
//! step forward, scrub with a seek, step back, and print the pegs.
//!
//! Key concepts:
//! - The disk picker is a clamped counter
//! - Every position of the solution is precomputed, so seeks are instant
//! - Stepping past either end is harmless
//!
//! Run with: RUST_LOG=fast_hanoi=debug cargo run --example step_through

use fast_hanoi::core::{Peg, PilesState};
use fast_hanoi::{HanoiConfig, HanoiSession};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn render(piles: &PilesState) -> String {
    Peg::ALL
        .iter()
        .map(|&peg| format!("{}: {:?}", peg, piles.peg(peg)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    println!("=== Fast Hanoi Step Through ===\n");

    let mut session = HanoiSession::new(HanoiConfig::default())?;
    session.counter_mut().decrement();
    println!("Disks chosen: {}", session.counter().value());

    session.proceed()?;
    let machine = session
        .machine_mut()
        .ok_or("session should be running after proceed")?;

    println!("\nStepping forward:");
    println!("  {:>2}  {}", machine.cursor(), render(machine.piles()));
    while machine.step() {
        let moved = machine
            .last_move()
            .map(|mv| mv.to_string())
            .unwrap_or_default();
        println!(
            "  {:>2}  {}   move {}",
            machine.cursor(),
            render(machine.piles()),
            moved
        );
    }
    println!("Solved, extra step ignored: {}", !machine.step());

    println!("\nSeeking to 3 and stepping back:");
    machine.set_to(3);
    println!("  {:>2}  {}", machine.cursor(), render(machine.piles()));
    machine.step_back();
    println!("  {:>2}  {}", machine.cursor(), render(machine.piles()));

    println!("\nSeek past the end is clamped to {}", machine.set_to(99));

    session.go_back();
    println!("\nBack in menu with {} disks", session.counter().value());

    println!("\n=== Demo Complete ===");
    Ok(())
}

//! Guide Pulse Walkthrough
//!
//! This demo drives the guide controller with in-memory collaborators.
//!
//! Key concepts:
//! - Offset-mode pulses at guide rates up to 2x
//! - Slew-mode nudges with an asynchronous brake
//! - Deadlines enforced by the control-tick poll
//! - Admission checks rejecting unsafe requests
//!
//! Run with: cargo run --example guide_pulse

use mount_guide::core::{Axis, GuideAction, GuideRateSelect, MountState};
use mount_guide::testing::test_controller;

fn main() {
    println!("=== Guide Pulse Walkthrough ===\n");

    let mut controller = test_controller();
    let mount = MountState::default();

    // Autoguider correction: 0.5x west for 400 ms
    controller
        .start(
            Axis::Axis1,
            GuideAction::Reverse,
            GuideRateSelect::Half,
            400,
            &mount,
        )
        .unwrap();
    println!(
        "Pulse started: axis1 offset {:+.2}x",
        controller.session(Axis::Axis1).offset_rate()
    );

    for _ in 0..4 {
        controller.clock().advance(100);
        controller.poll();
    }
    println!(
        "After 400 ms: axis1 is {}\n",
        controller.session(Axis::Axis1).action().name()
    );

    // Hand-controller nudge: 20x north until released
    controller
        .start(
            Axis::Axis2,
            GuideAction::Forward,
            GuideRateSelect::TwentyX,
            0,
            &mount,
        )
        .unwrap();
    println!("Nudge started: axis2 mode {:?}", controller.session(Axis::Axis2).mode());

    controller.stop(Axis::Axis2);
    println!(
        "Button released: axis2 is {}",
        controller.session(Axis::Axis2).action().name()
    );

    controller.actuator_mut(Axis::Axis2).finish_slew();
    controller.poll();
    println!(
        "Slew decelerated: axis2 is {}\n",
        controller.session(Axis::Axis2).action().name()
    );

    // Requests are refused while parked
    let parked = MountState {
        parked: true,
        ..mount
    };
    match controller.start(
        Axis::Axis1,
        GuideAction::Forward,
        GuideRateSelect::OneX,
        0,
        &parked,
    ) {
        Ok(()) => println!("Unexpectedly accepted"),
        Err(error) => println!("Refused while parked: {}", error),
    }

    println!("\nTransition history:");
    for transition in controller.history().transitions() {
        println!(
            "  t={:>4} ms  {}  {} -> {} ({:?})",
            transition.at.as_millis(),
            transition.axis,
            transition.from.name(),
            transition.to.name(),
            transition.cause
        );
    }

    println!("\nStatus: {}", controller.status().to_json().unwrap());

    println!("\n=== Demo Complete ===");
}

//! Mod-Three Remainder
//!
//! This example computes the remainder of binary numbers modulo 3 by
//! simulating a three-state machine instead of doing arithmetic.
//!
//! Key concepts:
//! - One machine instance reused across independent runs
//! - Every run resets the cursor first
//! - Invalid digits surface as an error, not a wrong answer
//!
//! Run with: cargo run --example mod_three -- 1101 1001 111
//! Set RUST_LOG=debug to see every transition.

use statecraft::ModThree;

fn main() {
    env_logger::init();

    println!("=== Mod-Three Example ===\n");

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs.push("1101".to_string());
    }

    let mut fsm = ModThree::new();
    for binary in &inputs {
        match fsm.run(binary) {
            Ok(remainder) => println!("Remainder of binary '{binary}' mod 3 is: {remainder}"),
            Err(e) => println!("Cannot read '{binary}': {e}"),
        }
    }

    println!("\n=== Example Complete ===");
}

//! Machine From JSON
//!
//! This example loads a turnstile machine from a JSON configuration,
//! records its transitions, and checks which coin/push sequences leave it
//! locked.
//!
//! Key concepts:
//! - Configurations are plain data validated at construction
//! - A history recorder observes transitions without affecting them
//! - `final_state` asserts acceptance; `accepts` answers yes or no
//!
//! Run with: cargo run --example json_machine

use statecraft::{HistoryRecorder, Machine, MachineConfig};

const TURNSTILE: &str = r#"{
    "states": ["locked", "unlocked"],
    "alphabet": ["coin", "push"],
    "initial": "locked",
    "finals": ["locked"],
    "transitions": {
        "locked": { "coin": "unlocked", "push": "locked" },
        "unlocked": { "coin": "unlocked", "push": "locked" }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== JSON Machine Example ===\n");

    let config: MachineConfig<String, String> = MachineConfig::from_json(TURNSTILE)?;
    let recorder = HistoryRecorder::new();
    let mut turnstile = Machine::new(config)?.with_sink(recorder.clone());

    for sequence in [
        vec!["coin", "push"],
        vec!["coin"],
        vec!["push", "push", "coin", "coin", "push"],
    ] {
        let symbols: Vec<String> = sequence.iter().map(|s| s.to_string()).collect();
        let locked = turnstile.accepts(&symbols)?;
        println!("{sequence:?} -> {} (locked: {locked})", turnstile.current_state());
    }

    match turnstile.run(["kick".to_string()]) {
        Ok(state) => println!("kick -> {state}"),
        Err(e) => println!("kick rejected: {e}"),
    }

    println!("\nRecorded {} transitions:", recorder.len());
    for event in recorder.snapshot().events() {
        println!("  {} --{}--> {}", event.from, event.symbol, event.to);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

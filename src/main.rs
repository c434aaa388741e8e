//! Headless scenario runner
//!
//! Reads a scenario JSON, steps the world through the scripted inputs and
//! prints one CSV row per tick, so traces from different runs or machines
//! can be diffed directly.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use wheelbound::scenario::Scenario;
use wheelbound::sim::tick;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: wheelbound <scenario.json>");
        return ExitCode::FAILURE;
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("failed to read {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let scenario = match Scenario::from_json(&raw) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("invalid scenario {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut world = match scenario.build_world() {
        Ok(world) => world,
        Err(err) => {
            eprintln!("invalid world configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("tick,x,y,vx,vy,grounded");
    for (frame, input) in scenario.frames.iter().enumerate() {
        let _ = tick(&mut world, input);
        let snap = world.snapshot();
        println!(
            "{},{},{},{},{},{}",
            frame,
            snap.position.x,
            snap.position.y,
            snap.velocity.x,
            snap.velocity.y,
            u8::from(snap.grounded)
        );
    }
    ExitCode::SUCCESS
}

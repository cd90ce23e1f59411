//! World generator binary: builds one world and prints its statistics.
//!
//! Usage: cargo run --release --bin generate_world -- [OPTIONS]
//!
//! Options:
//!   --config <FILE>    JSON WorldConfig (flags below override its fields)
//!   --radius <R>       World radius (default: 40)
//!   --height <H>       Max terrain height (default: 10)
//!   --shape <SHAPE>    circle | rectangle (default: circle)
//!   --seed <SEED>      Fixed seed (default: fresh every run)
//!   --ticks <N>        Cloud animation ticks to simulate at 60 Hz (default: 0)

use std::process::ExitCode;

use serde_json::json;

use hexscape::core::logging;
use hexscape::generation::WorldConfig;
use hexscape::scene::{RecordingSink, SceneHost, TextureHandle, TextureSurface};
use hexscape::terrain::WorldShape;

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let ticks = parse_usize_arg(&args, "--ticks").unwrap_or(0);

    // Placeholder handles: surface index + 1
    let textures = |surface: TextureSurface| Some(TextureHandle(surface as u64 + 1));
    let mut host = SceneHost::new(RecordingSink::new(), textures);

    if let Err(e) = host.rebuild_world(&config) {
        log::error!("World build failed: {}", e);
        return ExitCode::FAILURE;
    }

    let mut respawns = 0;
    for _ in 0..ticks {
        respawns += host.tick(1.0 / 60.0);
    }

    let Some(world) = host.world() else {
        return ExitCode::FAILURE;
    };
    let summary = json!({
        "config": config,
        "stats": world.stats,
        "scene_nodes": host.node_count(),
        "cloud_ticks": ticks,
        "cloud_respawns": respawns,
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            log::error!("Failed to encode summary: {}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn build_config(args: &[String]) -> hexscape::core::Result<WorldConfig> {
    let mut config = match parse_str_arg(args, "--config") {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };

    if let Some(radius) = parse_f32_arg(args, "--radius") {
        config.radius = radius;
    }
    if let Some(height) = parse_f32_arg(args, "--height") {
        config.max_height = height;
    }
    if let Some(shape) = parse_str_arg(args, "--shape") {
        config.shape = match shape.as_str() {
            "rectangle" => WorldShape::Rectangle,
            "circle" => WorldShape::Circle,
            other => {
                return Err(hexscape::core::Error::InvalidConfig(format!(
                    "unknown shape '{}'",
                    other
                )));
            }
        };
    }
    if let Some(seed) = parse_u64_arg(args, "--seed") {
        config.seed = Some(seed);
    }

    config.validate()?;
    Ok(config)
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

// Copyright (c) 2024 Mike Tsao. All rights reserved.

//! Command-line front end: generates a performance and prints its schedule.

use anyhow::Result;
use clap::Parser;
use in_c::prelude::*;

#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Args {
    /// Number of performers in the ensemble.
    #[arg(short, long, default_value_t = 8)]
    ensemble_size: usize,

    /// Seed for the entropy source; zero means a fresh performance each run.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Shortest desired time on one phrase, in seconds.
    #[arg(long, default_value_t = 25.0)]
    min_phrase_duration: f64,

    /// Longest desired time on one phrase, in seconds.
    #[arg(long, default_value_t = 100.0)]
    max_phrase_duration: f64,

    /// Lower bound of note-on jitter, in beats.
    #[arg(long, default_value_t = 0.0)]
    min_slop: f64,

    /// Upper bound of note-on jitter, in beats.
    #[arg(long, default_value_t = 0.0)]
    max_slop: f64,

    /// Print the materialized recording as JSON instead of the summaries.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = ConfigBuilder::default()
        .ensemble_size(args.ensemble_size)
        .seed(u128::from(args.seed))
        .min_phrase_duration_seconds(args.min_phrase_duration)
        .max_phrase_duration_seconds(args.max_phrase_duration)
        .min_slop(args.min_slop)
        .max_slop(args.max_slop)
        .build()?;

    let score = Score::in_c();
    let mut entropy = SeededEntropy::new(&config);
    let mut generator = BasicPerformanceGenerator::new(&config, score)?;
    let performance = generator.generate(&mut entropy);
    log::info!(
        "generated {} parts from seed {}",
        performance.parts.len(),
        config.seed
    );

    let recording = Recording::new(&performance, score, &mut entropy);
    log::info!("sequence length {:.2} beats", recording.sequence_length);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recording)?);
    } else {
        println!("{}", performance.play_counts());
        println!("{}", performance.timelines(score));
        println!("sequence length: {:.2} beats", recording.sequence_length);
    }
    Ok(())
}

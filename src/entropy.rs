// Copyright (c) 2024 Mike Tsao. All rights reserved.

//! The single sequential randomness stream that drives a performance.

use crate::{
    config::Config,
    types::{MusicTimeStamp, REFERENCE_TEMPO_BPM},
};
use byteorder::{BigEndian, ByteOrder};

/// The randomness operations the scheduling and materialization pipeline
/// consumes. Everything is drawn from one sequential stream, in one fixed
/// total order, so that a fixed seed reproduces a performance exactly.
pub trait Entropy: core::fmt::Debug {
    /// A uniform draw in [0, 1).
    fn uniform(&mut self) -> f64;

    /// A uniform integer draw in [0, 100), compared against a move
    /// probability expressed in percent.
    fn percent_draw(&mut self) -> i64;

    /// How many times a performer should want to repeat a phrase of the
    /// given duration (in beats). Drawn from a Gaussian over a target
    /// phrase-playing time, then converted to a repetition count.
    fn repetition_count(&mut self, phrase_duration: MusicTimeStamp) -> usize;

    /// Random onset jitter for one note, in beats.
    fn slop(&mut self) -> MusicTimeStamp;
}

/// A seeded [Entropy] implementation. Pass the same nonzero seed in [Config]
/// to get the same stream back again; a zero seed draws a fresh seed from the
/// OS, making the performance unrepeatable.
#[derive(Debug)]
pub struct SeededEntropy {
    rng: oorandom::Rand64,
    // Gaussian repetition range, in beats at the reference tempo.
    low_beats: f64,
    high_beats: f64,
    min_slop: MusicTimeStamp,
    max_slop: MusicTimeStamp,
}
impl SeededEntropy {
    /// Creates a [SeededEntropy] for the given configuration. The Gaussian
    /// repetition range is fixed here, once, from the configured phrase
    /// durations in seconds at the 120 BPM reference.
    pub fn new(config: &Config) -> Self {
        let seed = if config.seed > 0 {
            config.seed
        } else {
            // We want to panic if this fails, because it indicates that a
            // core OS facility isn't functioning.
            Self::generate_seed().unwrap()
        };
        let beats_per_second = REFERENCE_TEMPO_BPM / 60.0;
        Self {
            rng: oorandom::Rand64::new(seed),
            low_beats: (beats_per_second * config.min_phrase_duration_seconds).floor(),
            high_beats: (beats_per_second * config.max_phrase_duration_seconds).floor(),
            min_slop: config.min_slop,
            max_slop: config.max_slop,
        }
    }

    fn generate_seed() -> anyhow::Result<u128> {
        let mut bytes = [0u8; 16];
        getrandom::getrandom(&mut bytes)?;
        Ok(BigEndian::read_u128(&bytes))
    }

    /// A standard-normal sample via Box-Muller. Always consumes exactly two
    /// uniform draws, which keeps stream consumption deterministic.
    fn gaussian(&mut self) -> f64 {
        let u1 = 1.0 - self.rng.rand_float(); // (0, 1], so ln() is defined
        let u2 = self.rng.rand_float();
        (-2.0 * u1.ln()).sqrt() * (core::f64::consts::TAU * u2).cos()
    }
}
impl Entropy for SeededEntropy {
    fn uniform(&mut self) -> f64 {
        self.rng.rand_float()
    }

    fn percent_draw(&mut self) -> i64 {
        self.rng.rand_range(0..100) as i64
    }

    fn repetition_count(&mut self, phrase_duration: MusicTimeStamp) -> usize {
        // An integer Gaussian over [low, high] beats: mean at the center,
        // deviation a sixth of the span, clamped to the range.
        let mean = (self.low_beats + self.high_beats) / 2.0;
        let deviation = (self.high_beats - self.low_beats) / 6.0;
        let beats = (mean + deviation * self.gaussian())
            .round()
            .clamp(self.low_beats, self.high_beats);
        (beats / phrase_duration).ceil() as usize
    }

    fn slop(&mut self) -> MusicTimeStamp {
        self.uniform() * (self.max_slop - self.min_slop) + self.min_slop
    }
}

// Copyright (c) 2024 Mike Tsao. All rights reserved.

#![warn(missing_docs)]

//! The `in-c` crate generates ensemble performances of Terry Riley's "In C":
//! 53 short phrases that every performer plays in order, each repeating a
//! phrase as long as it likes before moving on, loosely held together by the
//! rest of the ensemble.
//!
//! The pipeline is pure and deterministic for a fixed seed:
//!
//! 1. [Score](score::Score) holds the fixed phrase catalog.
//! 2. [BasicPerformanceGenerator](performance::BasicPerformanceGenerator)
//!    runs the lock-step ensemble simulation and produces a
//!    [Performance](performance::Performance), one immutable
//!    [Part](performance::Part) per performer.
//! 3. [Recording](recording::Recording) materializes each part into a timed
//!    track of note events for a sound-generation backend.
//!
//! All randomness flows through a single sequential
//! [Entropy](entropy::Entropy) stream, so two runs with the same seed and
//! configuration produce identical recordings.

pub mod config;
pub mod entropy;
pub mod performance;
pub mod recording;
pub mod score;
pub mod types;

/// The most commonly used imports.
pub mod prelude {
    pub use super::{
        config::{Config, ConfigBuilder, Error},
        entropy::{Entropy, SeededEntropy},
        performance::prelude::*,
        recording::{NoteEvent, Recording, Track},
        score::prelude::*,
        types::MusicTimeStamp,
    };
}

// Copyright (c) 2024 Mike Tsao. All rights reserved.

//! Configuration of a performance-generation run.

use crate::types::MusicTimeStamp;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Everything that can go wrong before a simulation starts. The pure
/// computation itself has no recoverable failures; anything else is a broken
/// invariant and panics.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The ensemble needs at least one performer.
    #[error("ensemble size must be at least 1")]
    InvalidEnsembleSize,
    /// Phrase durations must be positive and min must not exceed max.
    #[error("phrase duration range {min}..={max} seconds is invalid")]
    InvalidPhraseDurations {
        #[allow(missing_docs)]
        min: f64,
        #[allow(missing_docs)]
        max: f64,
    },
    /// Slop min must not exceed max.
    #[error("slop range {min}..={max} is invalid")]
    InvalidSlopRange {
        #[allow(missing_docs)]
        min: MusicTimeStamp,
        #[allow(missing_docs)]
        max: MusicTimeStamp,
    },
    /// The score has no phrases at all.
    #[error("score has no phrases")]
    EmptyScore,
    /// A zero-duration phrase would stall the shared clock.
    #[error("every score phrase must have a nonzero duration")]
    ZeroDurationScore,
    /// The builder itself failed. All fields have defaults, so this only
    /// happens if the builder API grows a required field.
    #[error("configuration: {0}")]
    Config(String),
}

/// Inputs to performance generation. Build one with [ConfigBuilder], which
/// supplies the defaults and validates the result.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[builder(build_fn(private, name = "build_from_builder"))]
pub struct Config {
    /// Number of performers in the ensemble.
    #[builder(default = "8")]
    pub ensemble_size: usize,

    /// Seed for the entropy source. Zero (the default) asks for a fresh,
    /// non-reproducible performance; any other value reproduces one exactly.
    #[builder(default)]
    pub seed: u128,

    /// Shortest time a performer should want to stay on one phrase.
    #[builder(default = "25.0")]
    pub min_phrase_duration_seconds: f64,

    /// Longest time a performer should want to stay on one phrase.
    #[builder(default = "100.0")]
    pub max_phrase_duration_seconds: f64,

    /// Lower bound of note-on jitter, in beats.
    #[builder(default)]
    pub min_slop: MusicTimeStamp,

    /// Upper bound of note-on jitter, in beats. Zero (with zero min) means
    /// no jitter at all.
    #[builder(default)]
    pub max_slop: MusicTimeStamp,
}
impl ConfigBuilder {
    /// Builds and validates the [Config].
    pub fn build(&self) -> Result<Config, Error> {
        match self.build_from_builder() {
            Ok(config) => {
                config.validate()?;
                Ok(config)
            }
            Err(e) => Err(Error::Config(e.to_string())),
        }
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            ensemble_size: 8,
            seed: 0,
            min_phrase_duration_seconds: 25.0,
            max_phrase_duration_seconds: 100.0,
            min_slop: 0.0,
            max_slop: 0.0,
        }
    }
}
impl Config {
    /// Fail-fast validation, run before any simulation starts. No partial
    /// schedule is ever produced from a bad configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.ensemble_size == 0 {
            return Err(Error::InvalidEnsembleSize);
        }
        if self.min_phrase_duration_seconds <= 0.0
            || self.max_phrase_duration_seconds <= 0.0
            || self.min_phrase_duration_seconds > self.max_phrase_duration_seconds
        {
            return Err(Error::InvalidPhraseDurations {
                min: self.min_phrase_duration_seconds,
                max: self.max_phrase_duration_seconds,
            });
        }
        if self.min_slop > self.max_slop {
            return Err(Error::InvalidSlopRange {
                min: self.min_slop,
                max: self.max_slop,
            });
        }
        Ok(())
    }
}

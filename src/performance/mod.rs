// Copyright (c) 2024 Mike Tsao. All rights reserved.

//! The ensemble simulation: lock-step scheduling of performers and the
//! immutable per-performer [Part]s it produces.

use serde::{Deserialize, Serialize};

/// The most commonly used imports.
pub mod prelude {
    pub use super::{BasicPerformanceGenerator, Part, Performance, PerformanceGenerator};
}

pub use generator::{BasicPerformanceGenerator, PerformanceGenerator};
pub use part::Part;
pub use performer::Performer;
pub use stats::PerformerStats;

mod generator;
mod part;
mod performer;
mod stats;

use crate::score::Score;

/// A complete ensemble schedule: one [Part] per performer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Performance {
    /// The parts, in ensemble order.
    pub parts: Vec<Part>,
}
impl Performance {
    /// Creates a [Performance] from finalized parts.
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Every part's play counts, one line per performer.
    pub fn play_counts(&self) -> String {
        self.parts
            .iter()
            .map(|part| {
                part.play_counts
                    .iter()
                    .map(|count| count.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every part's progress timeline, one line per performer.
    pub fn timelines(&self, score: &Score) -> String {
        self.parts
            .iter()
            .map(|part| part.timeline(score))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

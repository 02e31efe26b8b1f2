// Copyright (c) 2024 Mike Tsao. All rights reserved.

//! The fixed musical score: phrases, notes, and the "In C" catalog.

use crate::config::Error;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The most commonly used imports.
pub mod prelude {
    pub use super::{Note, Phrase, Pitch, Score};
}

pub use note::{Note, Pitch, Ticks};
pub use phrase::Phrase;

mod catalog;
pub mod note;
mod phrase;

static IN_C: Lazy<Score> = Lazy::new(|| Score::new(catalog::phrases()));

/// An ordered, immutable list of [Phrase]s. The catalog is fixed at startup
/// and read-only for the lifetime of the process, so all performers can share
/// one instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Score {
    phrases: Vec<Phrase>,
    beats: Vec<usize>,
}
impl Score {
    /// Creates a [Score] from an arbitrary phrase list. Most callers want
    /// [Score::in_c] instead; this exists for tests and experiments.
    pub fn new(phrases: Vec<Phrase>) -> Self {
        let beats = phrases.iter().map(Phrase::beats).collect();
        Self { phrases, beats }
    }

    /// The shared "In C" score: a whole-rest lead-in phrase followed by the
    /// 53 phrases of the piece.
    pub fn in_c() -> &'static Self {
        &IN_C
    }

    /// Number of phrases, including the lead-in.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the score has no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The phrase at the given index. Panics if out of range, which for a
    /// well-formed simulation can't happen.
    pub fn phrase(&self, index: usize) -> &Phrase {
        &self.phrases[index]
    }

    /// All phrases in order.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// The scheduling quantum count for the phrase at the given index.
    pub fn beats(&self, index: usize) -> usize {
        self.beats[index]
    }

    /// Rejects scores that would make the lock-step simulation meaningless:
    /// no phrases, or a phrase that takes no time (which would stall the
    /// shared clock).
    pub fn validate(&self) -> Result<(), Error> {
        if self.is_empty() {
            return Err(Error::EmptyScore);
        }
        if self.beats.iter().any(|&b| b == 0) {
            return Err(Error::ZeroDurationScore);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::assert_ge;

    #[test]
    fn in_c_catalog_shape() {
        let score = Score::in_c();
        assert_eq!(score.len(), 54, "lead-in rest plus 53 phrases");
        assert!(score.validate().is_ok());

        // The lead-in is a whole-note rest.
        let lead_in = score.phrase(0);
        assert_eq!(lead_in.notes().len(), 1);
        assert!(lead_in.notes()[0].pitch.is_rest());
        assert_eq!(lead_in.duration(), 4.0);
        assert_eq!(score.beats(0), 16);

        for (index, phrase) in score.phrases().iter().enumerate() {
            assert_ge!(score.beats(index), 1, "phrase {index} takes no time");
            assert_eq!(
                score.beats(index) as f64,
                phrase.duration() * 4.0,
                "phrase {index} duration is not a whole number of sixteenths"
            );
        }
    }

    #[test]
    fn in_c_known_phrase_durations() {
        let score = Score::in_c();
        assert_eq!(score.phrase(1).duration(), 3.0); // three quarters; grace notes are free
        assert_eq!(score.phrase(6).duration(), 8.0); // double whole note
        assert_eq!(score.phrase(7).duration(), 9.0);
        assert_eq!(score.phrase(53).duration(), 0.5); // the closing two sixteenths
    }

    #[test]
    fn validation_rejects_degenerate_scores() {
        assert_eq!(Score::new(Vec::default()).validate(), Err(Error::EmptyScore));
        assert_eq!(
            Score::new(vec![Phrase::new(Vec::default())]).validate(),
            Err(Error::ZeroDurationScore)
        );
    }
}

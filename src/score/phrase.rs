// Copyright (c) 2024 Mike Tsao. All rights reserved.

use super::Note;
use crate::types::{MusicTimeStamp, QUANTA_PER_BEAT};
use serde::{Deserialize, Serialize};

/// An ordered group of [Note]s that a performer repeats a variable number of
/// times. Phrases do not all have the same duration, which leads to
/// interesting polyrhythmic interplay when they are combined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Phrase {
    notes: Vec<Note>,
    duration: MusicTimeStamp,
}
impl Phrase {
    /// Creates a [Phrase] from its notes. The phrase duration is the sum of
    /// the non-grace note durations, which is exactly how far the clock moves
    /// during one repetition.
    pub fn new(notes: Vec<Note>) -> Self {
        let duration = notes
            .iter()
            .filter(|n| !n.is_grace)
            .map(|n| n.duration)
            .sum();
        Self { notes, duration }
    }

    /// The notes in this phrase, in playback order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Time to play the phrase once, in beats.
    pub fn duration(&self) -> MusicTimeStamp {
        self.duration
    }

    /// The phrase duration as an integer count of scheduling quanta
    /// (sixteenth notes). The score catalog guarantees this is exact.
    pub fn beats(&self) -> usize {
        let beats = self.duration * QUANTA_PER_BEAT;
        debug_assert_eq!(
            beats.fract(),
            0.0,
            "phrase duration {} is not a whole number of scheduling quanta",
            self.duration
        );
        beats as usize
    }

    /// Hands each note, along with the clock value at its nominal beat, to
    /// `recorder`, and returns the clock value at the end of the phrase.
    pub fn advance(
        &self,
        clock: MusicTimeStamp,
        mut recorder: impl FnMut(MusicTimeStamp, &Note),
    ) -> MusicTimeStamp {
        self.notes.iter().fold(clock, |clock, note| {
            recorder(clock, note);
            note.end_time(clock)
        })
    }
}

// Copyright (c) 2024 Mike Tsao. All rights reserved.

//! Materializes a [Performance] into timed note events for a sound backend.

use crate::{
    entropy::Entropy,
    performance::{Part, Performance},
    score::{Pitch, Score},
    types::MusicTimeStamp,
};
use serde::{Deserialize, Serialize};

/// Where each track's clock starts: one measure of lead-in before the first
/// nominal beat.
pub const TRACK_LEAD_IN: MusicTimeStamp = 1.0;

/// Velocity for ordinary notes.
const NOTE_VELOCITY: u8 = 127;
/// Grace notes are played softer.
const GRACE_NOTE_VELOCITY: u8 = 64;

/// One note-on event, ready for a sound-generation backend.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NoteEvent {
    /// Onset time in beats, jitter included.
    pub when: MusicTimeStamp,
    /// What to play. Never [Pitch::Rest]; rests only advance the clock.
    pub pitch: Pitch,
    /// MIDI-style velocity.
    pub velocity: u8,
    /// How long the note sounds, in beats.
    pub duration: MusicTimeStamp,
}

/// The timed event sequence for one performer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Track {
    /// The performer's position in the ensemble.
    pub index: usize,
    /// Events in clock order as generated (jitter may locally reorder
    /// onsets; the backend sorts if it cares).
    pub events: Vec<NoteEvent>,
    /// The clock value after the last phrase repetition.
    pub duration: MusicTimeStamp,
}
impl Track {
    fn new(part: &Part, score: &Score, entropy: &mut dyn Entropy) -> Self {
        let mut events = Vec::default();
        let mut clock = TRACK_LEAD_IN;
        for (index, &play_count) in part.play_counts.iter().enumerate() {
            let phrase = score.phrase(index);
            for _ in 0..play_count {
                clock = phrase.advance(clock, |clock, note| {
                    if note.pitch.is_rest() {
                        return;
                    }
                    let slop = entropy.slop();
                    events.push(NoteEvent {
                        when: note.start_time(clock, slop),
                        pitch: note.pitch,
                        velocity: if note.is_grace {
                            GRACE_NOTE_VELOCITY
                        } else {
                            NOTE_VELOCITY
                        },
                        duration: note.duration - slop,
                    });
                });
            }
        }
        Self {
            index: part.index,
            events,
            duration: clock,
        }
    }
}

/// The materialized set of per-performer tracks. Hand the tracks to the
/// audio-rendering collaborator; this type knows nothing about sound.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Recording {
    /// One track per part, in ensemble order.
    pub tracks: Vec<Track>,
    /// The longest track duration, in beats.
    pub sequence_length: MusicTimeStamp,
}
impl Recording {
    /// Materializes every part of a [Performance]. Slop draws are consumed
    /// in performer order, then note order within each performer's expanded
    /// repetition sequence, so a fixed seed reproduces the event streams
    /// byte for byte.
    pub fn new(performance: &Performance, score: &Score, entropy: &mut dyn Entropy) -> Self {
        let tracks: Vec<Track> = performance
            .parts
            .iter()
            .map(|part| Track::new(part, score, entropy))
            .collect();
        let sequence_length = tracks
            .iter()
            .map(|track| track.duration)
            .fold(0.0, MusicTimeStamp::max);
        Self {
            tracks,
            sequence_length,
        }
    }
}

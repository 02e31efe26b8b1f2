// Copyright (c) 2024 Mike Tsao. All rights reserved.

use crate::types::MusicTimeStamp;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

/// Note durations in the score source are integer MIDI ticks, 480 per quarter
/// note. A negative tick count marks a grace note.
pub type Ticks = i32;

/// Tick values for the common note durations, plus helpers for the dotted and
/// grace variants the score uses.
pub mod duration {
    use super::Ticks;

    #[allow(missing_docs)]
    pub const THIRTYSECOND: Ticks = 60;
    #[allow(missing_docs)]
    pub const SIXTEENTH: Ticks = THIRTYSECOND * 2;
    #[allow(missing_docs)]
    pub const EIGHTH: Ticks = SIXTEENTH * 2;
    #[allow(missing_docs)]
    pub const QUARTER: Ticks = EIGHTH * 2;
    #[allow(missing_docs)]
    pub const HALF: Ticks = QUARTER * 2;
    #[allow(missing_docs)]
    pub const WHOLE: Ticks = HALF * 2;

    /// Ticks per quarter note (the beat unit of [MusicTimeStamp](crate::types::MusicTimeStamp)).
    pub const TICKS_PER_QUARTER: Ticks = QUARTER;

    /// A dotted note is half again as long.
    pub const fn dotted(d: Ticks) -> Ticks {
        d + d / 2
    }

    /// A grace note plays at half the given duration, ahead of its nominal
    /// beat. The negative sign is the grace-note marker.
    pub const fn grace(d: Ticks) -> Ticks {
        -(d / 2)
    }
}

/// The pitches that appear in the "In C" score. Raw values are MIDI note
/// numbers; [Pitch::Rest] is the reserved silent value.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    FromRepr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Pitch {
    Rest = 0,
    G3 = 55,
    C4 = 60,
    Cs4 = 61,
    D4 = 62,
    Ds4 = 63,
    E4 = 64,
    F4 = 65,
    Fs4 = 66,
    G4 = 67,
    Gs4 = 68,
    A4 = 69,
    As4 = 70,
    B4 = 71,
    C5 = 72,
    Cs5 = 73,
    D5 = 74,
    Ds5 = 75,
    E5 = 76,
    F5 = 77,
    Fs5 = 78,
    G5 = 79,
    Gs5 = 80,
    A5 = 81,
    As5 = 82,
    B5 = 83,
    C6 = 84,
}
impl Pitch {
    /// Whether this is the reserved silent value.
    pub fn is_rest(&self) -> bool {
        matches!(self, Pitch::Rest)
    }

    /// The MIDI note number for this pitch.
    pub fn midi_note(&self) -> u8 {
        *self as u8
    }
}

/// A single pitched note or rest. Notes make up a
/// [Phrase](crate::score::Phrase).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Note {
    /// The pitch, or [Pitch::Rest] for silence.
    pub pitch: Pitch,
    /// How long the note sounds, in beats. Always non-negative.
    pub duration: MusicTimeStamp,
    /// Grace notes sound ahead of their nominal beat and take no time of
    /// their own.
    pub is_grace: bool,
}
impl Note {
    /// Creates a [Note] from a pitch and a tick duration. Negative ticks mark
    /// a grace note; the stored duration is always positive.
    pub fn new(pitch: Pitch, ticks: Ticks) -> Self {
        Self {
            pitch,
            duration: ticks.unsigned_abs() as MusicTimeStamp
                / duration::TICKS_PER_QUARTER as MusicTimeStamp,
            is_grace: ticks < 0,
        }
    }

    /// When this note starts sounding. A grace note leads its beat by its own
    /// duration; every other note is offset by the given jitter.
    pub fn start_time(&self, clock: MusicTimeStamp, slop: MusicTimeStamp) -> MusicTimeStamp {
        clock + if self.is_grace { -self.duration } else { slop }
    }

    /// The clock value after this note. Grace notes never advance the clock.
    pub fn end_time(&self, clock: MusicTimeStamp) -> MusicTimeStamp {
        if self.is_grace {
            clock
        } else {
            clock + self.duration
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_durations() {
        assert_eq!(duration::QUARTER, 480);
        assert_eq!(duration::dotted(duration::EIGHTH), 360);
        assert_eq!(duration::grace(duration::EIGHTH), -120);
    }

    #[test]
    fn note_from_ticks() {
        let note = Note::new(Pitch::E4, duration::QUARTER);
        assert_eq!(note.duration, 1.0);
        assert!(!note.is_grace);

        let grace = Note::new(Pitch::C4, duration::grace(duration::EIGHTH));
        assert_eq!(grace.duration, 0.25);
        assert!(grace.is_grace);
    }

    #[test]
    fn grace_notes_lead_their_beat_and_take_no_time() {
        let grace = Note::new(Pitch::C4, duration::grace(duration::EIGHTH));
        assert_eq!(grace.start_time(8.0, 0.125), 7.75);
        assert_eq!(grace.end_time(8.0), 8.0);

        let note = Note::new(Pitch::E4, duration::QUARTER);
        assert_eq!(note.start_time(8.0, 0.125), 8.125);
        assert_eq!(note.end_time(8.0), 9.0);
    }

    #[test]
    fn pitch_is_midi_note_number() {
        assert_eq!(Pitch::C4.midi_note(), 60);
        assert_eq!(Pitch::from_repr(55), Some(Pitch::G3));
        assert!(Pitch::Rest.is_rest());
        assert!(!Pitch::C6.is_rest());
    }
}

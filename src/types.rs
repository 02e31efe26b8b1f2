// Copyright (c) 2024 Mike Tsao. All rights reserved.

//! Common data types used throughout the system.

/// A point or span on the performance timeline, measured in beats
/// (quarter-note = 1.0).
pub type MusicTimeStamp = f64;

/// The reference tempo for converting wall-clock phrase durations to beat
/// counts. The original score assumes this rate; it is not configurable.
pub const REFERENCE_TEMPO_BPM: f64 = 120.0;

/// Number of scheduling quanta per quarter note. One quantum is a sixteenth
/// note, the smallest duration that appears in the score.
pub const QUANTA_PER_BEAT: f64 = 4.0;

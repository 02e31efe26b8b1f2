// Copyright (c) 2024 Mike Tsao. All rights reserved.

//! The fixed "In C" phrase catalog.
//!
//! Phrase 0 is a whole-note rest that exists only so the grace note at the
//! start of phrase 1 has something to play into; phrases 1-53 are the score.

use super::{
    note::{duration::*, Pitch, Pitch::*, Ticks},
    Note, Phrase,
};

fn phrase(notes: &[(Pitch, Ticks)]) -> Phrase {
    Phrase::new(
        notes
            .iter()
            .map(|&(pitch, ticks)| Note::new(pitch, ticks))
            .collect(),
    )
}

#[rustfmt::skip]
pub(super) fn phrases() -> Vec<Phrase> {
    vec![
        // 0
        phrase(&[(Rest, WHOLE)]),
        // 1
        phrase(&[
            (C4, grace(EIGHTH)), (E4, QUARTER),
            (C4, grace(EIGHTH)), (E4, QUARTER),
            (C4, grace(EIGHTH)), (E4, QUARTER),
        ]),
        // 2
        phrase(&[
            (C4, grace(EIGHTH)), (E4, EIGHTH), (F4, EIGHTH), (E4, QUARTER),
        ]),
        // 3
        phrase(&[(Rest, EIGHTH), (E4, EIGHTH), (F4, EIGHTH), (E4, EIGHTH)]),
        // 4
        phrase(&[(Rest, EIGHTH), (E4, EIGHTH), (F4, EIGHTH), (G4, EIGHTH)]),
        // 5
        phrase(&[(E4, EIGHTH), (F4, EIGHTH), (G4, EIGHTH), (Rest, EIGHTH)]),
        // 6
        phrase(&[(C5, WHOLE + WHOLE)]),
        // 7
        phrase(&[
            (Rest, QUARTER * 3 + EIGHTH),
            (C4, SIXTEENTH), (C4, SIXTEENTH), (C4, EIGHTH),
            (Rest, QUARTER * 4 + EIGHTH),
        ]),
        // 8
        phrase(&[(G4, WHOLE + HALF), (F4, WHOLE + WHOLE)]),
        // 9
        phrase(&[(B4, SIXTEENTH), (G4, SIXTEENTH), (Rest, QUARTER * 3 + EIGHTH)]),
        // 10
        phrase(&[(B4, SIXTEENTH), (G4, SIXTEENTH)]),
        // 11
        phrase(&[
            (F4, SIXTEENTH), (G4, SIXTEENTH), (B4, SIXTEENTH),
            (G4, SIXTEENTH), (B4, SIXTEENTH), (G4, SIXTEENTH),
        ]),
        // 12
        phrase(&[(F4, EIGHTH), (G4, EIGHTH), (B4, WHOLE), (C5, QUARTER)]),
        // 13
        phrase(&[
            (B4, SIXTEENTH), (G4, dotted(EIGHTH)), (G4, SIXTEENTH),
            (F4, SIXTEENTH), (G4, EIGHTH), (Rest, dotted(EIGHTH)),
            (G4, SIXTEENTH + dotted(HALF)),
        ]),
        // 14
        phrase(&[(C5, WHOLE), (B4, WHOLE), (G4, WHOLE), (Fs4, WHOLE)]),
        // 15
        phrase(&[(G4, SIXTEENTH), (Rest, dotted(EIGHTH) + QUARTER * 3)]),
        // 16
        phrase(&[
            (G4, SIXTEENTH), (B4, SIXTEENTH), (C5, SIXTEENTH), (B4, SIXTEENTH),
        ]),
        // 17
        phrase(&[
            (B4, SIXTEENTH), (C5, SIXTEENTH), (B4, SIXTEENTH),
            (C5, SIXTEENTH), (B4, SIXTEENTH), (Rest, SIXTEENTH),
        ]),
        // 18
        phrase(&[
            (E4, SIXTEENTH), (Fs4, SIXTEENTH), (E4, SIXTEENTH),
            (Fs4, SIXTEENTH), (E4, dotted(EIGHTH)),
        ]),
        // 19
        phrase(&[(Rest, dotted(QUARTER)), (G5, dotted(EIGHTH))]),
        // 20
        phrase(&[
            (E4, SIXTEENTH), (Fs4, SIXTEENTH), (E4, SIXTEENTH), (Fs4, SIXTEENTH),
            (G3, dotted(EIGHTH)),
            (E4, SIXTEENTH), (Fs4, SIXTEENTH), (E4, SIXTEENTH), (Fs4, SIXTEENTH),
            (E4, SIXTEENTH),
        ]),
        // 21
        phrase(&[(Fs4, dotted(HALF))]),
        // 22
        phrase(&[
            (E4, dotted(QUARTER)), (E4, dotted(QUARTER)), (E4, dotted(QUARTER)),
            (E4, dotted(QUARTER)), (E4, dotted(QUARTER)), (Fs4, dotted(QUARTER)),
            (G4, dotted(QUARTER)), (A4, dotted(QUARTER)), (B4, EIGHTH),
        ]),
        // 23
        phrase(&[
            (E4, EIGHTH), (Fs4, dotted(QUARTER)), (Fs4, dotted(QUARTER)),
            (Fs4, dotted(QUARTER)), (Fs4, dotted(QUARTER)), (Fs4, dotted(QUARTER)),
            (G4, dotted(QUARTER)), (A4, dotted(QUARTER)), (B4, QUARTER),
        ]),
        // 24
        phrase(&[
            (E4, EIGHTH), (Fs4, EIGHTH), (G4, dotted(QUARTER)), (G4, dotted(QUARTER)),
            (G4, dotted(QUARTER)), (G4, dotted(QUARTER)), (G4, dotted(QUARTER)),
            (A4, dotted(QUARTER)), (B4, EIGHTH),
        ]),
        // 25
        phrase(&[
            (E4, EIGHTH), (Fs4, EIGHTH), (G4, EIGHTH), (A4, dotted(QUARTER)),
            (A4, dotted(QUARTER)), (A4, dotted(QUARTER)), (A4, dotted(QUARTER)),
            (A4, dotted(QUARTER)), (B4, dotted(QUARTER)),
        ]),
        // 26
        phrase(&[
            (E4, EIGHTH), (Fs4, EIGHTH), (G4, EIGHTH), (A4, EIGHTH),
            (B4, dotted(QUARTER)), (B4, dotted(QUARTER)), (B4, dotted(QUARTER)),
            (B4, dotted(QUARTER)), (B4, dotted(QUARTER)),
        ]),
        // 27
        phrase(&[
            (E4, SIXTEENTH), (Fs4, SIXTEENTH), (E4, SIXTEENTH), (Fs4, SIXTEENTH),
            (G4, EIGHTH), (E4, SIXTEENTH), (G4, SIXTEENTH), (F4, SIXTEENTH),
            (E4, SIXTEENTH), (F4, SIXTEENTH), (E4, SIXTEENTH),
        ]),
        // 28
        phrase(&[
            (E4, SIXTEENTH), (Fs4, SIXTEENTH), (E4, SIXTEENTH), (Fs4, SIXTEENTH),
            (E4, dotted(EIGHTH)), (E4, SIXTEENTH),
        ]),
        // 29
        phrase(&[(E4, dotted(HALF)), (G4, dotted(HALF)), (C5, dotted(HALF))]),
        // 30
        phrase(&[(C5, dotted(WHOLE))]),
        // 31
        phrase(&[
            (G4, SIXTEENTH), (F4, SIXTEENTH), (G4, SIXTEENTH),
            (B4, SIXTEENTH), (G4, SIXTEENTH), (B4, SIXTEENTH),
        ]),
        // 32
        phrase(&[
            (F4, SIXTEENTH), (G4, SIXTEENTH), (F4, SIXTEENTH), (G4, SIXTEENTH),
            (B4, SIXTEENTH), (F4, SIXTEENTH + dotted(HALF)), (G4, dotted(QUARTER)),
        ]),
        // 33
        phrase(&[(G4, SIXTEENTH), (F4, SIXTEENTH), (Rest, EIGHTH)]),
        // 34
        phrase(&[(G4, SIXTEENTH), (F4, SIXTEENTH)]),
        // 35
        phrase(&[
            (F4, SIXTEENTH), (G4, SIXTEENTH), (B4, SIXTEENTH), (G4, SIXTEENTH),
            (B4, SIXTEENTH), (G4, SIXTEENTH), (B4, SIXTEENTH), (G4, SIXTEENTH),
            (B4, SIXTEENTH), (G4, SIXTEENTH),
            (Rest, EIGHTH + QUARTER * 3),
            (As4, QUARTER), (G5, dotted(HALF)), (A5, EIGHTH), (G5, QUARTER),
            (B5, EIGHTH), (A5, dotted(QUARTER)), (G5, EIGHTH), (E5, dotted(HALF)),
            (G5, EIGHTH), (Fs5, EIGHTH + dotted(HALF)),
            (Rest, QUARTER * 2 + EIGHTH),
            (E5, EIGHTH + HALF), (F5, dotted(WHOLE)),
        ]),
        // 36
        phrase(&[
            (F4, SIXTEENTH), (G4, SIXTEENTH), (B4, SIXTEENTH),
            (G4, SIXTEENTH), (B4, SIXTEENTH), (G4, SIXTEENTH),
        ]),
        // 37
        phrase(&[(F4, SIXTEENTH), (G4, SIXTEENTH)]),
        // 38
        phrase(&[(F4, SIXTEENTH), (G4, SIXTEENTH), (B4, SIXTEENTH)]),
        // 39
        phrase(&[
            (B4, SIXTEENTH), (G4, SIXTEENTH), (F4, SIXTEENTH),
            (G4, SIXTEENTH), (B4, SIXTEENTH), (C5, SIXTEENTH),
        ]),
        // 40
        phrase(&[(B4, SIXTEENTH), (F4, SIXTEENTH)]),
        // 41
        phrase(&[(B4, SIXTEENTH), (G4, SIXTEENTH)]),
        // 42
        phrase(&[(C5, WHOLE), (B4, WHOLE), (A4, WHOLE), (C5, WHOLE)]),
        // 43
        phrase(&[
            (F5, SIXTEENTH), (E5, SIXTEENTH), (F5, SIXTEENTH), (E5, SIXTEENTH),
            (E5, EIGHTH), (E5, EIGHTH), (E5, EIGHTH),
            (F5, SIXTEENTH), (E5, SIXTEENTH),
        ]),
        // 44
        phrase(&[
            (F5, EIGHTH), (E5, EIGHTH + EIGHTH), (E5, EIGHTH), (C5, QUARTER),
        ]),
        // 45
        phrase(&[(D5, QUARTER), (D5, QUARTER), (G4, QUARTER)]),
        // 46
        phrase(&[
            (G4, SIXTEENTH), (D5, SIXTEENTH), (E5, SIXTEENTH), (D5, SIXTEENTH),
            (Rest, EIGHTH), (G4, EIGHTH),
            (Rest, EIGHTH), (G4, EIGHTH),
            (Rest, EIGHTH), (G4, EIGHTH),
            (G4, SIXTEENTH), (G4, SIXTEENTH), (D5, SIXTEENTH), (E5, SIXTEENTH),
            (D5, SIXTEENTH),
        ]),
        // 47
        phrase(&[(D5, SIXTEENTH), (E5, SIXTEENTH), (D5, SIXTEENTH)]),
        // 48
        phrase(&[
            (G4, dotted(WHOLE)), (G4, WHOLE), (G4, WHOLE + QUARTER),
        ]),
        // 49
        phrase(&[
            (F4, SIXTEENTH), (G4, SIXTEENTH), (As4, SIXTEENTH),
            (G4, SIXTEENTH), (As4, SIXTEENTH), (G4, SIXTEENTH),
        ]),
        // 50
        phrase(&[(F4, SIXTEENTH), (G4, SIXTEENTH)]),
        // 51
        phrase(&[(F4, SIXTEENTH), (G4, SIXTEENTH), (As4, SIXTEENTH)]),
        // 52
        phrase(&[(G4, SIXTEENTH), (As4, SIXTEENTH)]),
        // 53
        phrase(&[(As4, SIXTEENTH), (G4, SIXTEENTH)]),
    ]
}

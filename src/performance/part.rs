// Copyright (c) 2024 Mike Tsao. All rights reserved.

use crate::{score::Score, types::MusicTimeStamp};
use serde::{Deserialize, Serialize};

/// The finalized, immutable schedule for one performer: how many times it
/// plays each phrase, plus a normalized progress curve for visualization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Part {
    /// The performer's position in the ensemble.
    pub index: usize,
    /// One entry per phrase: the number of repetitions actually performed.
    pub play_counts: Vec<usize>,
    /// One entry per phrase boundary: the cumulative elapsed fraction, in
    /// [0, 1], of this performer's total duration.
    pub normalized_running_durations: Vec<f64>,
}
impl Part {
    pub(crate) fn new(
        index: usize,
        play_counts: Vec<usize>,
        duration: MusicTimeStamp,
        score: &Score,
    ) -> Self {
        let mut elapsed = 0.0;
        let normalized_running_durations = play_counts
            .iter()
            .zip(score.phrases())
            .map(|(&count, phrase)| {
                elapsed += count as MusicTimeStamp * phrase.duration();
                elapsed / duration
            })
            .collect();
        Self {
            index,
            play_counts,
            normalized_running_durations,
        }
    }

    /// Total playing time of this part, in beats.
    pub fn duration(&self, score: &Score) -> MusicTimeStamp {
        self.play_counts
            .iter()
            .zip(score.phrases())
            .map(|(&count, phrase)| count as MusicTimeStamp * phrase.duration())
            .sum()
    }

    /// A one-line progress picture: each phrase index followed by one dash
    /// per beat (rounded up) spent on it.
    pub fn timeline(&self, score: &Score) -> String {
        format!(
            "{}:{}",
            self.index,
            self.play_counts
                .iter()
                .zip(score.phrases())
                .enumerate()
                .map(|(index, (&count, phrase))| {
                    let beats = (count as MusicTimeStamp * phrase.duration()).ceil() as usize;
                    format!("{}{}", index, "-".repeat(beats))
                })
                .collect::<String>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{
        note::{duration::*, Pitch},
        Note, Phrase,
    };
    use float_cmp::approx_eq;

    fn score() -> Score {
        Score::new(vec![
            Phrase::new(vec![Note::new(Pitch::Rest, WHOLE)]), // 4.0
            Phrase::new(vec![Note::new(Pitch::E4, HALF)]),    // 2.0
            Phrase::new(vec![Note::new(Pitch::G4, QUARTER)]), // 1.0
        ])
    }

    #[test]
    fn running_durations_are_cumulative_fractions() {
        let score = score();
        // 1x4.0 + 2x2.0 + 4x1.0 = 12.0 beats.
        let part = Part::new(0, vec![1, 2, 4], 12.0, &score);
        assert!(approx_eq!(
            f64,
            part.normalized_running_durations[0],
            4.0 / 12.0
        ));
        assert!(approx_eq!(
            f64,
            part.normalized_running_durations[1],
            8.0 / 12.0
        ));
        assert_eq!(part.normalized_running_durations[2], 1.0);
        assert_eq!(part.duration(&score), 12.0);
    }

    #[test]
    fn timeline_draws_one_dash_per_beat() {
        let score = score();
        let part = Part::new(3, vec![1, 1, 2], 8.0, &score);
        assert_eq!(part.timeline(&score), "3:0----1--2--");
    }
}

// Copyright (c) 2024 Mike Tsao. All rights reserved.

use super::{Part, PerformerStats};
use crate::{entropy::Entropy, score::Score, types::MusicTimeStamp};

/// One performer's mutable simulation state: which phrase it is on, how long
/// until its next decision point, and the repetition counts it has settled
/// on so far. Owned and driven exclusively by the ensemble scheduler; once
/// the last phrase is finalized it becomes an immutable [Part].
#[derive(Debug)]
pub struct Performer<'a> {
    index: usize,
    score: &'a Score,
    current_phrase: usize,
    remaining_beats: usize,
    played: usize,
    desired_plays: usize,
    play_counts: Vec<usize>,
    duration: MusicTimeStamp,
}
impl<'a> Performer<'a> {
    /// Creates a [Performer] at the start of the score.
    pub fn new(index: usize, score: &'a Score) -> Self {
        Self {
            index,
            score,
            current_phrase: 0,
            remaining_beats: score.beats(0),
            played: 0,
            desired_plays: 1,
            play_counts: Vec::with_capacity(score.len()),
            duration: 0.0,
        }
    }

    /// This performer's contribution to the ensemble reduction, without
    /// advancing time.
    pub fn stats(&self) -> PerformerStats {
        if self.is_finished() {
            PerformerStats::finished(self.current_phrase)
        } else {
            PerformerStats::new(self.remaining_beats, self.current_phrase)
        }
    }

    /// Whether every phrase has been finalized.
    pub fn is_finished(&self) -> bool {
        self.current_phrase == self.score.len()
    }

    /// Total duration of the finalized phrases so far, in beats.
    pub fn duration(&self) -> MusicTimeStamp {
        self.duration
    }

    /// Advances this performer's clock by `elapsed` beats. If that lands on a
    /// decision point, decides whether to repeat the current phrase or move
    /// on, using the ensemble's phrase spread to stay cohesive.
    pub fn tick(
        &mut self,
        entropy: &mut dyn Entropy,
        elapsed: usize,
        min_phrase: usize,
        max_phrase: usize,
    ) -> PerformerStats {
        if self.is_finished() {
            return PerformerStats::finished(self.current_phrase);
        }

        self.remaining_beats -= elapsed;
        if self.remaining_beats == 0 {
            self.played += 1;
            let move_probability = Self::move_probability(
                self.current_phrase,
                min_phrase,
                max_phrase,
                self.played,
                self.desired_plays,
            );

            if entropy.percent_draw() < move_probability {
                self.play_counts.push(self.played);
                self.duration +=
                    self.played as MusicTimeStamp * self.score.phrase(self.current_phrase).duration();
                self.current_phrase += 1;
                if self.is_finished() {
                    return PerformerStats::finished(self.current_phrase);
                }

                self.played = 0;
                self.desired_plays =
                    entropy.repetition_count(self.score.phrase(self.current_phrase).duration());
            }

            self.remaining_beats = self.score.beats(self.current_phrase);
        }

        PerformerStats::new(self.remaining_beats, self.current_phrase)
    }

    /// The percent chance of advancing to the next phrase, in integer
    /// arithmetic and deliberately unclamped: values over 100 force an
    /// advance, and values at or below zero force a hold. Performers behind
    /// the ensemble get pushed forward, performers ahead get held back, and a
    /// performer that has met its desired repetition count is forced onward
    /// with escalating certainty (which also guarantees termination).
    pub(crate) fn move_probability(
        current_phrase: usize,
        min_phrase: usize,
        max_phrase: usize,
        played: usize,
        desired_plays: usize,
    ) -> i64 {
        if current_phrase == 0 {
            return 100;
        }
        let current = current_phrase as i64;
        let behind = (max_phrase as i64 - current).max(0);
        let ahead = (current - min_phrase as i64).max(0);
        let overdue = (played as i64 - desired_plays as i64 + 1).max(0);
        behind * 15 - ahead * 15 + overdue * 100
    }

    /// Pads the last phrase's repetition count until this performer's total
    /// duration reaches the ensemble's, so the piece ends together.
    pub fn finish(&mut self, goal: MusicTimeStamp) {
        assert_eq!(
            self.play_counts.len(),
            self.score.len(),
            "finish() called before every phrase was finalized"
        );
        let last_index = self.score.len() - 1;
        let last_duration = self.score.phrase(last_index).duration();
        while self.duration + last_duration < goal {
            self.play_counts[last_index] += 1;
            self.duration += last_duration;
        }
    }

    /// Converts the finished performer into its immutable [Part].
    pub fn into_part(self) -> Part {
        Part::new(self.index, self.play_counts, self.duration, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ConfigBuilder,
        entropy::SeededEntropy,
        score::{
            note::{duration::*, Pitch},
            Note, Phrase,
        },
    };
    use more_asserts::{assert_ge, assert_gt};

    fn one_phrase_score() -> Score {
        Score::new(vec![Phrase::new(vec![Note::new(Pitch::Rest, WHOLE)])])
    }

    #[test]
    fn move_probability_formula_locked_in() {
        // Lead-in phrase always advances.
        assert_eq!(Performer::move_probability(0, 0, 0, 1, 1), 100);

        // Behind the ensemble: pushed forward.
        assert_eq!(Performer::move_probability(5, 5, 9, 1, 3), 60);
        // Ahead of the ensemble: held back, and the value may go negative.
        assert_eq!(Performer::move_probability(9, 1, 9, 1, 3), -120);
        // Centered: the terms cancel.
        assert_eq!(Performer::move_probability(5, 1, 9, 1, 3), 0);
        // Met the desired count: forced onward with escalating certainty.
        assert_eq!(Performer::move_probability(5, 5, 5, 3, 3), 100);
        assert_eq!(Performer::move_probability(5, 5, 5, 5, 3), 300);
        // Unclamped above 100, too.
        assert_eq!(Performer::move_probability(5, 5, 9, 4, 3), 260);
    }

    #[test]
    fn lagging_performer_is_likelier_to_move_than_leading_one() {
        let lagging = Performer::move_probability(3, 3, 9, 1, 5);
        let leading = Performer::move_probability(9, 3, 9, 1, 5);
        assert_gt!(lagging, leading);
        assert_gt!(lagging, 0);
        assert_gt!(0, leading);
    }

    #[test]
    fn single_phrase_performer_advances_after_one_decision() {
        let score = one_phrase_score();
        let config = ConfigBuilder::default()
            .ensemble_size(1)
            .seed(42)
            .build()
            .unwrap();
        let mut entropy = SeededEntropy::new(&config);
        let mut performer = Performer::new(0, &score);

        let stats = performer.stats();
        assert_eq!(stats.remaining_beats, 16);

        // Phrase 0 always advances, so one decision finishes the score.
        let stats = performer.tick(&mut entropy, 16, 0, 0);
        assert!(stats.is_done());
        assert!(performer.is_finished());
        assert_eq!(performer.duration(), 4.0);

        performer.finish(4.0);
        assert_eq!(performer.into_part().play_counts, vec![1]);
    }

    #[test]
    fn tick_without_decision_only_counts_down() {
        let score = one_phrase_score();
        let config = ConfigBuilder::default().seed(1).build().unwrap();
        let mut entropy = SeededEntropy::new(&config);
        let mut performer = Performer::new(0, &score);

        let stats = performer.tick(&mut entropy, 5, 0, 0);
        assert_eq!(stats, PerformerStats::new(11, 0));
        assert!(!performer.is_finished());
    }

    #[test]
    fn finish_pads_last_phrase_to_goal() {
        let score = Score::new(vec![
            Phrase::new(vec![Note::new(Pitch::Rest, WHOLE)]),
            Phrase::new(vec![Note::new(Pitch::G4, HALF)]),
        ]);
        let config = ConfigBuilder::default().seed(9).build().unwrap();
        let mut entropy = SeededEntropy::new(&config);
        let mut performer = Performer::new(0, &score);

        let mut stats = performer.stats();
        let mut guard = 0;
        while !stats.is_done() {
            stats = performer.tick(
                &mut entropy,
                stats.remaining_beats,
                stats.min_phrase,
                stats.max_phrase,
            );
            guard += 1;
            assert!(guard < 100_000, "simulation failed to terminate");
        }

        let before = performer.duration();
        let goal = before + 17.0;
        performer.finish(goal);
        assert_ge!(performer.duration() + 2.0, goal);
        assert!(performer.duration() < goal, "padding should stop as soon as one more repetition would reach the goal");
    }

    #[test]
    #[should_panic(expected = "finish() called before every phrase was finalized")]
    fn finish_before_done_is_a_programming_error() {
        let score = one_phrase_score();
        let mut performer = Performer::new(0, &score);
        performer.finish(10.0);
    }
}

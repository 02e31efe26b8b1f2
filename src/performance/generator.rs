// Copyright (c) 2024 Mike Tsao. All rights reserved.

use super::{Performance, Performer, PerformerStats};
use crate::{
    config::{Config, Error},
    entropy::Entropy,
    score::Score,
    types::MusicTimeStamp,
};

/// Something that can produce a complete [Performance].
pub trait PerformanceGenerator {
    /// Runs the ensemble simulation to completion, consuming draws from the
    /// given entropy stream in performer order. Either returns a full
    /// [Performance] or is not run at all; there are no partial results.
    fn generate(&mut self, entropy: &mut dyn Entropy) -> Performance;
}

/// The lock-step ensemble scheduler. Every iteration advances the whole
/// ensemble's shared clock by exactly the smallest remaining beat count among
/// active performers, so decision points are visited in a strict,
/// deterministic order even when several performers decide at once.
#[derive(Debug)]
pub struct BasicPerformanceGenerator<'a> {
    score: &'a Score,
    ensemble_size: usize,
}
impl<'a> BasicPerformanceGenerator<'a> {
    /// Creates a [BasicPerformanceGenerator], validating the configuration
    /// and score first so that a bad setup can never start simulating.
    pub fn new(config: &Config, score: &'a Score) -> Result<Self, Error> {
        config.validate()?;
        score.validate()?;
        Ok(Self {
            score,
            ensemble_size: config.ensemble_size,
        })
    }
}
impl PerformanceGenerator for BasicPerformanceGenerator<'_> {
    fn generate(&mut self, entropy: &mut dyn Entropy) -> Performance {
        let mut performers: Vec<Performer> = (0..self.ensemble_size)
            .map(|index| Performer::new(index, self.score))
            .collect();

        let mut stats = performers
            .iter()
            .fold(PerformerStats::default(), |acc, p| acc.merge(&p.stats()));
        while !stats.is_done() {
            let elapsed = stats.remaining_beats;
            let (min_phrase, max_phrase) = (stats.min_phrase, stats.max_phrase);
            stats = performers
                .iter_mut()
                .map(|p| p.tick(entropy, elapsed, min_phrase, max_phrase))
                .fold(PerformerStats::default(), |acc, s| acc.merge(&s));
        }

        let goal = performers
            .iter()
            .map(Performer::duration)
            .fold(0.0, MusicTimeStamp::max);
        performers.iter_mut().for_each(|p| p.finish(goal));

        Performance::new(performers.into_iter().map(Performer::into_part).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ConfigBuilder, entropy::SeededEntropy};
    use more_asserts::{assert_ge, assert_le};

    fn generate(ensemble_size: usize, seed: u128) -> Performance {
        let config = ConfigBuilder::default()
            .ensemble_size(ensemble_size)
            .seed(seed)
            .build()
            .unwrap();
        let score = Score::in_c();
        let mut entropy = SeededEntropy::new(&config);
        BasicPerformanceGenerator::new(&config, score)
            .unwrap()
            .generate(&mut entropy)
    }

    #[test]
    fn every_part_finalizes_every_phrase_at_least_once() {
        let performance = generate(4, 12345);
        assert_eq!(performance.parts.len(), 4);
        for part in &performance.parts {
            assert_eq!(part.play_counts.len(), Score::in_c().len());
            assert!(part.play_counts.iter().all(|&count| count >= 1));
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_same_performance() {
        assert_eq!(generate(6, 99), generate(6, 99));
    }

    #[test]
    fn parts_end_together() {
        let score = Score::in_c();
        let performance = generate(5, 777);
        let durations: Vec<f64> = performance
            .parts
            .iter()
            .map(|part| part.duration(score))
            .collect();

        // Padding never extends the longest part, so the maximum is the
        // pre-padding goal. Everyone else must land within one repetition of
        // the final phrase below it.
        let goal = durations.iter().fold(0.0, |a, &b| f64::max(a, b));
        let last_phrase_duration = score.phrase(score.len() - 1).duration();
        for duration in durations {
            assert_ge!(duration + last_phrase_duration, goal);
            assert_le!(duration, goal);
        }
    }

    #[test]
    fn rejects_invalid_setups_before_simulating() {
        let score = Score::in_c();
        let bad = Config {
            ensemble_size: 0,
            ..Config::default()
        };
        assert_eq!(
            BasicPerformanceGenerator::new(&bad, score).err(),
            Some(Error::InvalidEnsembleSize)
        );
        assert_eq!(
            BasicPerformanceGenerator::new(&Config::default(), &Score::new(Vec::default())).err(),
            Some(Error::EmptyScore)
        );
    }

    #[test]
    fn lock_step_loop_terminates_within_bound() {
        let config = ConfigBuilder::default()
            .ensemble_size(3)
            .seed(4242)
            .build()
            .unwrap();
        let score = Score::in_c();
        let mut entropy = SeededEntropy::new(&config);

        // The forced-advance term grows by 100 per overdue pass while the
        // hold-back penalty is capped at 15x the phrase count, so a
        // performer is certain to advance within a few passes of its desired
        // count. 200 beats of desired playing time on the shortest phrase
        // (0.5 beats) caps desired repetitions at 400 per phrase; allow ten
        // overdue passes and one iteration per quantum of the longest phrase
        // (128 sixteenths). Loose, but finite; real runs are far shorter.
        let bound = score.len() * (400 + 10) * 128;
        let mut performers: Vec<Performer> = (0..3).map(|i| Performer::new(i, score)).collect();
        let mut stats = performers
            .iter()
            .fold(PerformerStats::default(), |acc, p| acc.merge(&p.stats()));
        let mut iterations = 0usize;
        while !stats.is_done() {
            let elapsed = stats.remaining_beats;
            let (min_phrase, max_phrase) = (stats.min_phrase, stats.max_phrase);
            stats = performers
                .iter_mut()
                .map(|p| p.tick(&mut entropy, elapsed, min_phrase, max_phrase))
                .fold(PerformerStats::default(), |acc, s| acc.merge(&s));
            iterations += 1;
            assert_le!(iterations, bound, "lock-step loop exceeded its bound");
        }
    }
}

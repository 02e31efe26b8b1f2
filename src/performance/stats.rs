// Copyright (c) 2024 Mike Tsao. All rights reserved.

/// The reduction of every performer's state that synchronizes the lock-step
/// loop: the smallest remaining beat count among active performers, and the
/// ensemble's phrase-index spread. Merges componentwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PerformerStats {
    /// Beats until the next decision point, or [PerformerStats::DONE] for a
    /// finished performer (contributing no constraint to the minimum).
    pub remaining_beats: usize,
    /// Smallest current phrase index seen so far.
    pub min_phrase: usize,
    /// Largest current phrase index seen so far.
    pub max_phrase: usize,
}
impl Default for PerformerStats {
    /// The merge identity.
    fn default() -> Self {
        Self {
            remaining_beats: Self::DONE,
            min_phrase: usize::MAX,
            max_phrase: 0,
        }
    }
}
impl PerformerStats {
    /// Sentinel remaining-beats value for a finished performer.
    pub const DONE: usize = usize::MAX;

    /// Stats for an active performer.
    pub fn new(remaining_beats: usize, current_phrase: usize) -> Self {
        Self {
            remaining_beats,
            min_phrase: current_phrase,
            max_phrase: current_phrase,
        }
    }

    /// Stats for a finished performer. It still reports its phrase index so
    /// that the ensemble maximum keeps pulling stragglers forward.
    pub fn finished(current_phrase: usize) -> Self {
        Self {
            remaining_beats: Self::DONE,
            min_phrase: current_phrase,
            max_phrase: current_phrase,
        }
    }

    /// Whether every merged performer is finished.
    pub fn is_done(&self) -> bool {
        self.remaining_beats == Self::DONE
    }

    /// Componentwise min/min/max merge.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            remaining_beats: self.remaining_beats.min(other.remaining_beats),
            min_phrase: self.min_phrase.min(other.min_phrase),
            max_phrase: self.max_phrase.max(other.max_phrase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_componentwise() {
        let a = PerformerStats::new(8, 3);
        let b = PerformerStats::new(2, 7);
        let merged = a.merge(&b);
        assert_eq!(merged, PerformerStats { remaining_beats: 2, min_phrase: 3, max_phrase: 7 });
        assert_eq!(merged, b.merge(&a), "merge should be commutative");
    }

    #[test]
    fn identity_does_not_constrain() {
        let stats = PerformerStats::new(5, 2);
        assert_eq!(PerformerStats::default().merge(&stats), stats);
    }

    #[test]
    fn finished_performers_still_pull_the_max() {
        let active = PerformerStats::new(4, 10);
        let finished = PerformerStats::finished(54);
        let merged = active.merge(&finished);
        assert_eq!(merged.remaining_beats, 4);
        assert_eq!(merged.max_phrase, 54);
        assert!(!merged.is_done());
        assert!(finished.merge(&PerformerStats::default()).is_done());
    }
}

use rustc_hash::FxHashSet;

/// Repetition history over board fingerprints.
///
/// Simple-ko mode only needs the fingerprint of the board one ply behind
/// the current one; superko mode additionally keeps every fingerprint ever
/// reached for O(1) membership tests. Entries are append-only for the life
/// of a game and cleared only by a wholesale state replacement.
#[derive(Clone, Debug)]
pub struct History {
    superko: bool,
    previous: Option<u64>,
    current: u64,
    seen: FxHashSet<u64>,
}

impl History {
    pub fn new(superko: bool, initial: u64) -> Self {
        let mut seen = FxHashSet::default();
        if superko {
            seen.insert(initial);
        }
        History {
            superko,
            previous: None,
            current: initial,
            seen,
        }
    }

    pub fn superko(&self) -> bool {
        self.superko
    }

    /// Forgets everything and restarts from `fingerprint`. Repetitions of
    /// states reached before the reset are no longer detected.
    pub fn reset(&mut self, fingerprint: u64) {
        *self = History::new(self.superko, fingerprint);
    }

    /// Records the board reached after a move.
    pub fn record(&mut self, fingerprint: u64) {
        self.previous = Some(self.current);
        self.current = fingerprint;
        if self.superko {
            self.seen.insert(fingerprint);
        }
    }

    /// Whether moving to a board with this fingerprint violates the active
    /// ko rule: under superko, any previously reached board; otherwise only
    /// the board exactly one ply before the current one.
    pub fn forbidden(&self, fingerprint: u64) -> bool {
        if self.superko {
            self.seen.contains(&fingerprint)
        } else {
            self.previous == Some(fingerprint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_ko_tracks_one_ply() {
        let mut history = History::new(false, 10);
        assert!(!history.forbidden(10));

        history.record(20);
        // One ply back is now 10; older states are fair game.
        assert!(history.forbidden(10));
        assert!(!history.forbidden(20));

        history.record(30);
        assert!(history.forbidden(20));
        assert!(!history.forbidden(10));
    }

    #[test]
    fn test_superko_remembers_everything() {
        let mut history = History::new(true, 10);
        history.record(20);
        history.record(30);

        assert!(history.forbidden(10));
        assert!(history.forbidden(20));
        assert!(history.forbidden(30));
        assert!(!history.forbidden(40));
    }

    #[test]
    fn test_reset_clears_the_past() {
        let mut history = History::new(true, 10);
        history.record(20);
        history.reset(30);

        assert!(!history.forbidden(10));
        assert!(!history.forbidden(20));
        assert!(history.forbidden(30));
    }
}

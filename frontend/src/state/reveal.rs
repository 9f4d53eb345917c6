/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One-shot reveal flags, one per element registered when the watcher starts.
///
/// Flags only ever go from hidden to revealed. Notifications for elements that
/// are already revealed, or that were never registered, change nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new element and returns its index.
    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Feeds one intersection notification. Returns `true` only on the
    /// notification that flips the element to revealed.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        let Some(flag) = self.revealed.get_mut(index) else {
            return false;
        };
        if *flag || !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        *flag = true;
        true
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|flag| **flag).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|flag| *flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(n: usize) -> RevealSet {
        let mut set = RevealSet::new();
        for _ in 0..n {
            set.register();
        }
        set
    }

    #[test]
    fn nothing_registered_is_empty() {
        let mut set = RevealSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        set.register();
        assert!(!set.is_empty());
    }

    #[test]
    fn everything_starts_hidden() {
        let set = set_of(10);
        assert_eq!(set.len(), 10);
        assert_eq!(set.revealed_count(), 0);
        assert!((0..10).all(|i| !set.is_revealed(i)));
    }

    #[test]
    fn crossing_threshold_reveals_once() {
        let mut set = set_of(3);
        assert!(set.observe(1, true, 0.25));
        assert!(set.is_revealed(1));
        assert!(!set.observe(1, true, 0.9));
        assert_eq!(set.revealed_count(), 1);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut set = set_of(1);
        assert!(set.observe(0, true, REVEAL_THRESHOLD));
    }

    #[test]
    fn below_threshold_or_not_intersecting_does_nothing() {
        let mut set = set_of(2);
        assert!(!set.observe(0, true, 0.05));
        assert!(!set.observe(1, false, 0.5));
        assert_eq!(set.revealed_count(), 0);
    }

    #[test]
    fn revealed_flag_survives_leaving_viewport() {
        let mut set = set_of(1);
        set.observe(0, true, 0.4);
        set.observe(0, false, 0.0);
        set.observe(0, true, 0.01);
        assert!(set.is_revealed(0));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut set = set_of(2);
        assert!(!set.observe(5, true, 1.0));
        assert!(!set.is_revealed(5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn all_revealed_after_each_section_enters() {
        let mut set = set_of(4);
        for i in 0..4 {
            assert!(!set.all_revealed());
            set.observe(i, true, 0.5);
        }
        assert!(set.all_revealed());
    }
}

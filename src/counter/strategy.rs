use std::fmt;

/// Synchronization discipline applied to a shared counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Separate load and store with no coordination. Loses updates under
    /// contention.
    Unsynchronized,
    /// Hardware fetch-and-add.
    Atomic,
    /// One lock acquisition per transaction.
    Mutex,
}

impl Strategy {
    /// All strategies, in the order they are run and reported.
    pub const ALL: [Strategy; 3] = [Strategy::Unsynchronized, Strategy::Atomic, Strategy::Mutex];

    /// Short label used in reports and logs.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Unsynchronized => "w/o sync",
            Strategy::Atomic => "atomic",
            Strategy::Mutex => "mutex",
        }
    }

    /// Whether the final counter value must equal the sum of all deltas.
    pub fn is_exact(self) -> bool {
        match self {
            Strategy::Unsynchronized => false,
            Strategy::Atomic | Strategy::Mutex => true,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

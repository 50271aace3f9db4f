use crate::Cell;

/// What [`handle_pair()`] did to a pair of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    /// Nothing happened, either because `first` was empty, the two tiles
    /// differ or their sum does not fit in a [`Cell`].
    Unchanged,
    /// The tile in `first` slid into the empty `second`.
    Moved,
    /// Two equal tiles combined into `second`.
    Merged,
}

impl PairOutcome {
    pub fn changed(self) -> bool {
        self != PairOutcome::Unchanged
    }
}

/// Applies the sliding rule to two adjacent cells, moving from `first` towards `second`.
///
/// This rule has no memory of earlier merges. Making sure that a tile merges
/// at most once per shift is up to the caller.
pub fn handle_pair(first: &mut Cell, second: &mut Cell) -> PairOutcome {
    if *first == 0 {
        // 0-0 -> 0-0
        // 0-2 -> 0-2
        PairOutcome::Unchanged
    } else if *second == 0 {
        // 2-0 -> 0-2
        *second = *first;
        *first = 0;
        PairOutcome::Moved
    } else if *first == *second {
        // 2-2 -> 0-4
        let Some(merged) = second.checked_mul(2) else {
            return PairOutcome::Unchanged;
        };
        *second = merged;
        *first = 0;
        PairOutcome::Merged
    } else {
        // 2-4 -> 2-4
        PairOutcome::Unchanged
    }
}

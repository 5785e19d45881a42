//! Numbered page controls: a short run of page numbers around the current page,
//! with the first and last page pinned at the edges when they fall outside it.

use std::ops::RangeInclusive;

pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current: usize,
    pub total: usize,
    pub first: usize,
    pub last: usize,
}

impl PageWindow {
    /// Centres up to `max_visible` page numbers on `current`, shifting the run so
    /// it stays within `1..=total`. Returns `None` when `total <= 1`.
    pub fn new(current: usize, total: usize, max_visible: usize) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        let max_visible = max_visible.max(1);
        let current = current.clamp(1, total);

        let mut first = current.saturating_sub(max_visible / 2).max(1);
        let last = (first + max_visible - 1).min(total);
        if last - first < max_visible - 1 {
            first = (last + 1).saturating_sub(max_visible).max(1);
        }

        Some(Self {
            current,
            total,
            first,
            last,
        })
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    /// Page 1 is shown separately before the run.
    pub fn shows_first(&self) -> bool {
        self.first > 1
    }

    /// An ellipsis sits between page 1 and the run.
    pub fn leading_gap(&self) -> bool {
        self.first > 2
    }

    /// The last page is shown separately after the run.
    pub fn shows_last(&self) -> bool {
        self.last < self.total
    }

    pub fn trailing_gap(&self) -> bool {
        self.last + 1 < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

// crates/core/src/stats.rs
use core::fmt;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Result of scanning one byte stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineTally {
    /// Number of textual lines, including a trailing line without `\n`.
    pub total_lines: usize,
    /// Number of lines whose valid characters met the threshold.
    pub loc: usize,
}

impl LineTally {
    #[must_use]
    pub const fn new(total_lines: usize, loc: usize) -> Self {
        Self { total_lines, loc }
    }

    /// Blank and comment-only lines.
    #[must_use]
    pub const fn non_loc(&self) -> usize {
        self.total_lines - self.loc
    }

    #[must_use]
    pub const fn as_pair(&self) -> (usize, usize) {
        (self.total_lines, self.loc)
    }
}

impl From<LineTally> for (usize, usize) {
    fn from(tally: LineTally) -> Self {
        tally.as_pair()
    }
}

impl Add for LineTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.total_lines + rhs.total_lines, self.loc + rhs.loc)
    }
}

impl AddAssign for LineTally {
    fn add_assign(&mut self, rhs: Self) {
        self.total_lines += rhs.total_lines;
        self.loc += rhs.loc;
    }
}

impl fmt::Display for LineTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lines, {} loc", self.total_lines, self.loc)
    }
}

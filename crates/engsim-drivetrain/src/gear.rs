//! Gear positions and shift intents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gearbox position: -1 is reverse, 0 neutral, 1.. the forward gears.
///
/// The position doubles as an index into the configured ratio table, which
/// is laid out `[R, N, 1st, 2nd, ...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gear(i8);

impl Gear {
    /// Reverse.
    pub const REVERSE: Gear = Gear(-1);
    /// Neutral.
    pub const NEUTRAL: Gear = Gear(0);
    /// First forward gear.
    pub const FIRST: Gear = Gear(1);

    /// Gear from its signed position.
    pub const fn new(position: i8) -> Self {
        Self(position)
    }

    /// Signed position.
    pub const fn position(self) -> i8 {
        self.0
    }

    pub const fn is_neutral(self) -> bool {
        self.0 == 0
    }

    pub const fn is_reverse(self) -> bool {
        self.0 < 0
    }

    /// Index of this gear in a `[R, N, 1st, ...]` ratio table.
    pub fn ratio_index(self) -> Option<usize> {
        usize::try_from(i16::from(self.0) + 1).ok()
    }

    /// Highest forward gear of a ratio table with `ratio_count` entries.
    pub fn top_for(ratio_count: usize) -> Self {
        let top = ratio_count.saturating_sub(2).min(i8::MAX as usize);
        Self(i8::try_from(top).unwrap_or(i8::MAX))
    }

    /// One step from `self` toward `target`, never leaving `[R, top]`.
    ///
    /// Returns `self` when already at the target.
    pub fn step_toward(self, target: Gear, top: Gear) -> Gear {
        use std::cmp::Ordering;

        match target.cmp(&self) {
            Ordering::Greater => Gear(self.0.saturating_add(1)).min(top),
            Ordering::Less => Gear(self.0.saturating_sub(1)).max(Gear::REVERSE),
            Ordering::Equal => self,
        }
    }
}

impl Default for Gear {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            p if p < 0 => write!(f, "R"),
            0 => write!(f, "N"),
            p => write!(f, "{p}"),
        }
    }
}

/// Discrete gear-change event from an input adapter (paddle, button, gesture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftIntent {
    Up,
    Down,
}

impl ShiftIntent {
    /// Target gear one position away from `current`.
    pub fn target_from(self, current: Gear) -> Gear {
        match self {
            Self::Up => Gear(current.0.saturating_add(1)),
            Self::Down => Gear(current.0.saturating_sub(1)),
        }
    }
}

#![forbid(unsafe_code)]

//! Placement tuning knobs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upward-drag deadzone, as a fraction of the collider's height.
///
/// When the mover's top row is below the collider's top row by more than
/// this fraction of the collider's height, the collider stays put. Upward
/// drags therefore only swap once the mover is close to the collider's top
/// edge instead of on the first overlapping row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDeadzoneRatio")]
pub struct DeadzoneRatio {
    numerator: u32,
    denominator: u32,
}

impl DeadzoneRatio {
    /// A quarter of the collider's height. Product-tuned, not load-bearing.
    pub const QUARTER: Self = Self {
        numerator: 1,
        denominator: 4,
    };

    /// Never defer; displace colliders on the first overlapping row.
    pub const DISABLED: Self = Self {
        numerator: u32::MAX,
        denominator: 1,
    };

    /// Create a ratio. Returns `None` for a zero denominator.
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    /// Numerator of the fraction.
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Denominator of the fraction, never zero.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Whether `depth` rows strictly exceeds this fraction of `height`.
    #[inline]
    #[must_use]
    pub const fn exceeded_by(&self, depth: u32, height: u32) -> bool {
        depth as u64 * self.denominator as u64 > height as u64 * self.numerator as u64
    }
}

impl Default for DeadzoneRatio {
    fn default() -> Self {
        Self::QUARTER
    }
}

/// Rejected deadzone ratio: the denominator was zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroDenominator {
    pub numerator: u32,
}

impl fmt::Display for ZeroDenominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deadzone ratio {}/0 has a zero denominator", self.numerator)
    }
}

impl std::error::Error for ZeroDenominator {}

#[derive(Deserialize)]
struct RawDeadzoneRatio {
    numerator: u32,
    denominator: u32,
}

impl TryFrom<RawDeadzoneRatio> for DeadzoneRatio {
    type Error = ZeroDenominator;

    fn try_from(raw: RawDeadzoneRatio) -> Result<Self, Self::Error> {
        Self::new(raw.numerator, raw.denominator).ok_or(ZeroDenominator {
            numerator: raw.numerator,
        })
    }
}

/// Behaviour switches for interactive placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Upward-drag deadzone, see [`DeadzoneRatio`].
    pub upward_swap_deadzone: DeadzoneRatio,
    /// Compact the layout after `drag` and `resize`.
    pub compact_after_interaction: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            upward_swap_deadzone: DeadzoneRatio::QUARTER,
            compact_after_interaction: true,
        }
    }
}

impl PlacementConfig {
    /// Set the upward-drag deadzone.
    #[must_use]
    pub fn upward_swap_deadzone(mut self, ratio: DeadzoneRatio) -> Self {
        self.upward_swap_deadzone = ratio;
        self
    }

    /// Enable or disable compaction after `drag` and `resize`.
    #[must_use]
    pub fn compact_after_interaction(mut self, enabled: bool) -> Self {
        self.compact_after_interaction = enabled;
        self
    }
}

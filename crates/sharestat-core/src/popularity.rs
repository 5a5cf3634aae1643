//! Popularity classification of share counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts strictly below this are LOW.
pub const LOW_CEILING: u64 = 10;

/// Counts strictly above this are HIGH; everything between the two
/// thresholds (inclusive) is MEDIUM.
pub const HIGH_FLOOR: u64 = 50;

/// Three-level popularity label derived from a share count.
///
/// Serializes and displays as `LOW` / `MEDIUM` / `HIGH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Popularity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Popularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Popularity::Low => write!(f, "LOW"),
            Popularity::Medium => write!(f, "MEDIUM"),
            Popularity::High => write!(f, "HIGH"),
        }
    }
}

/// Maps a share count onto a popularity label.
///
/// Thresholds are closed at both ends of the middle band: counts of exactly
/// 10 or exactly 50 are MEDIUM. The label depends on the count alone.
pub fn classify_count(count: u64) -> Popularity {
    if count < LOW_CEILING {
        Popularity::Low
    } else if count > HIGH_FLOOR {
        Popularity::High
    } else {
        Popularity::Medium
    }
}

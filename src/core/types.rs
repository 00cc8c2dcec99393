//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the host runtime assigns to a bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotId(pub u32);

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bot#{}", self.0)
    }
}

/// Round counter (game time unit). The first round is 0.
pub type RoundId = u32;

/// Signed number of rounds between `earlier` and `later`
pub fn rounds_between(earlier: RoundId, later: RoundId) -> i64 {
    i64::from(later) - i64::from(earlier)
}

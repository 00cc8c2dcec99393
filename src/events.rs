//! Events delivered by the host runtime once per round

use serde::{Deserialize, Serialize};

use crate::core::types::BotId;
use crate::hex::Position;

/// A single event from the round's batch.
///
/// Kinds the engine does not know about deserialize to [`Event::Unknown`] and
/// never match a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Event {
    /// An enemy spotted `bot_id`
    Detected {
        #[serde(rename = "botId")]
        bot_id: BotId,
    },
    /// A radar scan revealed an enemy at `pos`
    RadarEcho {
        pos: Position,
        #[serde(rename = "botId", default, skip_serializing_if = "Option::is_none")]
        bot_id: Option<BotId>,
    },
    /// `bot_id` took damage
    Damaged {
        #[serde(rename = "botId")]
        bot_id: BotId,
        #[serde(default)]
        damage: u32,
    },
    /// `bot_id` currently sees an enemy
    See {
        #[serde(rename = "botId")]
        bot_id: BotId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pos: Option<Position>,
    },
    /// A cannon shot connected with `bot_id`, friend or foe
    Hit {
        #[serde(rename = "botId")]
        bot_id: BotId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<BotId>,
    },
    /// `bot_id` did not answer in time
    #[serde(rename = "noaction")]
    NoAction {
        #[serde(rename = "botId")]
        bot_id: BotId,
        #[serde(default)]
        data: serde_json::Value,
    },
    #[serde(other)]
    Unknown,
}

impl Event {
    /// Wire name of the event kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Detected { .. } => "detected",
            Self::RadarEcho { .. } => "radarEcho",
            Self::Damaged { .. } => "damaged",
            Self::See { .. } => "see",
            Self::Hit { .. } => "hit",
            Self::NoAction { .. } => "noaction",
            Self::Unknown => "unknown",
        }
    }
}

/// Position of the first radar echo in the batch; later echoes are ignored
pub fn first_radar_echo(events: &[Event]) -> Option<Position> {
    events.iter().find_map(|e| match e {
        Event::RadarEcho { pos, .. } => Some(*pos),
        _ => None,
    })
}

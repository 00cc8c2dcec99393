//! Replay recorded rounds through a controller
//!
//! Input is either a JSON array of rounds or a stream of JSON round objects
//! (one per line), each shaped the way the host delivers a round.

use serde::{Deserialize, Serialize};

use crate::controller::{RoundController, RoundReport};
use crate::core::config::RoundConfig;
use crate::core::error::Result;
use crate::core::types::RoundId;
use crate::events::Event;
use crate::hex::Geometry;
use crate::host::RecordingBot;

/// One recorded round as delivered by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundInput {
    #[serde(rename = "roundId")]
    pub round_id: RoundId,
    #[serde(default)]
    pub events: Vec<Event>,
    pub bots: Vec<RecordingBot>,
    #[serde(default)]
    pub config: RoundConfig,
}

/// Parse a JSON array of rounds or newline-delimited round objects
pub fn parse_rounds(input: &str) -> Result<Vec<RoundInput>> {
    let trimmed = input.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let rounds = serde_json::Deserializer::from_str(trimmed)
        .into_iter::<RoundInput>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rounds)
}

/// Run every round in order, returning one report per round
pub fn replay<G: Geometry>(
    controller: &mut RoundController<G>,
    rounds: Vec<RoundInput>,
) -> Vec<RoundReport> {
    rounds
        .into_iter()
        .map(|mut round| {
            controller.decide_round(round.round_id, &round.events, &mut round.bots, &round.config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use crate::core::types::BotId;
    use crate::rules::Rule;
    use crate::sampler::Sampler;

    const ROUNDS: &str = r#"
        {"roundId": 0, "events": [], "bots": [{"botId": 1, "x": 0, "y": 0}], "config": {"move": 2}}
        {"roundId": 1, "events": [{"event": "radarEcho", "pos": {"x": 3, "y": -1}}], "bots": [{"botId": 1, "x": 0, "y": 0}]}
    "#;

    #[test]
    fn test_parse_json_lines() {
        let rounds = parse_rounds(ROUNDS).unwrap();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].config.move_range, 2);
        assert_eq!(rounds[1].config, RoundConfig::default());
        assert_eq!(rounds[1].bots[0].bot_id, BotId(1));
    }

    #[test]
    fn test_parse_json_array() {
        let rounds = parse_rounds(r#"[{"roundId": 3, "bots": []}]"#).unwrap();
        assert_eq!(rounds.len(), 1);
        assert!(rounds[0].events.is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_rounds("{\"roundId\": \"soon\"}").is_err());
    }

    #[test]
    fn test_replay_produces_report_per_round() {
        let mut controller =
            RoundController::new(EngineConfig::default(), Sampler::with_seed(8, 14)).unwrap();
        let reports = replay(&mut controller, parse_rounds(ROUNDS).unwrap());

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].decisions[0].rule, Rule::Fallback);
        assert_eq!(reports[1].decisions[0].rule, Rule::RadarEcho);
    }
}

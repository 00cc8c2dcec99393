//! Radar target selection under the same-round overlap constraint

use crate::core::types::RoundId;
use crate::hex::Position;
use crate::history::RadarHistory;
use crate::sampler::Sampler;

/// Draw candidates until one does not overlap a radar already used in
/// `round`, giving up after `max_attempts` draws.
///
/// `draw` receives the previously rejected candidate (`None` on the first
/// draw). On exhaustion the candidate overlapping the fewest same-round scans
/// is returned, earliest first on ties.
pub fn sample_radar_target<F>(
    radar: &RadarHistory,
    round: RoundId,
    max_attempts: u32,
    sampler: &mut Sampler,
    mut draw: F,
) -> Position
where
    F: FnMut(&mut Sampler, Option<Position>) -> Position,
{
    let mut candidate = draw(sampler, None);
    let mut best = candidate;
    let mut best_overlaps = usize::MAX;

    for attempt in 1..=max_attempts.max(1) {
        let overlaps = radar.overlap_count(candidate, round);
        if overlaps == 0 {
            return candidate;
        }
        if overlaps < best_overlaps {
            best = candidate;
            best_overlaps = overlaps;
        }
        if attempt < max_attempts {
            candidate = draw(sampler, Some(candidate));
        }
    }

    tracing::warn!(
        "No free radar position after {} attempts in round {}; using {:?} ({} overlaps)",
        max_attempts,
        round,
        best,
        best_overlaps
    );
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_first_free_candidate() {
        let radar = RadarHistory::new(5);
        let mut sampler = Sampler::with_seed(1, 14);
        let target = sample_radar_target(&radar, 0, 10, &mut sampler, |_, _| Position::new(3, 3));
        assert_eq!(target, Position::new(3, 3));
    }

    #[test]
    fn test_chained_draw_sees_previous_candidate() {
        let mut radar = RadarHistory::new(5);
        radar.append(Position::new(0, 0), 2);
        let mut sampler = Sampler::with_seed(1, 14);

        let mut seen = Vec::new();
        let target = sample_radar_target(&radar, 2, 10, &mut sampler, |_, prev| {
            seen.push(prev);
            match prev {
                None => Position::new(0, 0),
                Some(p) => Position::new(p.x + 3, 0),
            }
        });

        assert_eq!(target, Position::new(6, 0));
        assert_eq!(
            seen,
            vec![None, Some(Position::new(0, 0)), Some(Position::new(3, 0))]
        );
    }

    #[test]
    fn test_exhaustion_picks_least_overlapping() {
        let mut radar = RadarHistory::new(5);
        radar.append(Position::new(0, 0), 1);
        radar.append(Position::new(1, 0), 1);
        let mut sampler = Sampler::with_seed(1, 14);

        let mut draws = vec![Position::new(0, 0), Position::new(5, 0), Position::new(1, 0)].into_iter();
        let target = sample_radar_target(&radar, 1, 3, &mut sampler, |_, _| {
            draws.next().unwrap_or(Position::new(0, 0))
        });

        // (5, 0) is within range of (1, 0) only
        assert_eq!(target, Position::new(5, 0));
    }

    #[test]
    fn test_saturated_map_terminates() {
        let mut radar = RadarHistory::new(5);
        let mut sampler = Sampler::with_seed(9, 2);
        radar.append(Position::new(0, 0), 0);

        // Every hex of a radius-2 map is within 4 of the origin
        let target = sample_radar_target(&radar, 0, 16, &mut sampler, |s, _| s.random_map_position());
        assert!(target.is_on_map(2));
    }
}

//! Map minigame scoring.
//!
//! Each minigame yields a loot multiplier in `[1.0, 2.0]` which scales the XP and gold of
//! the encounter it precedes.

use crate::core::constants::*;
use crate::core::error::MinigameParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which minigame the map presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinigameKind {
    /// Throw as many snowflakes at the target as possible.
    Barrage,
    /// Mash a key to fill a power bar.
    Mash,
    /// Stop a pulsing ring as close to its midpoint as possible.
    Timing,
}

/// Versions of the barrage scoring curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarrageVariant {
    /// 12 hits for the maximum multiplier.
    Legacy,
    /// 15 hits for the maximum multiplier.
    #[default]
    Current,
}

impl BarrageVariant {
    pub fn target_hits(self) -> u32 {
        match self {
            BarrageVariant::Legacy => BARRAGE_TARGET_HITS_LEGACY,
            BarrageVariant::Current => BARRAGE_TARGET_HITS,
        }
    }
}

/// The outcome of one minigame round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinigameScore {
    /// Number of snowflakes that landed.
    Barrage { hits: u32 },
    /// Bar fill, 0 to 100. Values above 100 are clamped.
    Mash { power: u32 },
    /// Ring size (0 to 100) at the moment it was stopped.
    Timing { size: f64 },
}

impl MinigameScore {
    pub fn kind(&self) -> MinigameKind {
        match self {
            MinigameScore::Barrage { .. } => MinigameKind::Barrage,
            MinigameScore::Mash { .. } => MinigameKind::Mash,
            MinigameScore::Timing { .. } => MinigameKind::Timing,
        }
    }

    pub fn multiplier(&self, variant: BarrageVariant) -> f64 {
        match *self {
            MinigameScore::Barrage { hits } => barrage_multiplier(hits, variant),
            MinigameScore::Mash { power } => mash_multiplier(power),
            MinigameScore::Timing { size } => timing_multiplier(size),
        }
    }
}

impl FromStr for MinigameScore {
    type Err = MinigameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MinigameParseError(s.to_string());
        let (kind, value) = s.trim().split_once(':').ok_or_else(invalid)?;
        let value = value.trim();
        match kind.trim().to_ascii_lowercase().as_str() {
            "barrage" => value
                .parse()
                .map(|hits| MinigameScore::Barrage { hits })
                .map_err(|_| invalid()),
            "mash" => value
                .parse()
                .map(|power| MinigameScore::Mash { power })
                .map_err(|_| invalid()),
            "timing" => match value.parse::<f64>() {
                Ok(size) if size.is_finite() => Ok(MinigameScore::Timing { size }),
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        }
    }
}

/// `1 + min(1, hits / target)`.
pub fn barrage_multiplier(hits: u32, variant: BarrageVariant) -> f64 {
    let ratio = hits as f64 / variant.target_hits() as f64;
    1.0 + ratio.min(1.0)
}

/// `1 + power / 100`, power capped at 100.
pub fn mash_multiplier(power: u32) -> f64 {
    1.0 + power.min(100) as f64 / 100.0
}

/// Scores distance from the midpoint: under 5 is perfect, under 15 is good.
pub fn timing_multiplier(size: f64) -> f64 {
    let diff = (50.0 - size).abs();
    if diff < TIMING_PERFECT_WINDOW {
        2.0
    } else if diff < TIMING_GOOD_WINDOW {
        1.5
    } else {
        1.1
    }
}

/// Applies a loot multiplier to an XP/gold pair (floored).
pub fn scale_reward(xp: u32, gold: u32, multiplier: f64) -> (u32, u32) {
    let multiplier = multiplier.max(0.0);
    (
        (xp as f64 * multiplier).floor() as u32,
        (gold as f64 * multiplier).floor() as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barrage_caps_at_double() {
        assert_eq!(barrage_multiplier(0, BarrageVariant::Current), 1.0);
        assert_eq!(barrage_multiplier(15, BarrageVariant::Current), 2.0);
        assert_eq!(barrage_multiplier(40, BarrageVariant::Current), 2.0);
    }

    #[test]
    fn test_barrage_variants_differ() {
        assert_eq!(barrage_multiplier(12, BarrageVariant::Legacy), 2.0);
        assert!(barrage_multiplier(12, BarrageVariant::Current) < 2.0);
    }

    #[test]
    fn test_mash_multiplier() {
        assert_eq!(mash_multiplier(0), 1.0);
        assert_eq!(mash_multiplier(50), 1.5);
        assert_eq!(mash_multiplier(250), 2.0);
    }

    #[test]
    fn test_timing_windows() {
        assert_eq!(timing_multiplier(50.0), 2.0);
        assert_eq!(timing_multiplier(46.0), 2.0);
        assert_eq!(timing_multiplier(60.0), 1.5);
        assert_eq!(timing_multiplier(65.0), 1.1);
        assert_eq!(timing_multiplier(0.0), 1.1);
    }

    #[test]
    fn test_scale_reward_floors() {
        assert_eq!(scale_reward(45, 33, 1.5), (67, 49));
        assert_eq!(scale_reward(45, 33, 1.0), (45, 33));
    }

    #[test]
    fn test_parse_scores() {
        assert_eq!(
            "barrage:12".parse::<MinigameScore>(),
            Ok(MinigameScore::Barrage { hits: 12 })
        );
        assert_eq!(
            "Mash: 40".parse::<MinigameScore>(),
            Ok(MinigameScore::Mash { power: 40 })
        );
        assert_eq!(
            "timing:47.5".parse::<MinigameScore>(),
            Ok(MinigameScore::Timing { size: 47.5 })
        );
        assert!("barrage".parse::<MinigameScore>().is_err());
        assert!("mash:-3".parse::<MinigameScore>().is_err());
        assert!("timing:NaN".parse::<MinigameScore>().is_err());
        assert!("darts:3".parse::<MinigameScore>().is_err());
    }

    #[test]
    fn test_score_dispatch() {
        let score = MinigameScore::Mash { power: 30 };
        assert_eq!(score.kind(), MinigameKind::Mash);
        assert_eq!(score.multiplier(BarrageVariant::default()), 1.3);
    }
}

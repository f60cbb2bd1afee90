//! Engine configuration.

use super::constants::*;
use crate::minigame::{BarrageVariant, MinigameScore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which rule set governs stat growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Flat growth, prestige does not scale stats.
    Classic,
    /// Prestige scales every stat gain by `1 + prestige * 0.2`.
    #[default]
    Extended,
}

/// Tuning knobs for the progression ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionRules {
    pub base_xp: u32,
    pub xp_scaling: f64,
    pub hp_per_level: u32,
    pub mp_per_level: u32,
    /// Growth bonus per prestige rank (0.0 disables prestige scaling).
    pub prestige_bonus_per_rank: f64,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self::for_ruleset(Ruleset::default())
    }
}

impl ProgressionRules {
    pub fn for_ruleset(ruleset: Ruleset) -> Self {
        let prestige_bonus_per_rank = match ruleset {
            Ruleset::Classic => 0.0,
            Ruleset::Extended => PRESTIGE_STAT_BONUS_PER_RANK,
        };
        Self {
            base_xp: BASE_XP_REQ,
            xp_scaling: XP_SCALING,
            hp_per_level: HP_PER_LEVEL,
            mp_per_level: MP_PER_LEVEL,
            prestige_bonus_per_rank,
        }
    }

    /// Multiplier applied to stat growth at the given prestige rank.
    pub fn growth_multiplier(&self, prestige: u32) -> f64 {
        1.0 + prestige as f64 * self.prestige_bonus_per_rank
    }

    /// Scales a flat stat amount by the prestige growth multiplier (floored).
    pub fn scaled(&self, amount: u32, prestige: u32) -> u32 {
        (amount as f64 * self.growth_multiplier(prestige)) as u32
    }
}

/// Configuration for the engine and its binaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ruleset: Ruleset,

    /// Which barrage minigame version scores loot multipliers
    pub barrage_variant: BarrageVariant,

    /// Overrides the platform config directory for save files
    pub save_dir: Option<PathBuf>,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::Extended,
            barrage_variant: BarrageVariant::default(),
            save_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// The flat-growth rules used before prestige classes existed.
    pub fn classic() -> Self {
        Self {
            ruleset: Ruleset::Classic,
            barrage_variant: BarrageVariant::Legacy,
            ..Default::default()
        }
    }

    /// Loads a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn progression_rules(&self) -> ProgressionRules {
        ProgressionRules::for_ruleset(self.ruleset)
    }

    /// Loot multiplier for a minigame score under the configured barrage variant.
    pub fn loot_multiplier(&self, score: &MinigameScore) -> f64 {
        score.multiplier(self.barrage_variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_rules_scale_with_prestige() {
        let rules = ProgressionRules::for_ruleset(Ruleset::Extended);
        assert_eq!(rules.scaled(30, 0), 30);
        assert_eq!(rules.scaled(30, 1), 36);
        assert_eq!(rules.scaled(15, 2), 21);
    }

    #[test]
    fn test_classic_rules_ignore_prestige() {
        let rules = ProgressionRules::for_ruleset(Ruleset::Classic);
        assert_eq!(rules.scaled(30, 5), 30);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"ruleset":"classic"}"#).unwrap();
        assert_eq!(config.ruleset, Ruleset::Classic);
        assert_eq!(config.log_filter, "info");
        assert!(config.save_dir.is_none());
    }

    #[test]
    fn test_barrage_scored_with_configured_variant() {
        let score = MinigameScore::Barrage { hits: 12 };
        assert_eq!(EngineConfig::classic().loot_multiplier(&score), 2.0);
        let current = EngineConfig::default().loot_multiplier(&score);
        assert!((current - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = std::env::temp_dir().join("odyssey-missing-config.json");
        assert!(EngineConfig::load(&path).is_err());
    }
}

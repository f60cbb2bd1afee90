//! Combat flavor text.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FLAVOR_TEMPLATES: [&str; 7] = [
    "{attacker} strikes {target} with {action}!",
    "{attacker} unleashes {action} on {target}!",
    "A powerful {action} from {attacker} hits {target}!",
    "{target} staggers from {attacker}'s {action}!",
    "{attacker} uses {action}. Direct hit!",
    "{attacker} channels power into {action}, blasting {target}!",
    "With a roar, {attacker} lands a {action} on {target}!",
];

const CRIT_TEMPLATES: [&str; 4] = [
    "CRITICAL HIT! {attacker} crushes {target} with {action}!",
    "{attacker} finds a weak spot with {action}! Massive damage!",
    "Devastating blow! {attacker}'s {action} deals huge damage!",
    "{target} is reeling from a critical {action} by {attacker}!",
];

/// Supplies a cosmetic log line for a resolved attack. `None` falls back to a plain
/// damage message.
pub trait FlavorGenerator {
    fn flavor(
        &mut self,
        action: &str,
        attacker: &str,
        target: &str,
        damage: u32,
        critical: bool,
    ) -> Option<String>;
}

/// Picks a template and fills in the names.
pub fn combat_flavor(
    action: &str,
    attacker: &str,
    target: &str,
    damage: u32,
    critical: bool,
    rng: &mut impl Rng,
) -> String {
    let templates: &[&str] = if critical {
        &CRIT_TEMPLATES
    } else {
        &FLAVOR_TEMPLATES
    };
    let template = templates.choose(rng).copied().unwrap_or(FLAVOR_TEMPLATES[0]);
    template
        .replace("{attacker}", attacker)
        .replace("{target}", target)
        .replace("{action}", action)
        .replace("{damage}", &damage.to_string())
}

/// Template-based flavor with its own random source.
pub struct TemplateFlavor {
    rng: ChaCha8Rng,
}

impl TemplateFlavor {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl FlavorGenerator for TemplateFlavor {
    fn flavor(
        &mut self,
        action: &str,
        attacker: &str,
        target: &str,
        damage: u32,
        critical: bool,
    ) -> Option<String> {
        Some(combat_flavor(
            action,
            attacker,
            target,
            damage,
            critical,
            &mut self.rng,
        ))
    }
}

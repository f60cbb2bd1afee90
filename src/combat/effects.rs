//! Visual effect dispatch.
//!
//! Maps ability ids and elements to effect kinds for a renderer. Nothing in combat
//! resolution reads these; they ride along on animation cues.

use super::element::Element;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Bolt,
    Flame,
    Droplet,
    Rock,
    Frost,
    Void,
    Sparkle,
    Beam,
    Toxic,
    Sonic,
    /// Plain orb.
    Orb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactKind {
    Slash,
    Cross,
    Spin,
    Quake,
    Ripple,
    BlackHole,
    Rain,
    /// Element-colored ripple.
    Burst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleStyle {
    Spiral,
    Rain,
    Rise,
    Explode,
}

/// Full effect description for one resolved action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Projectile(ProjectileKind),
    Impact(ImpactKind),
    Heal,
}

/// How an ability id is matched against a dispatch rule.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    Exact(&'static str),
    Contains(&'static str),
}

impl Pattern {
    fn matches(self, id: &str) -> bool {
        match self {
            Pattern::Exact(exact) => id == exact,
            Pattern::Contains(part) => id.contains(part),
        }
    }
}

use Pattern::{Contains, Exact};

const PROJECTILE_RULES: &[(Pattern, ProjectileKind)] = &[
    (Contains("bolt"), ProjectileKind::Bolt),
    (Exact("spark"), ProjectileKind::Bolt),
    (Contains("fire"), ProjectileKind::Flame),
    (Exact("ember"), ProjectileKind::Flame),
    (Exact("inferno"), ProjectileKind::Flame),
    (Exact("bubble"), ProjectileKind::Droplet),
    (Exact("aqua_jet"), ProjectileKind::Droplet),
    (Contains("rock"), ProjectileKind::Rock),
    (Exact("pebble"), ProjectileKind::Rock),
    (Contains("ice"), ProjectileKind::Frost),
    (Exact("frost"), ProjectileKind::Frost),
    (Contains("void"), ProjectileKind::Void),
    (Exact("gloom"), ProjectileKind::Void),
    (Contains("magic"), ProjectileKind::Sparkle),
    (Exact("mystic"), ProjectileKind::Sparkle),
    (Contains("beam"), ProjectileKind::Beam),
    (Exact("ray"), ProjectileKind::Beam),
    (Exact("toxic_shot"), ProjectileKind::Toxic),
    (Exact("sonic_boom"), ProjectileKind::Sonic),
];

// Exact names go first so "cross_cut" is not swallowed by the "cut" rule.
const IMPACT_RULES: &[(Pattern, ImpactKind)] = &[
    (Exact("cross_cut"), ImpactKind::Cross),
    (Exact("x_scissor"), ImpactKind::Cross),
    (Contains("slash"), ImpactKind::Slash),
    (Contains("cut"), ImpactKind::Slash),
    (Exact("strike"), ImpactKind::Slash),
    (Exact("bladestorm"), ImpactKind::Spin),
    (Exact("cyclone"), ImpactKind::Spin),
    (Exact("earthquake"), ImpactKind::Quake),
    (Exact("fissure"), ImpactKind::Quake),
    (Contains("nova"), ImpactKind::Ripple),
    (Exact("explosion"), ImpactKind::Ripple),
    (Exact("black_hole"), ImpactKind::BlackHole),
    (Exact("rain"), ImpactKind::Rain),
    (Exact("blizzard"), ImpactKind::Rain),
    (Exact("spike_rain"), ImpactKind::Rain),
];

fn lookup<K: Copy>(rules: &[(Pattern, K)], id: &str, fallback: K) -> K {
    rules
        .iter()
        .find(|(pattern, _)| pattern.matches(id))
        .map_or(fallback, |&(_, kind)| kind)
}

/// First matching rule wins; unmatched ids get a plain orb.
pub fn projectile_for(ability_id: &str) -> ProjectileKind {
    lookup(PROJECTILE_RULES, ability_id, ProjectileKind::Orb)
}

/// First matching rule wins; unmatched ids get an element-colored burst.
pub fn impact_for(ability_id: &str) -> ImpactKind {
    lookup(IMPACT_RULES, ability_id, ImpactKind::Burst)
}

pub fn particles_for(element: Element) -> ParticleStyle {
    match element {
        Element::Fire | Element::Dark | Element::Arcane | Element::Quantum => {
            ParticleStyle::Spiral
        }
        Element::Water | Element::Blood | Element::Ice | Element::Steam => ParticleStyle::Rain,
        Element::Earth | Element::Nature | Element::Crystal => ParticleStyle::Rise,
        _ => ParticleStyle::Explode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_lookup() {
        assert_eq!(projectile_for("gloom"), ProjectileKind::Void);
        assert_eq!(projectile_for("fireball"), ProjectileKind::Flame);
        assert_eq!(projectile_for("solar_beam"), ProjectileKind::Beam);
        assert_eq!(projectile_for("strike"), ProjectileKind::Orb);
        assert_eq!(projectile_for("ice_shard"), ProjectileKind::Frost);
    }

    #[test]
    fn test_impact_lookup_order() {
        assert_eq!(impact_for("cross_cut"), ImpactKind::Cross);
        assert_eq!(impact_for("paper_cut"), ImpactKind::Slash);
        assert_eq!(impact_for("x_scissor"), ImpactKind::Cross);
        assert_eq!(impact_for("supernova"), ImpactKind::Ripple);
        assert_eq!(impact_for("spike_rain"), ImpactKind::Rain);
        assert_eq!(impact_for("gust"), ImpactKind::Burst);
    }

    #[test]
    fn test_particles() {
        assert_eq!(particles_for(Element::Steam), ParticleStyle::Rain);
        assert_eq!(particles_for(Element::Physical), ParticleStyle::Explode);
    }
}
